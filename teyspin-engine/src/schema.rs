//! Attribute schema declarations and the entity seam.
//!
//! Every page of the hub runs the same filter/selection engine; pages differ
//! only in the entity type behind it. The schema is plain configuration data
//! (`[AttributeDef]`) so a new catalog type needs no new filter code.

use crate::value::ValueSet;
use serde::{Deserialize, Serialize};

/// How many values of an attribute a single entity may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Exactly one value per entity (element, nation, rarity tier).
    Single,
    /// Zero or more values per entity (role tags).
    Multi,
}

/// Declarative description of one filterable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    pub name: &'static str,
    pub cardinality: Cardinality,
}

impl AttributeDef {
    #[must_use]
    pub const fn single(name: &'static str) -> Self {
        Self {
            name,
            cardinality: Cardinality::Single,
        }
    }

    #[must_use]
    pub const fn multi(name: &'static str) -> Self {
        Self {
            name,
            cardinality: Cardinality::Multi,
        }
    }
}

/// A selectable catalog record.
///
/// The name is the identity key within a catalog; attributes are looked up
/// by schema name. Unknown attribute names yield an empty set.
pub trait Entity {
    fn name(&self) -> &str;

    /// Filterable attribute declarations for this entity type.
    fn schema() -> &'static [AttributeDef];

    /// Observed values for one attribute.
    fn attribute(&self, attribute: &str) -> ValueSet;
}
