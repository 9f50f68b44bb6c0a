//! Boss directory catalog.

use crate::catalog::{Catalog, SchemaError};
use crate::schema::{AttributeDef, Entity};
use crate::value::{AttrValue, ValueSet};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use std::sync::OnceLock;

const DEFAULT_BOSS_DATA: &str = include_str!("../../teyspin-web/static/assets/data/bosses.json");

/// Filterable attributes carried by every boss.
pub const BOSS_SCHEMA: [AttributeDef; 2] =
    [AttributeDef::single("region"), AttributeDef::single("type")];

/// One boss entry. The `type` field is lowercase in the data ("world boss",
/// "weekly boss", "local legend"); the view capitalizes it for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub region: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Entity for Boss {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema() -> &'static [AttributeDef] {
        &BOSS_SCHEMA
    }

    fn attribute(&self, attribute: &str) -> ValueSet {
        match attribute {
            "region" => smallvec![AttrValue::text(&self.region)],
            "type" => smallvec![AttrValue::text(&self.kind)],
            _ => ValueSet::new(),
        }
    }
}

/// Ordered boss list as shipped in the static data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BossList(pub Vec<Boss>);

impl BossList {
    /// Parse a boss list from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Malformed`] when a record is missing a
    /// required attribute.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let records: Vec<Boss> = serde_json::from_str(json)?;
        Ok(Self(records))
    }

    /// Promote the list to a name-sorted catalog. The directory presents
    /// bosses alphabetically, so sorting happens once here and catalog
    /// order stays the presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateName`] when two records share a name.
    pub fn into_catalog(self) -> Result<Catalog<Boss>, SchemaError> {
        Catalog::new(self.0).map(Catalog::sorted_by_name)
    }
}

/// Bosses embedded at build time, parsed once.
///
/// # Panics
///
/// Panics on first access if the embedded data violates the catalog schema.
#[must_use]
pub fn bosses() -> &'static Catalog<Boss> {
    static CATALOG: OnceLock<Catalog<Boss>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        BossList::from_json(DEFAULT_BOSS_DATA)
            .and_then(BossList::into_catalog)
            .expect("embedded boss data must satisfy the catalog schema")
    })
}
