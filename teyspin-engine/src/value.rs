use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// One categorical value observed on an entity attribute.
///
/// Textual categories cover elements, nations, weapon types, boss regions
/// and role tags; numeric tiers cover star rarity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Tier(u8),
}

/// Attribute values carried by a single entity. Single-valued attributes
/// yield one element, multi-valued attributes zero or more.
pub type ValueSet = SmallVec<[AttrValue; 2]>;

impl AttrValue {
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    #[must_use]
    pub const fn tier(value: u8) -> Self {
        Self::Tier(value)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Tier(_) => None,
        }
    }

    #[must_use]
    pub const fn as_tier(&self) -> Option<u8> {
        match self {
            Self::Tier(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Presentation order for attribute domains: text sorts ascending,
    /// tiers sort descending (rarity is shown highest-first).
    #[must_use]
    pub fn domain_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Tier(a), Self::Tier(b)) => b.cmp(a),
            (Self::Text(_), Self::Tier(_)) => Ordering::Less,
            (Self::Tier(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Tier(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<u8> for AttrValue {
    fn from(value: u8) -> Self {
        Self::Tier(value)
    }
}
