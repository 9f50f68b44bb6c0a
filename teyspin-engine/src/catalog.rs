//! Immutable entity catalogs and attribute domain extraction.

use crate::schema::Entity;
use crate::value::AttrValue;
use std::collections::BTreeSet;
use thiserror::Error;

/// Catalog data violated its schema at load time. Fatal: the affected page
/// never starts with a partial catalog.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A record is missing a required attribute or carries the wrong type.
    #[error("catalog data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Two records share a name; names are identity keys.
    #[error("duplicate entity name in catalog: {0:?}")]
    DuplicateName(String),
}

/// Ordered, immutable sequence of entities of one type. Loaded once at
/// startup; all derived value sets are computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<E> {
    entries: Vec<E>,
}

impl<E: Entity> Catalog<E> {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateName`] when two records share a name.
    pub fn new(entries: Vec<E>) -> Result<Self, SchemaError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.name().to_string()) {
                return Err(SchemaError::DuplicateName(entry.name().to_string()));
            }
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&E> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// The same catalog reordered by entity name. The boss directory sorts
    /// once at load so catalog order and presentation order coincide.
    #[must_use]
    pub fn sorted_by_name(mut self) -> Self {
        self.entries.sort_by(|a, b| a.name().cmp(b.name()));
        self
    }

    /// Distinct observed values for `attribute`, multi-valued lists
    /// flattened, text sorted ascending and tiers descending.
    ///
    /// Output order is a pure function of catalog order; no randomness.
    #[must_use]
    pub fn domain_of(&self, attribute: &str) -> Vec<AttrValue> {
        let mut values: Vec<AttrValue> = Vec::new();
        for entity in &self.entries {
            for value in entity.attribute(attribute) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
        values.sort_by(AttrValue::domain_cmp);
        values
    }
}

impl<'a, E: Entity> IntoIterator for &'a Catalog<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttributeDef;
    use crate::value::ValueSet;
    use smallvec::smallvec;

    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        name: &'static str,
        tier: u8,
        tags: Vec<&'static str>,
    }

    const PROBE_SCHEMA: [AttributeDef; 2] =
        [AttributeDef::single("tier"), AttributeDef::multi("tags")];

    impl Entity for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn schema() -> &'static [AttributeDef] {
            &PROBE_SCHEMA
        }

        fn attribute(&self, attribute: &str) -> ValueSet {
            match attribute {
                "tier" => smallvec![AttrValue::tier(self.tier)],
                "tags" => self.tags.iter().map(|tag| AttrValue::text(tag)).collect(),
                _ => ValueSet::new(),
            }
        }
    }

    fn probe(name: &'static str, tier: u8, tags: &[&'static str]) -> Probe {
        Probe {
            name,
            tier,
            tags: tags.to_vec(),
        }
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let err = Catalog::new(vec![probe("Twin", 1, &[]), probe("Twin", 2, &[])]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName(name) if name == "Twin"));
    }

    #[test]
    fn domain_flattens_and_deduplicates_multi_values() {
        let catalog = Catalog::new(vec![
            probe("A", 1, &["support", "healer"]),
            probe("B", 2, &["healer", "dps"]),
        ])
        .unwrap();
        assert_eq!(
            catalog.domain_of("tags"),
            vec![
                AttrValue::text("dps"),
                AttrValue::text("healer"),
                AttrValue::text("support"),
            ]
        );
    }

    #[test]
    fn domain_orders_tiers_highest_first() {
        let catalog = Catalog::new(vec![
            probe("A", 2, &[]),
            probe("B", 1, &[]),
            probe("C", 3, &[]),
            probe("D", 1, &[]),
        ])
        .unwrap();
        assert_eq!(
            catalog.domain_of("tier"),
            vec![AttrValue::tier(3), AttrValue::tier(2), AttrValue::tier(1)]
        );
    }

    #[test]
    fn domain_of_unknown_attribute_is_empty() {
        let catalog = Catalog::new(vec![probe("A", 1, &[])]).unwrap();
        assert!(catalog.domain_of("color").is_empty());
    }

    #[test]
    fn sorted_by_name_reorders_entries() {
        let catalog = Catalog::new(vec![probe("Zed", 1, &[]), probe("Amber", 2, &[])])
            .unwrap()
            .sorted_by_name();
        let names: Vec<_> = catalog.iter().map(Entity::name).collect();
        assert_eq!(names, vec!["Amber", "Zed"]);
    }

    #[test]
    fn get_by_name_finds_entries() {
        let catalog = Catalog::new(vec![probe("Amber", 2, &[])]).unwrap();
        assert!(catalog.get_by_name("Amber").is_some());
        assert!(catalog.get_by_name("amber").is_none());
    }
}
