//! Multi-select filter state and eligibility.

use crate::catalog::Catalog;
use crate::schema::{AttributeDef, Entity};
use crate::value::AttrValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current multi-select constraints per attribute.
///
/// An empty selection for an attribute means "no constraint" (every value
/// passes), never "reject all". Values held here are always drawn from the
/// attribute's observed domain; the session boundary enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    selections: BTreeMap<String, BTreeSet<AttrValue>>,
}

impl FilterState {
    /// Unconstrained state covering every attribute in `schema`.
    #[must_use]
    pub fn new(schema: &[AttributeDef]) -> Self {
        Self {
            selections: schema
                .iter()
                .map(|attr| (attr.name.to_string(), BTreeSet::new()))
                .collect(),
        }
    }

    /// Add `value` to the attribute's selection if absent, remove it if
    /// present. Attributes outside the schema are ignored.
    pub fn toggle(&mut self, attribute: &str, value: AttrValue) {
        let Some(selection) = self.selections.get_mut(attribute) else {
            return;
        };
        if !selection.remove(&value) {
            selection.insert(value);
        }
    }

    /// Drop every selection, leaving all attributes unconstrained.
    pub fn clear(&mut self) {
        for selection in self.selections.values_mut() {
            selection.clear();
        }
    }

    #[must_use]
    pub fn selected(&self, attribute: &str) -> Option<&BTreeSet<AttrValue>> {
        self.selections.get(attribute)
    }

    #[must_use]
    pub fn is_selected(&self, attribute: &str, value: &AttrValue) -> bool {
        self.selections
            .get(attribute)
            .is_some_and(|selection| selection.contains(value))
    }

    /// Total selected values across all attributes (the filter badge count).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.selections.values().map(BTreeSet::len).sum()
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }
}

/// Whether `entity` satisfies every constrained attribute: single-valued
/// attributes need their value selected, multi-valued attributes need at
/// least one of their values selected.
#[must_use]
pub fn is_eligible<E: Entity>(entity: &E, filters: &FilterState) -> bool {
    E::schema().iter().all(|attr| {
        let Some(selection) = filters.selected(attr.name) else {
            return true;
        };
        if selection.is_empty() {
            return true;
        }
        entity
            .attribute(attr.name)
            .iter()
            .any(|value| selection.contains(value))
    })
}

/// The catalog-order subsequence of entities passing `filters`.
#[must_use]
pub fn eligible_set<'a, E: Entity>(catalog: &'a Catalog<E>, filters: &FilterState) -> Vec<&'a E> {
    catalog
        .iter()
        .filter(|entity| is_eligible(*entity, filters))
        .collect()
}
