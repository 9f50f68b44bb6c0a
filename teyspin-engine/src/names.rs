//! Name pool behind the custom wheel.
//!
//! The pool is the union of a fixed predefined list (each name independently
//! enabled, default on) and user-added temporary names. It feeds the same
//! selection engine as the catalogs, with no attribute filtering: the whole
//! pool is always eligible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names preloaded on the custom wheel.
pub const PREDEFINED_NAMES: [&str; 8] = [
    "Light", "Chiko", "Nyx", "Lirz", "Dango", "Mal", "Mocca", "Aren",
];

/// Rejected additions. Both are recoverable; callers treat them as silent
/// no-ops rather than surfacing a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamePoolError {
    #[error("name is empty or whitespace-only")]
    Empty,
    #[error("name {0:?} is already on the wheel")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PredefinedEntry {
    name: String,
    enabled: bool,
}

/// Mutable name pool for the custom wheel page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePool {
    predefined: Vec<PredefinedEntry>,
    temporary: Vec<String>,
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new()
    }
}

impl NamePool {
    /// Pool seeded with [`PREDEFINED_NAMES`], all enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_predefined(&PREDEFINED_NAMES)
    }

    /// Pool seeded with an arbitrary predefined list, all enabled.
    #[must_use]
    pub fn with_predefined(names: &[&str]) -> Self {
        Self {
            predefined: names
                .iter()
                .map(|name| PredefinedEntry {
                    name: (*name).to_string(),
                    enabled: true,
                })
                .collect(),
            temporary: Vec::new(),
        }
    }

    /// Predefined names with their enabled flags, in list order.
    pub fn predefined(&self) -> impl Iterator<Item = (&str, bool)> {
        self.predefined
            .iter()
            .map(|entry| (entry.name.as_str(), entry.enabled))
    }

    #[must_use]
    pub fn temporary(&self) -> &[String] {
        &self.temporary
    }

    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.predefined
            .iter()
            .any(|entry| entry.name == name && entry.enabled)
    }

    /// Flip a predefined name's enabled flag. Unknown names are ignored.
    pub fn toggle_predefined(&mut self, name: &str) {
        if let Some(entry) = self.predefined.iter_mut().find(|entry| entry.name == name) {
            entry.enabled = !entry.enabled;
        }
    }

    /// Whether `name` appears on either list, case-sensitive. Disabled
    /// predefined names still count: re-adding one as a temporary name
    /// would alias it on the wheel.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.predefined.iter().any(|entry| entry.name == name)
            || self.temporary.iter().any(|existing| existing == name)
    }

    /// Add a temporary name. Input is trimmed first.
    ///
    /// # Errors
    ///
    /// [`NamePoolError::Empty`] for empty or whitespace-only input,
    /// [`NamePoolError::Duplicate`] when the trimmed name already appears
    /// on either list (case-sensitive).
    pub fn add(&mut self, name: &str) -> Result<(), NamePoolError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NamePoolError::Empty);
        }
        if self.contains(trimmed) {
            return Err(NamePoolError::Duplicate(trimmed.to_string()));
        }
        self.temporary.push(trimmed.to_string());
        Ok(())
    }

    /// Remove a temporary name. Predefined names can only be disabled.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.temporary.len();
        self.temporary.retain(|existing| existing != name);
        self.temporary.len() != before
    }

    /// Active wheel entries: enabled predefined names first, then temporary
    /// names, both in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.predefined
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.name.clone())
            .chain(self.temporary.iter().cloned())
            .collect()
    }

    /// Number of active entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predefined.iter().filter(|entry| entry.enabled).count() + self.temporary.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_all_predefined_enabled() {
        let pool = NamePool::new();
        assert_eq!(pool.len(), PREDEFINED_NAMES.len());
        assert!(pool.predefined().all(|(_, enabled)| enabled));
    }

    #[test]
    fn toggle_predefined_shrinks_and_restores_the_pool() {
        let mut pool = NamePool::new();
        pool.toggle_predefined("Nyx");
        assert_eq!(pool.len(), 7);
        assert!(!pool.is_enabled("Nyx"));
        assert!(!pool.entries().contains(&"Nyx".to_string()));
        pool.toggle_predefined("Nyx");
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn add_trims_and_appends() {
        let mut pool = NamePool::new();
        pool.add("  Zed  ").unwrap();
        assert_eq!(pool.temporary(), ["Zed".to_string()]);
        assert_eq!(pool.len(), 9);
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let mut pool = NamePool::new();
        assert_eq!(pool.add(""), Err(NamePoolError::Empty));
        assert_eq!(pool.add("   "), Err(NamePoolError::Empty));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn add_rejects_duplicates_against_both_lists() {
        let mut pool = NamePool::new();
        pool.add("Zed").unwrap();
        assert_eq!(
            pool.add("Zed"),
            Err(NamePoolError::Duplicate("Zed".to_string()))
        );
        assert_eq!(
            pool.add("Chiko"),
            Err(NamePoolError::Duplicate("Chiko".to_string()))
        );
        assert_eq!(pool.len(), 9);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut pool = NamePool::new();
        pool.add("zed").unwrap();
        assert!(pool.add("Zed").is_ok());
        assert!(pool.add("chiko").is_ok());
        assert_eq!(pool.len(), 11);
    }

    #[test]
    fn disabled_predefined_names_still_block_duplicates() {
        let mut pool = NamePool::new();
        pool.toggle_predefined("Mocca");
        assert_eq!(
            pool.add("Mocca"),
            Err(NamePoolError::Duplicate("Mocca".to_string()))
        );
    }

    #[test]
    fn remove_only_touches_temporary_names() {
        let mut pool = NamePool::new();
        pool.add("Zed").unwrap();
        assert!(pool.remove("Zed"));
        assert!(!pool.remove("Zed"));
        assert!(!pool.remove("Light"));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn entries_keep_predefined_before_temporary() {
        let mut pool = NamePool::with_predefined(&["A", "B"]);
        pool.add("Y").unwrap();
        pool.add("Z").unwrap();
        pool.toggle_predefined("A");
        assert_eq!(pool.entries(), ["B", "Y", "Z"]);
    }
}
