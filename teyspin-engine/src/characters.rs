//! Playable character catalog.

use crate::catalog::{Catalog, SchemaError};
use crate::schema::{AttributeDef, Entity};
use crate::value::{AttrValue, ValueSet};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use std::sync::OnceLock;

const DEFAULT_CHARACTER_DATA: &str =
    include_str!("../../teyspin-web/static/assets/data/characters.json");

/// Filterable attributes carried by every character.
pub const CHARACTER_SCHEMA: [AttributeDef; 5] = [
    AttributeDef::single("weapon_type"),
    AttributeDef::single("element"),
    AttributeDef::single("nation"),
    AttributeDef::single("rarity"),
    AttributeDef::multi("roles"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub element: String,
    pub weapon_type: String,
    pub nation: String,
    pub rarity: u8,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Entity for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema() -> &'static [AttributeDef] {
        &CHARACTER_SCHEMA
    }

    fn attribute(&self, attribute: &str) -> ValueSet {
        match attribute {
            "weapon_type" => smallvec![AttrValue::text(&self.weapon_type)],
            "element" => smallvec![AttrValue::text(&self.element)],
            "nation" => smallvec![AttrValue::text(&self.nation)],
            "rarity" => smallvec![AttrValue::tier(self.rarity)],
            "roles" => self.roles.iter().map(|role| AttrValue::text(role)).collect(),
            _ => ValueSet::new(),
        }
    }
}

/// Ordered character list as shipped in the static data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CharacterList(pub Vec<Character>);

impl CharacterList {
    /// Parse a character list from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Malformed`] when a record is missing a
    /// required attribute or carries the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let records: Vec<Character> = serde_json::from_str(json)?;
        Ok(Self(records))
    }

    /// Promote the list to an immutable catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateName`] when two records share a name.
    pub fn into_catalog(self) -> Result<Catalog<Character>, SchemaError> {
        Catalog::new(self.0)
    }
}

/// Characters embedded at build time, parsed once.
///
/// # Panics
///
/// Panics on first access if the embedded data violates the catalog schema;
/// a schema violation aborts startup rather than surfacing mid-session.
#[must_use]
pub fn characters() -> &'static Catalog<Character> {
    static CATALOG: OnceLock<Catalog<Character>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        CharacterList::from_json(DEFAULT_CHARACTER_DATA)
            .and_then(CharacterList::into_catalog)
            .expect("embedded character data must satisfy the catalog schema")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_json_parsing() {
        let json = r#"[
            {
                "name": "Amber",
                "element": "Pyro",
                "weapon_type": "Bow",
                "nation": "Mondstadt",
                "rarity": 4,
                "roles": ["DPS"]
            }
        ]"#;

        let list = CharacterList::from_json(json).unwrap();
        assert_eq!(list.0.len(), 1);
        assert_eq!(list.0[0].name, "Amber");
        assert_eq!(list.0[0].rarity, 4);
        assert_eq!(list.0[0].roles, ["DPS".to_string()]);
    }

    #[test]
    fn roles_default_to_empty() {
        let json = r#"[
            {
                "name": "Diluc",
                "element": "Pyro",
                "weapon_type": "Claymore",
                "nation": "Mondstadt",
                "rarity": 5
            }
        ]"#;

        let list = CharacterList::from_json(json).unwrap();
        assert!(list.0[0].roles.is_empty());
    }

    #[test]
    fn missing_attribute_fails_fast() {
        let json = r#"[{ "name": "Nameless", "element": "Pyro" }]"#;
        let err = CharacterList::from_json(json).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed(_)));
    }

    #[test]
    fn attribute_lookup_covers_the_schema() {
        let character = Character {
            name: "Jean".to_string(),
            element: "Anemo".to_string(),
            weapon_type: "Sword".to_string(),
            nation: "Mondstadt".to_string(),
            rarity: 5,
            roles: vec!["Healer".to_string(), "DPS".to_string()],
        };
        assert_eq!(
            character.attribute("element").as_slice(),
            [AttrValue::text("Anemo")]
        );
        assert_eq!(
            character.attribute("rarity").as_slice(),
            [AttrValue::tier(5)]
        );
        assert_eq!(character.attribute("roles").len(), 2);
        assert!(character.attribute("unknown").is_empty());
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = characters();
        assert!(!catalog.is_empty());
    }
}
