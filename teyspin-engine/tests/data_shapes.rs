//! Shape checks over the embedded catalog data.

use std::collections::BTreeSet;

use teyspin_engine::{
    AttrValue, BossList, Cardinality, CharacterList, Entity, bosses, characters,
};

const CHARACTER_JSON: &str = include_str!("../../teyspin-web/static/assets/data/characters.json");
const BOSS_JSON: &str = include_str!("../../teyspin-web/static/assets/data/bosses.json");

#[test]
fn character_data_parses_into_a_catalog() {
    let catalog = CharacterList::from_json(CHARACTER_JSON)
        .unwrap()
        .into_catalog()
        .unwrap();
    assert!(catalog.len() >= 40, "character roster unexpectedly small");
}

#[test]
fn boss_data_parses_into_a_catalog() {
    let catalog = BossList::from_json(BOSS_JSON).unwrap().into_catalog().unwrap();
    assert!(catalog.len() >= 30, "boss directory unexpectedly small");
}

#[test]
fn single_valued_attributes_carry_exactly_one_value() {
    for entity in characters() {
        for attr in <teyspin_engine::Character as Entity>::schema() {
            let values = entity.attribute(attr.name);
            match attr.cardinality {
                Cardinality::Single => assert_eq!(
                    values.len(),
                    1,
                    "{}: attribute {} should be single-valued",
                    entity.name(),
                    attr.name
                ),
                Cardinality::Multi => {}
            }
        }
    }
}

#[test]
fn character_rarity_domain_is_highest_first() {
    assert_eq!(
        characters().domain_of("rarity"),
        vec![AttrValue::tier(5), AttrValue::tier(4)]
    );
}

#[test]
fn character_text_domains_are_sorted_ascending() {
    for attribute in ["element", "weapon_type", "nation", "roles"] {
        let domain = characters().domain_of(attribute);
        assert!(!domain.is_empty(), "empty domain for {attribute}");
        let mut sorted = domain.clone();
        sorted.sort_by(AttrValue::domain_cmp);
        assert_eq!(domain, sorted, "domain for {attribute} out of order");
    }
}

#[test]
fn character_elements_cover_the_seven() {
    let domain: BTreeSet<String> = characters()
        .domain_of("element")
        .into_iter()
        .filter_map(|value| value.as_text().map(str::to_string))
        .collect();
    for element in ["Anemo", "Cryo", "Dendro", "Electro", "Geo", "Hydro", "Pyro"] {
        assert!(domain.contains(element), "missing element {element}");
    }
}

#[test]
fn boss_directory_is_name_sorted() {
    let names: Vec<&str> = bosses().iter().map(Entity::name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn boss_types_come_from_the_known_set() {
    let known: BTreeSet<&str> = ["world boss", "weekly boss", "local legend"].into();
    for boss in bosses() {
        assert!(
            known.contains(boss.kind.as_str()),
            "{} has unknown type {:?}",
            boss.name,
            boss.kind
        );
    }
}

#[test]
fn boss_regions_deduplicate_into_a_stable_domain() {
    let domain = bosses().domain_of("region");
    let unique: BTreeSet<_> = domain.iter().collect();
    assert_eq!(domain.len(), unique.len());
    assert_eq!(domain, bosses().domain_of("region"));
}

#[test]
fn missing_required_attribute_is_rejected() {
    let truncated = r#"[{ "name": "Amber", "element": "Pyro", "nation": "Mondstadt" }]"#;
    assert!(CharacterList::from_json(truncated).is_err());
}
