use zoo_domain::prelude::*;

#[test]
fn groups_cover_their_kinds() {
    assert!(KindSet::TEMPERAMENT.includes(AnimalKind::Rabbit));
    assert!(KindSet::TEMPERAMENT.includes(AnimalKind::Monkey));
    assert!(!KindSet::TEMPERAMENT.includes(AnimalKind::Tiger));
    assert!(KindSet::CARNIVORE.includes(AnimalKind::Wolf));
    assert_eq!(KindSet::TEMPERAMENT | KindSet::CARNIVORE, KindSet::ALL);
}

#[test]
fn parses_group_and_kind_names() {
    assert_eq!(KindSet::from("herbivore"), KindSet::TEMPERAMENT);
    assert_eq!(KindSet::from("Carnivore"), KindSet::CARNIVORE);
    assert_eq!(KindSet::from("*"), KindSet::ALL);
    assert_eq!(KindSet::from("monkey"), KindSet::MONKEY);
    assert!(KindSet::from("dragon").is_empty());
}

#[test]
fn serializes_as_bits() {
    let set = KindSet::RABBIT | KindSet::WOLF;
    let raw = serde_json::to_string(&set).unwrap();
    assert_eq!(raw, "9");

    let back: KindSet = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, set);

    let truncated: KindSet = serde_json::from_str("255").unwrap();
    assert_eq!(truncated, KindSet::ALL);
    assert_eq!(KindSet::from(0b0100_u8), KindSet::TIGER);
}
