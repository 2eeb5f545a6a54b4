use zoo_clinic::{AdmissionPolicy, RuleClinic, ScriptedClinic, Verdict};
use zoo_kernel::domain::prelude::*;
use zoo_registry::{Admission, RegistryError, Zoo};

#[test]
fn empty_registry_has_no_food_and_no_eligible_animals() {
    let zoo = Zoo::new(Verdict::Approve);
    assert_eq!(zoo.total_food(), 0);
    assert_eq!(zoo.animal_count(), 0);
    assert_eq!(zoo.item_count(), 0);
    assert!(zoo.contact_eligible().is_empty());
}

#[test]
fn total_food_sums_admitted_animals() {
    let mut zoo = Zoo::new(Verdict::Approve);
    assert!(zoo.register_animal(Animal::wolf("Akela", 15)).unwrap().is_admitted());
    assert!(zoo.register_animal(Animal::rabbit("Bugs", 8, 12)).unwrap().is_admitted());
    assert_eq!(zoo.total_food(), 23);
}

#[test]
fn missing_animal_is_invalid_and_leaves_state_alone() {
    let mut zoo = Zoo::new(ScriptedClinic::new([true]));

    let err = zoo.register_animal(None::<Animal>).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    assert_eq!(zoo.animal_count(), 0);
    assert_eq!(zoo.policy().assessed(), 0);

    let id = zoo.register_item(Item::table("Table")).unwrap();
    assert_eq!(id, Identifier::new(0));
}

#[test]
fn missing_item_is_invalid() {
    let mut zoo = Zoo::new(Verdict::Approve);
    let err = zoo.register_item(None::<Item>).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    assert!(err.to_string().contains("item candidate is required"));
    assert_eq!(zoo.item_count(), 0);
}

#[test]
fn identifiers_are_shared_across_collections() {
    let mut zoo = Zoo::new(Verdict::Approve);

    let a = zoo.register_item(Item::table("A")).unwrap();
    let b = zoo.register_item(Item::computer("B")).unwrap();
    let c = zoo.register_animal(Animal::tiger("C", 20)).unwrap();

    assert_eq!(a, Identifier::new(0));
    assert_eq!(b, Identifier::new(1));
    assert_eq!(c, Admission::Admitted(Identifier::new(2)));

    assert_eq!(zoo.items()[1].identifier(), Some(b));
    assert_eq!(zoo.animals()[0].identifier(), Some(Identifier::new(2)));
}

#[test]
fn rejected_animal_is_handed_back_without_an_identifier() {
    let mut zoo = Zoo::new(ScriptedClinic::new([false, true]));
    let bugs = Animal::rabbit("Bugs", 8, 12);

    let denied = zoo.register_animal(bugs.clone()).unwrap();
    let Admission::Denied(returned) = denied else {
        panic!("expected denial, got {denied:?}");
    };
    assert_eq!(returned, bugs);
    assert_eq!(returned.identifier(), None);
    assert_eq!(zoo.animal_count(), 0);
    assert_eq!(zoo.total_food(), 0);

    // The counter was not consumed by the refusal.
    let admitted = zoo.register_animal(returned).unwrap();
    assert_eq!(admitted.identifier(), Some(Identifier::new(0)));
}

#[test]
fn contact_eligible_keeps_admission_order() {
    let mut zoo = Zoo::new(Verdict::Approve);
    for animal in [
        Animal::monkey("George", 5, 9),
        Animal::tiger("Shere Khan", 20),
        Animal::rabbit("Timid", 3, 5),
        Animal::rabbit("Bugs", 8, 12),
        Animal::wolf("Akela", 15),
    ] {
        let _ = zoo.register_animal(animal).unwrap();
    }

    let names: Vec<&str> = zoo.contact_eligible().into_iter().map(Inventory::name).collect();
    assert_eq!(names, ["George", "Bugs"]);
}

#[test]
fn duplicates_are_not_deduplicated() {
    let mut zoo = Zoo::new(Verdict::Approve);
    let bugs = Animal::rabbit("Bugs", 8, 12);
    let first = zoo.register_animal(bugs.clone()).unwrap();
    let second = zoo.register_animal(bugs).unwrap();

    assert_ne!(first.identifier(), second.identifier());
    assert_eq!(zoo.animal_count(), 2);
}

#[test]
fn filters_by_kind_set() {
    let mut zoo = Zoo::new(Verdict::Approve);
    let _ = zoo.register_animal(Animal::monkey("George", 5, 9)).unwrap();
    let _ = zoo.register_animal(Animal::tiger("Shere Khan", 20)).unwrap();
    let _ = zoo.register_animal(Animal::wolf("Akela", 15)).unwrap();

    assert_eq!(zoo.animals_of(KindSet::CARNIVORE).count(), 2);
    assert_eq!(zoo.animals_of("monkey").count(), 1);
    assert_eq!(zoo.animals_of(AnimalKind::Rabbit).count(), 0);
}

#[test]
fn report_renders_totals() {
    let mut zoo = Zoo::new(Verdict::Approve);
    zoo.register_item(Item::table("Table")).unwrap();
    let _ = zoo.register_animal(Animal::wolf("Akela", 15)).unwrap();

    let report = zoo.report();
    assert_eq!((report.animals, report.items, report.food), (1, 1, 15));
    assert_eq!(report.to_string(), "Animals: 1\nItems: 1\nFood consumption: 15 kg/day");
}

#[test]
fn policy_can_be_chosen_at_runtime() {
    let rule = RuleClinic::new(|a: &Animal| a.kindness().is_some());
    let policy: Box<dyn AdmissionPolicy> = Box::new(rule);
    let mut zoo: Zoo = Zoo::new(policy);

    assert!(zoo.register_animal(Animal::rabbit("Bugs", 8, 12)).unwrap().is_admitted());
    assert!(!zoo.register_animal(Animal::tiger("Shere Khan", 20)).unwrap().is_admitted());

    let mut boxed = Zoo::boxed(Verdict::Reject);
    assert!(!boxed.register_animal(Animal::wolf("Akela", 15)).unwrap().is_admitted());
}

#[test]
fn policy_state_is_reachable() {
    let mut zoo = Zoo::new(ScriptedClinic::default());
    zoo.policy_mut().push(true);
    assert!(zoo.register_animal(Animal::wolf("Akela", 15)).unwrap().is_admitted());
    assert_eq!(zoo.policy().assessed(), 1);
}

#[test]
fn denied_copy_of_a_resident_comes_back_unregistered() {
    let mut zoo = Zoo::new(ScriptedClinic::new([true, false]));
    let _ = zoo.register_animal(Animal::rabbit("Bugs", 8, 12)).unwrap();

    let copy = zoo.animals()[0].clone();
    assert_eq!(copy.identifier(), Some(Identifier::new(0)));

    let Admission::Denied(returned) = zoo.register_animal(copy).unwrap() else {
        panic!("second assessment is scripted to refuse");
    };
    assert_eq!(returned.identifier(), None);
    assert_eq!(zoo.animal_count(), 1);
}

#[test]
fn preset_identifiers_are_replaced_on_admission() {
    let mut zoo = Zoo::new(Verdict::Approve);
    zoo.register_item(Item::table("Table")).unwrap();

    let mut wolf = Animal::wolf("Akela", 15);
    wolf.set_identifier(Identifier::new(0));
    let mut bench = Item::new("Bench", ItemKind::Other);
    bench.set_identifier(Identifier::new(0));

    assert_eq!(zoo.register_animal(wolf).unwrap().identifier(), Some(Identifier::new(1)));
    assert_eq!(zoo.register_item(bench).unwrap(), Identifier::new(2));
    assert_eq!(zoo.animals()[0].identifier(), Some(Identifier::new(1)));
}

#[test]
fn borrowed_policy_keeps_its_state_after_the_registry() {
    let mut scripted = ScriptedClinic::new([true, false]);
    {
        let mut zoo = Zoo::new(&mut scripted);
        assert!(zoo.register_animal(Animal::wolf("Akela", 15)).unwrap().is_admitted());
        assert!(!zoo.register_animal(Animal::tiger("Shere Khan", 20)).unwrap().is_admitted());
    }
    assert_eq!(scripted.assessed(), 2);
    assert_eq!(scripted.remaining(), 0);
}
