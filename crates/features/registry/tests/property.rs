use proptest::prelude::*;
use zoo_clinic::ScriptedClinic;
use zoo_kernel::domain::prelude::*;
use zoo_registry::Zoo;

#[derive(Debug, Clone)]
enum Step {
    Animal { animal: Animal, approved: bool },
    Item(Item),
}

fn animal() -> impl Strategy<Value = Animal> {
    (0u32..=1_000, -20i32..=20, 0u8..4).prop_map(|(food, kindness, kind)| match kind {
        0 => Animal::rabbit("r", food, kindness),
        1 => Animal::monkey("m", food, kindness),
        2 => Animal::tiger("t", food),
        _ => Animal::wolf("w", food),
    })
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (animal(), any::<bool>()).prop_map(|(animal, approved)| Step::Animal { animal, approved }),
        "[a-z]{1,8}".prop_map(|name| Step::Item(Item::new(name, ItemKind::Other))),
    ]
}

proptest! {
    #[test]
    fn registry_invariants_hold(steps in prop::collection::vec(step(), 0..40)) {
        let verdicts: Vec<bool> = steps
            .iter()
            .filter_map(|s| match s {
                Step::Animal { approved, .. } => Some(*approved),
                Step::Item(_) => None,
            })
            .collect();
        let mut zoo = Zoo::new(ScriptedClinic::new(verdicts));

        let mut expected_food = 0u64;
        let mut expected_animals = 0usize;
        let mut issued = Vec::new();

        for step in steps {
            match step {
                Step::Animal { animal, approved } => {
                    let food = u64::from(animal.food_consumption());
                    let admission = zoo.register_animal(animal).unwrap();
                    prop_assert_eq!(admission.is_admitted(), approved);
                    if let Some(id) = admission.identifier() {
                        issued.push(id);
                        expected_food += food;
                        expected_animals += 1;
                    }
                },
                Step::Item(item) => issued.push(zoo.register_item(item).unwrap()),
            }
        }

        prop_assert_eq!(zoo.total_food(), expected_food);
        prop_assert_eq!(zoo.animal_count(), expected_animals);
        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(issued.first().map(|id| id.get()).unwrap_or(0), 0);

        for animal in zoo.contact_eligible() {
            prop_assert!(animal.kindness().is_some_and(|k| k > 5));
        }
        let eligible = zoo.animals().iter().filter(|a| a.kindness().is_some_and(|k| k > 5)).count();
        prop_assert_eq!(zoo.contact_eligible().len(), eligible);
    }
}
