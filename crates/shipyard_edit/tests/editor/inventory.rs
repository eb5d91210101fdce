//! Inventory ledger tests

use shipyard_edit::{Inventory, PartIdAllocator, PartType};

use crate::helpers::{catalog, single_definition, stocked};

#[test]
fn test_take_and_return_counts() {
    let catalog = catalog();
    let mut inventory = stocked(&catalog, &[("Cabin A", 2)]);
    let mut ids = PartIdAllocator::new();

    let part = inventory.try_take("Cabin A", &mut ids).unwrap();
    assert_eq!(part.name(), "Cabin A");
    assert_eq!(inventory.count("Cabin A"), 1);

    inventory.add(part.definition().clone());
    assert_eq!(inventory.count("Cabin A"), 2);

    assert!(inventory.try_take("Cabin A", &mut ids).is_some());
    assert!(inventory.try_take("Cabin A", &mut ids).is_some());
    assert_eq!(inventory.count("Cabin A"), 0);
    assert_eq!(inventory.entry_count(), 0);

    assert!(inventory.try_take("Cabin A", &mut ids).is_none());
    assert_eq!(inventory.count("Cabin A"), 0);
    assert_eq!(inventory.total(), 0);
}

#[test]
fn test_taken_instances_get_fresh_ids() {
    let catalog = catalog();
    let mut inventory = stocked(&catalog, &[("Cabin A", 2)]);
    let mut ids = PartIdAllocator::new();
    let first = inventory.try_take("Cabin A", &mut ids).unwrap();
    let second = inventory.try_take("Cabin A", &mut ids).unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_entries_sorted_by_name_within_type() {
    let mut inventory = Inventory::new();
    inventory.add(single_definition("Cabin B"));
    inventory.add(single_definition("Cabin C"));
    inventory.add(single_definition("Cabin A"));

    let names: Vec<_> = inventory.entries_of_type(PartType::Cabin).iter().map(|e| e.definition.name.clone()).collect();
    assert_eq!(names, vec!["Cabin A", "Cabin B", "Cabin C"]);
}

#[test]
fn test_last_unit_returns_to_same_slot() {
    let mut inventory = Inventory::new();
    for name in ["Cabin A", "Cabin B", "Cabin C"] {
        inventory.add(single_definition(name));
    }
    let before = inventory.counts();
    let mut ids = PartIdAllocator::new();

    let part = inventory.try_take("Cabin B", &mut ids).unwrap();
    assert_eq!(inventory.entry_count(), 2);
    inventory.add(part.definition().clone());

    assert_eq!(inventory.counts(), before);
}

#[test]
fn test_entries_follow_type_order() {
    let catalog = catalog();
    let inventory = stocked(&catalog, &[("Gun", 1), ("Wing L", 1), ("Cabin B", 1), ("Core X", 1)]);
    let names: Vec<_> = inventory.entries().iter().map(|e| e.definition.name.clone()).collect();
    assert_eq!(names, vec!["Cabin B", "Core X", "Wing L", "Gun"]);
    assert_eq!(inventory.entry_at(2).unwrap().definition.name, "Wing L");
}

#[test]
fn test_unknown_part_in_layout_is_skipped() {
    let catalog = catalog();
    let inventory = Inventory::load("[Wing]\nparts = [{ name = \"Wing L\", count = 3 }, { name = \"Wing Z\", count = 1 }]\n", &catalog).unwrap();
    assert_eq!(inventory.total(), 3);
    assert_eq!(inventory.count("Wing Z"), 0);
}
