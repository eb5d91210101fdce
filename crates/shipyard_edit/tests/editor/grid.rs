//! Occupancy grid tests

use shipyard_edit::{Footprint, OccupancyGrid, PartIdAllocator, Rotation};

use crate::helpers::{cell, part_with};

fn plus() -> Footprint {
    Footprint::from_mask([[false, true, false], [true, true, true], [false, true, false]])
}

#[test]
fn test_place_keys_every_cell() {
    let mut ids = PartIdAllocator::new();
    let mut grid = OccupancyGrid::new();
    let part = part_with(&mut ids, plus());
    let id = part.id();

    grid.place(cell(5, 5), part).unwrap();

    for c in [cell(5, 6), cell(4, 5), cell(5, 5), cell(6, 5), cell(5, 4)] {
        assert_eq!(grid.get_at(c).map(|p| p.id()), Some(id));
    }
    assert!(grid.get_at(cell(4, 4)).is_none());
    assert_eq!(grid.occupied_cells().count(), 5);
    assert!(grid.is_consistent());
}

#[test]
fn test_placed_at_is_last_canonical_cell() {
    let mut ids = PartIdAllocator::new();
    let mut grid = OccupancyGrid::new();

    let placed_at = grid.place(cell(5, 5), part_with(&mut ids, plus())).unwrap();

    assert_eq!(placed_at, cell(5, 4));
    let part = grid.get_at(cell(5, 5)).unwrap();
    assert_eq!(part.cell_placed_at, Some(cell(5, 4)));
    assert_eq!(part.position, cell(5, 5));
}

#[test]
fn test_conflict_hands_part_back_and_changes_nothing() {
    let mut ids = PartIdAllocator::new();
    let mut grid = OccupancyGrid::new();
    grid.place(cell(0, 0), part_with(&mut ids, plus())).unwrap();

    let intruder = part_with(&mut ids, plus());
    let intruder_id = intruder.id();
    assert!(!grid.can_place(cell(2, 0), &intruder));

    let returned = grid.place(cell(2, 0), intruder).unwrap_err();
    assert_eq!(returned.id(), intruder_id);
    assert_eq!(returned.cell_placed_at, None);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.occupied_cells().count(), 5);
    assert!(grid.get_at(cell(3, 0)).is_none());
}

#[test]
fn test_remove_from_any_cell_takes_whole_part() {
    let mut ids = PartIdAllocator::new();
    let mut grid = OccupancyGrid::new();
    let mut part = part_with(&mut ids, plus());
    part.transform.rotation = Rotation::Deg90;
    grid.place(cell(1, 1), part).unwrap();

    let removed = grid.remove(cell(0, 1)).unwrap();

    assert_eq!(removed.position, cell(1, 1));
    assert!(grid.is_empty());
    assert_eq!(grid.occupied_cells().count(), 0);
}

#[test]
fn test_remove_empty_cell_is_none() {
    let mut grid = OccupancyGrid::new();
    assert!(grid.remove(cell(9, 9)).is_none());
}

#[test]
fn test_adjacent_parts_do_not_collide() {
    let mut ids = PartIdAllocator::new();
    let mut grid = OccupancyGrid::new();
    grid.place(cell(0, 0), part_with(&mut ids, plus())).unwrap();
    grid.place(cell(2, 1), part_with(&mut ids, plus())).unwrap();
    assert_eq!(grid.len(), 2);
    assert!(grid.is_consistent());
}
