//! Command tests against loose editor pieces

use shipyard_edit::commands::{
    DeleteCommand, DeleteTarget, EditorOperation, EnterGridModeCommand, ExitGridModeCommand, FlipCommand, InventoryGrabCommand, NavigateCommand,
    PartRecord, PlaceCommand, ResetCommand, RotateCommand,
};
use shipyard_edit::{EditorMode, FlipAxis, Outcome, Rotation, Routine, Step, Transform};

use crate::helpers::{catalog, cell, stocked, Fixture};

/// Fixture in grid mode holding one "Cabin A"
fn holding_fixture() -> Fixture {
    let mut fx = Fixture::new(stocked(&catalog(), &[("Cabin A", 1)]));
    let mut take = InventoryGrabCommand::new();
    assert!(matches!(take.execute(&mut fx.ctx()), Outcome::Done));
    fx
}

#[test]
fn test_transform_commands_need_a_held_part() {
    let mut fx = Fixture::new(stocked(&catalog(), &[]));
    assert!(RotateCommand::clockwise().execute(&mut fx.ctx()).is_rejected());
    assert!(FlipCommand::new(FlipAxis::Horizontal).execute(&mut fx.ctx()).is_rejected());
    assert!(PlaceCommand::new().execute(&mut fx.ctx()).is_rejected());
}

#[test]
fn test_inventory_grab_holds_at_cursor_in_grid_mode() {
    let fx = holding_fixture();
    assert_eq!(fx.state.mode(), EditorMode::Grid);
    assert_eq!(fx.state.hovered_item(), None);
    let held = fx.state.held().unwrap();
    assert_eq!(held.name(), "Cabin A");
    assert_eq!(held.position, fx.state.cursor());
    assert_eq!(fx.inventory.total(), 0);
}

#[test]
fn test_inventory_grab_undo_returns_part_and_hover() {
    let mut fx = Fixture::new(stocked(&catalog(), &[("Cabin A", 1), ("Cabin B", 1)]));
    let before = fx.state.navigation();
    let mut take = InventoryGrabCommand::new();
    take.execute(&mut fx.ctx());

    assert!(matches!(take.undo(&mut fx.ctx()), Outcome::Done));

    assert_eq!(fx.state.navigation(), before);
    assert!(!fx.state.is_holding());
    assert_eq!(fx.inventory.counts(), vec![("Cabin A".to_string(), 1), ("Cabin B".to_string(), 1)]);
}

#[test]
fn test_rotate_undo_restores_rotation() {
    let mut fx = holding_fixture();
    let mut rotate = RotateCommand::clockwise();
    rotate.execute(&mut fx.ctx());
    assert_eq!(fx.state.held().unwrap().transform.rotation, Rotation::Deg270);
    rotate.undo(&mut fx.ctx());
    assert_eq!(fx.state.held().unwrap().transform.rotation, Rotation::Deg0);
}

#[test]
fn test_flip_records_local_axis_once() {
    let mut fx = holding_fixture();
    RotateCommand::counter_clockwise().execute(&mut fx.ctx());

    let mut flip = FlipCommand::new(FlipAxis::Horizontal);
    flip.execute(&mut fx.ctx());
    assert_eq!(flip.local_axis(), Some(FlipAxis::Vertical));
    assert_eq!(fx.state.held().unwrap().transform, Transform::new(false, true, Rotation::Deg90));

    flip.undo(&mut fx.ctx());
    assert_eq!(fx.state.held().unwrap().transform, Transform::new(false, false, Rotation::Deg90));
    flip.redo(&mut fx.ctx());
    assert_eq!(fx.state.held().unwrap().transform, Transform::new(false, true, Rotation::Deg90));
}

#[test]
fn test_place_then_undo_reholds_part() {
    let mut fx = holding_fixture();
    let mut place = PlaceCommand::new();
    assert!(matches!(place.execute(&mut fx.ctx()), Outcome::Done));
    assert_eq!(place.placed_at(), Some(cell(0, 0)));
    assert!(!fx.state.is_holding());
    assert_eq!(fx.grid.get_at(cell(0, 0)).unwrap().name(), "Cabin A");

    place.undo(&mut fx.ctx());
    assert!(fx.grid.is_empty());
    assert_eq!(fx.state.held().unwrap().name(), "Cabin A");
}

#[test]
fn test_place_on_occupied_cell_keeps_part_in_hand() {
    let mut fx = Fixture::new(stocked(&catalog(), &[("Cabin A", 2)]));
    InventoryGrabCommand::new().execute(&mut fx.ctx());
    PlaceCommand::new().execute(&mut fx.ctx());
    ExitGridModeCommand::new().execute(&mut fx.ctx());
    InventoryGrabCommand::new().execute(&mut fx.ctx());

    let outcome = PlaceCommand::new().execute(&mut fx.ctx());

    assert!(outcome.is_rejected());
    assert!(fx.state.is_holding());
    assert_eq!(fx.grid.len(), 1);
}

#[test]
fn test_navigate_in_item_mode_wraps_hover() {
    let mut fx = Fixture::new(stocked(&catalog(), &[("Cabin A", 1), ("Cabin B", 1), ("Gun", 1)]));
    let mut nav = NavigateCommand::new(cell(-1, 0));
    nav.execute(&mut fx.ctx());
    assert_eq!(fx.state.hovered_item(), Some(2));
    nav.undo(&mut fx.ctx());
    assert_eq!(fx.state.hovered_item(), Some(0));
}

#[test]
fn test_mode_commands_round_trip() {
    let mut fx = Fixture::new(stocked(&catalog(), &[("Cabin A", 1), ("Cabin B", 1)]));
    NavigateCommand::new(cell(1, 0)).execute(&mut fx.ctx());
    let item_nav = fx.state.navigation();

    let mut enter = EnterGridModeCommand::new();
    enter.execute(&mut fx.ctx());
    assert_eq!(fx.state.mode(), EditorMode::Grid);
    assert!(enter.execute(&mut fx.ctx()).is_rejected());

    let mut exit = ExitGridModeCommand::new();
    exit.execute(&mut fx.ctx());
    assert_eq!(fx.state.mode(), EditorMode::Item);
    assert_eq!(fx.state.hovered_item(), Some(1));

    exit.undo(&mut fx.ctx());
    enter.undo(&mut fx.ctx());
    assert_eq!(fx.state.navigation(), item_nav);
}

#[test]
fn test_exit_grid_mode_returns_held_part() {
    let mut fx = holding_fixture();
    RotateCommand::counter_clockwise().execute(&mut fx.ctx());

    let mut exit = ExitGridModeCommand::new();
    exit.execute(&mut fx.ctx());
    assert!(!fx.state.is_holding());
    assert_eq!(fx.inventory.count("Cabin A"), 1);
    assert_eq!(exit.returned().unwrap().transform.rotation, Rotation::Deg90);

    exit.undo(&mut fx.ctx());
    assert_eq!(fx.state.mode(), EditorMode::Grid);
    assert_eq!(fx.state.held().unwrap().transform.rotation, Rotation::Deg90);
    assert_eq!(fx.inventory.count("Cabin A"), 0);
}

#[test]
fn test_reset_restores_only_cursor() {
    let mut fx = holding_fixture();
    NavigateCommand::new(cell(3, 2)).execute(&mut fx.ctx());
    PlaceCommand::new().execute(&mut fx.ctx());

    let mut reset = ResetCommand::new();
    reset.execute(&mut fx.ctx());
    assert_eq!(fx.state.cursor(), cell(0, 0));
    assert_eq!(fx.state.mode(), EditorMode::Grid);

    reset.undo(&mut fx.ctx());
    assert_eq!(fx.state.cursor(), cell(3, 2));
    assert_eq!(fx.grid.get_at(cell(3, 2)).unwrap().name(), "Cabin A");
}

#[test]
fn test_delete_held_returns_definition() {
    let mut fx = holding_fixture();
    let mut delete = DeleteCommand::new();
    assert!(matches!(delete.execute(&mut fx.ctx()), Outcome::Done));
    assert_eq!(delete.target(), Some(DeleteTarget::Held));
    assert!(!fx.state.is_holding());
    assert_eq!(fx.inventory.count("Cabin A"), 1);

    let Outcome::Pending(routine) = delete.undo(&mut fx.ctx()) else {
        panic!("delete undo must schedule a routine");
    };
    assert!(matches!(routine, Routine::RestoreDeleted { .. }));
}

#[test]
fn test_delete_nothing_is_rejected() {
    let mut fx = Fixture::new(stocked(&catalog(), &[]));
    EnterGridModeCommand::new().execute(&mut fx.ctx());
    assert!(DeleteCommand::new().execute(&mut fx.ctx()).is_rejected());
}

#[test]
fn test_restore_with_empty_inventory_finishes_immediately() {
    let mut fx = Fixture::new(stocked(&catalog(), &[]));
    let record = PartRecord {
        name: "Cabin A".to_string(),
        transform: Transform::new(true, false, Rotation::Deg90),
        cell_placed_at: None,
    };
    let mut routine = Routine::restore_deleted(record, DeleteTarget::Held);

    assert_eq!(routine.step(&mut fx.ctx()), Step::Finished);
    assert!(!fx.state.is_holding());
    assert_eq!(fx.inventory.total(), 0);
}

#[test]
fn test_restore_to_occupied_cell_returns_part_to_inventory() {
    let mut fx = Fixture::new(stocked(&catalog(), &[("Cabin A", 1), ("Cabin B", 1)]));
    InventoryGrabCommand::new().execute(&mut fx.ctx());
    PlaceCommand::new().execute(&mut fx.ctx());

    let record = PartRecord {
        name: "Cabin B".to_string(),
        transform: Transform::default(),
        cell_placed_at: Some(cell(0, 0)),
    };
    let mut routine = Routine::restore_deleted(record, DeleteTarget::Grid { center: cell(0, 0) });
    let mut steps = 0;
    while routine.step(&mut fx.ctx()) == Step::Yield {
        steps += 1;
        assert!(steps < 10);
    }

    assert_eq!(fx.grid.get_at(cell(0, 0)).unwrap().name(), "Cabin A");
    assert_eq!(fx.inventory.count("Cabin B"), 1);
}

#[test]
fn test_descriptions_name_the_part() {
    let mut fx = holding_fixture();
    let mut place = PlaceCommand::new();
    assert_eq!(place.get_description(), "Place");
    place.execute(&mut fx.ctx());
    assert_eq!(place.get_description(), "Place Cabin A");
}
