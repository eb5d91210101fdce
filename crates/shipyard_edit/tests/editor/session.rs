//! Session-level scenarios: input mapping, routines and guards

use pretty_assertions::assert_eq;
use shipyard_edit::{Dispatch, EditorMode, FlipAxis, GuardFlags, InputEvent, PresentationEvent, RotateDirection, Rotation, ZoomDirection};

use crate::helpers::{cell, owned_total, play, session, traced_session};

const ROTATE_CCW: InputEvent = InputEvent::Rotate(RotateDirection::CounterClockwise);
const FLIP_H: InputEvent = InputEvent::Flip(FlipAxis::Horizontal);

#[test]
fn test_place_rotate_undo_keeps_cell_membership() {
    let mut session = session(&[("Cabin A", 1)]);
    play(&mut session, &[InputEvent::Submit, InputEvent::Submit]);
    assert_eq!(session.grid().get_at(cell(0, 0)).unwrap().name(), "Cabin A");
    let placed = session.snapshot().model;

    // grab, rotate, place, then undo all three
    play(&mut session, &[InputEvent::Submit, ROTATE_CCW, InputEvent::Submit]);
    assert_eq!(session.grid().get_at(cell(0, 0)).unwrap().transform.rotation, Rotation::Deg90);
    play(&mut session, &[InputEvent::Undo, InputEvent::Undo, InputEvent::Undo]);

    assert_eq!(session.snapshot().model, placed);
    let occupied: Vec<_> = session.grid().occupied_cells().map(|(c, _)| *c).collect();
    assert_eq!(occupied, vec![cell(0, 0)]);
}

#[test]
fn test_grab_moves_cursor_to_part_center() {
    let mut session = session(&[("Core X", 1)]);
    play(&mut session, &[InputEvent::Submit, InputEvent::Submit, InputEvent::RIGHT]);
    assert_eq!(session.grid().get_at(cell(1, 0)).unwrap().name(), "Core X");

    play(&mut session, &[InputEvent::Submit]);
    assert_eq!(session.state().cursor(), cell(0, 0));
    assert_eq!(session.state().held().unwrap().position, cell(0, 0));
    assert!(session.grid().is_empty());

    play(&mut session, &[InputEvent::Undo]);
    assert_eq!(session.state().cursor(), cell(1, 0));
    assert_eq!(session.grid().len(), 1);
}

#[test]
fn test_delete_undo_restores_held_transform() {
    let mut session = session(&[("Gun", 1)]);
    play(&mut session, &[InputEvent::Submit, FLIP_H, ROTATE_CCW]);
    let held = session.state().held().unwrap();
    assert!(held.transform.x_flipped);
    assert_eq!(held.transform.rotation, Rotation::Deg90);
    let before_delete = session.snapshot().model;

    play(&mut session, &[InputEvent::Delete]);
    assert!(!session.state().is_holding());
    assert_eq!(session.inventory().count("Gun"), 1);

    play(&mut session, &[InputEvent::Undo]);
    let held = session.state().held().unwrap();
    assert!(held.transform.x_flipped);
    assert_eq!(held.transform.rotation, Rotation::Deg90);
    assert!(session.grid().is_empty());
    assert_eq!(session.inventory().count("Gun"), 0);
    assert_eq!(session.snapshot().model, before_delete);
}

#[test]
fn test_delete_undo_restores_placed_part() {
    let mut session = session(&[("Wing L", 1)]);
    play(&mut session, &[InputEvent::Submit, ROTATE_CCW, InputEvent::Submit]);
    let placed = session.snapshot().model;

    play(&mut session, &[InputEvent::Delete]);
    assert!(session.grid().is_empty());
    assert_eq!(session.inventory().count("Wing L"), 1);

    play(&mut session, &[InputEvent::Undo]);
    assert_eq!(session.snapshot().model, placed);
    assert!(session.is_consistent());

    play(&mut session, &[InputEvent::Redo]);
    assert!(session.grid().is_empty());
    assert_eq!(session.inventory().count("Wing L"), 1);
}

#[test]
fn test_routine_blocks_input_until_finished() {
    let mut session = traced_session(&[("Cabin A", 1)], 3);
    session.dispatch(InputEvent::Submit);
    session.dispatch(InputEvent::Submit);
    assert!(!session.is_busy());

    assert_eq!(session.dispatch(InputEvent::Submit), Dispatch::Applied);
    assert!(session.is_busy());
    assert_eq!(session.state().guards(), GuardFlags::MID_GRAB);
    assert_eq!(session.dispatch(InputEvent::RIGHT), Dispatch::Blocked);
    assert_eq!(session.dispatch(InputEvent::Undo), Dispatch::Blocked);
    assert_eq!(session.state().cursor(), cell(0, 0));

    assert!(session.run_until_idle(10));
    assert!(session.state().guards().is_empty());
    assert_eq!(session.dispatch(InputEvent::RIGHT), Dispatch::Applied);
}

#[test]
fn test_delete_undo_raises_its_own_guard() {
    let mut session = traced_session(&[("Cabin A", 1)], 2);
    session.dispatch(InputEvent::Submit);
    session.dispatch(InputEvent::Delete);

    assert_eq!(session.dispatch(InputEvent::Undo), Dispatch::Applied);
    assert_eq!(session.state().guards(), GuardFlags::MID_UNDO_DELETE);
    assert_eq!(session.dispatch(FLIP_H), Dispatch::Blocked);

    assert!(session.run_until_idle(20));
    assert!(session.state().is_holding());
    assert!(!session.is_busy());
}

#[test]
fn test_restore_plays_transform_immediately() {
    let mut session = traced_session(&[("Cabin A", 1)], 1);
    session.dispatch(InputEvent::Submit);
    session.dispatch(ROTATE_CCW);
    session.dispatch(InputEvent::Delete);
    session.presentation_mut().take_events();

    session.dispatch(InputEvent::Undo);
    session.run_until_idle(20);

    let events = session.presentation_mut().take_events();
    assert!(events.contains(&PresentationEvent::Rotate {
        rotation: Rotation::Deg90,
        immediate: true
    }));
    assert!(events.contains(&PresentationEvent::LerpTo(cell(0, 0))));
}

#[test]
fn test_submit_on_blocked_cell_is_rejected() {
    let mut session = session(&[("Core X", 2)]);
    play(&mut session, &[InputEvent::Submit, InputEvent::Submit, InputEvent::Cancel, InputEvent::Submit, InputEvent::RIGHT]);
    let depth = session.history().undo_len();

    assert_eq!(session.dispatch(InputEvent::Submit), Dispatch::Rejected);
    assert_eq!(session.history().undo_len(), depth);
    assert!(session.state().is_holding());
}

#[test]
fn test_cancel_returns_held_part_and_leaves_grid_mode() {
    let mut session = session(&[("Cabin A", 1), ("Cabin B", 1)]);
    play(&mut session, &[InputEvent::RIGHT, InputEvent::Submit]);
    assert_eq!(session.state().held().unwrap().name(), "Cabin B");

    play(&mut session, &[InputEvent::Cancel]);
    assert_eq!(session.state().mode(), EditorMode::Item);
    assert_eq!(session.state().hovered_item(), Some(1));
    assert_eq!(session.inventory().count("Cabin B"), 1);
}

#[test]
fn test_item_mode_ignores_grid_only_input() {
    let mut session = session(&[("Cabin A", 1)]);
    assert_eq!(session.dispatch(InputEvent::Delete), Dispatch::Ignored);
    assert_eq!(session.dispatch(ROTATE_CCW), Dispatch::Ignored);
    assert_eq!(session.dispatch(InputEvent::Cancel), Dispatch::Ignored);
    assert_eq!(session.history().undo_len(), 0);
}

#[test]
fn test_zoom_is_not_recorded() {
    let mut session = traced_session(&[], 1);
    assert_eq!(session.dispatch(InputEvent::Zoom(ZoomDirection::In)), Dispatch::Applied);
    assert!(session.is_expanded());
    assert_eq!(session.history().undo_len(), 0);
    assert!(session.presentation().events().contains(&PresentationEvent::SetExpanded(true)));
}

#[test]
fn test_ownership_is_exclusive_through_a_session() {
    let mut session = session(&[("Cabin A", 2), ("Core X", 1)]);
    let total = owned_total(&session);
    let events = [
        InputEvent::Submit,
        InputEvent::Submit,
        InputEvent::RIGHT,
        InputEvent::RIGHT,
        InputEvent::Cancel,
        InputEvent::RIGHT,
        InputEvent::Submit,
        InputEvent::Submit,
        InputEvent::Delete,
        InputEvent::Undo,
        InputEvent::Cancel,
    ];
    for event in events {
        play(&mut session, &[event]);
        assert!(session.is_consistent(), "inconsistent after {event:?}");
        assert_eq!(owned_total(&session), total, "part lost after {event:?}");
    }
}

#[test]
fn test_stock_by_unknown_name_fails() {
    let mut session = session(&[]);
    assert!(session.stock("Nope", 1).is_err());
    session.stock("Cabin A", 2).unwrap();
    assert_eq!(session.inventory().count("Cabin A"), 2);
    assert_eq!(session.state().hovered_item(), Some(0));
}

#[test]
fn test_stock_past_u32_max_fails_untouched() {
    let mut session = session(&[("Cabin A", 2)]);
    session.stock("Cabin A", u32::MAX - 2).unwrap();
    assert_eq!(session.inventory().count("Cabin A"), u32::MAX);
    assert!(session.stock("Cabin A", 1).is_err());
    assert_eq!(session.inventory().count("Cabin A"), u32::MAX);
    assert_eq!(owned_total(&session), u64::from(u32::MAX));
}

#[test]
fn test_reset_keeps_the_mode() {
    let mut session = session(&[("Cabin A", 1)]);
    play(&mut session, &[InputEvent::ToggleMode, InputEvent::RIGHT, InputEvent::ToggleMode]);
    assert_eq!(session.state().mode(), EditorMode::Item);

    play(&mut session, &[InputEvent::Reset]);
    assert_eq!(session.state().mode(), EditorMode::Item);
    assert_eq!(session.state().cursor(), cell(0, 0));

    play(&mut session, &[InputEvent::Undo]);
    assert_eq!(session.state().mode(), EditorMode::Item);
    assert_eq!(session.state().cursor(), cell(1, 0));
}
