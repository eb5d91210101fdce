//! Semantic input events
//!
//! Text form, one event per line (used by scripts):
//!
//! ```text
//! submit | cancel | toggle | undo | redo | delete | reset
//! navigate <dx> <dy>        left / right / up / down also work
//! rotate cw|ccw
//! flip h|v
//! zoom in|out
//! ```

use std::str::FromStr;

use crate::{Cell, EditorError, FlipAxis, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Submit,
    Cancel,
    ToggleMode,
    Undo,
    Redo,
    Delete,
    Reset,
    Navigate(Cell),
    Rotate(RotateDirection),
    Flip(FlipAxis),
    Zoom(ZoomDirection),
}

impl InputEvent {
    pub const LEFT: InputEvent = InputEvent::Navigate(Cell::new(-1, 0));
    pub const RIGHT: InputEvent = InputEvent::Navigate(Cell::new(1, 0));
    pub const UP: InputEvent = InputEvent::Navigate(Cell::new(0, 1));
    pub const DOWN: InputEvent = InputEvent::Navigate(Cell::new(0, -1));
}

fn parse_int(word: Option<&str>, line: &str) -> Result<i32> {
    word.ok_or_else(|| EditorError::generic(format!("missing coordinate in '{line}'")))?
        .parse()
        .map_err(|_| EditorError::generic(format!("bad coordinate in '{line}'")))
}

impl FromStr for InputEvent {
    type Err = EditorError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(EditorError::generic("empty input line"));
        };
        let arg = words.next();
        let event = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("submit", None) => InputEvent::Submit,
            ("cancel", None) => InputEvent::Cancel,
            ("toggle", None) => InputEvent::ToggleMode,
            ("undo", None) => InputEvent::Undo,
            ("redo", None) => InputEvent::Redo,
            ("delete", None) => InputEvent::Delete,
            ("reset", None) => InputEvent::Reset,
            ("left", None) => InputEvent::LEFT,
            ("right", None) => InputEvent::RIGHT,
            ("up", None) => InputEvent::UP,
            ("down", None) => InputEvent::DOWN,
            ("navigate", dx) => {
                let dx = parse_int(dx, line)?;
                let dy = parse_int(words.next(), line)?;
                InputEvent::Navigate(Cell::new(dx, dy))
            }
            ("rotate", Some("cw")) => InputEvent::Rotate(RotateDirection::Clockwise),
            ("rotate", Some("ccw")) => InputEvent::Rotate(RotateDirection::CounterClockwise),
            ("flip", Some("h")) => InputEvent::Flip(FlipAxis::Horizontal),
            ("flip", Some("v")) => InputEvent::Flip(FlipAxis::Vertical),
            ("zoom", Some("in")) => InputEvent::Zoom(ZoomDirection::In),
            ("zoom", Some("out")) => InputEvent::Zoom(ZoomDirection::Out),
            _ => return Err(EditorError::generic(format!("unknown input '{line}'"))),
        };
        if words.next().is_some() {
            return Err(EditorError::generic(format!("trailing input in '{line}'")));
        }
        Ok(event)
    }
}
