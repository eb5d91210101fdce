//! Presentation sink
//!
//! Visual side effects the editor triggers. The editor owns none of their
//! timing: it starts a lerp and polls [`PresentationSink::is_animating`] from
//! a routine until the presentation reports it finished.

use serde::Serialize;

use crate::{Cell, FlipAxis, Rotation};

/// What the highlight frame should surround
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Highlight {
    /// A grid cell (grid mode)
    Cell(Cell),
    /// An inventory entry by index (item mode)
    Item(usize),
}

pub trait PresentationSink {
    /// Move the highlight without animation
    fn update_highlight(&mut self, target: Highlight);

    /// Scale the highlight to an item's size
    fn match_scale(&mut self, item: usize);

    fn reset_scale(&mut self);

    fn set_expanded(&mut self, expanded: bool);

    /// Start moving the held part's visual toward `target`
    fn begin_lerp_to(&mut self, target: Cell);

    /// Whether a lerp started by `begin_lerp_to` is still running
    fn is_animating(&self) -> bool;

    fn flip(&mut self, axis: FlipAxis);

    fn flip_immediate(&mut self, axis: FlipAxis);

    fn rotate(&mut self, rotation: Rotation);

    fn rotate_immediate(&mut self, rotation: Rotation);

    /// Advance animations by one frame
    fn advance(&mut self) {}
}

/// Presentation that draws nothing and never animates
#[derive(Debug, Default)]
pub struct NullPresentation;

impl PresentationSink for NullPresentation {
    fn update_highlight(&mut self, _target: Highlight) {}
    fn match_scale(&mut self, _item: usize) {}
    fn reset_scale(&mut self) {}
    fn set_expanded(&mut self, _expanded: bool) {}
    fn begin_lerp_to(&mut self, _target: Cell) {}
    fn is_animating(&self) -> bool {
        false
    }
    fn flip(&mut self, _axis: FlipAxis) {}
    fn flip_immediate(&mut self, _axis: FlipAxis) {}
    fn rotate(&mut self, _rotation: Rotation) {}
    fn rotate_immediate(&mut self, _rotation: Rotation) {}
}

/// One recorded presentation call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PresentationEvent {
    Highlight(Highlight),
    MatchScale(usize),
    ResetScale,
    SetExpanded(bool),
    LerpTo(Cell),
    Flip { axis: FlipAxis, immediate: bool },
    Rotate { rotation: Rotation, immediate: bool },
}

/// Presentation that records every call and simulates lerp timing.
///
/// A lerp finishes after `lerp_frames` calls to `advance`.
#[derive(Debug, Default)]
pub struct TracePresentation {
    lerp_frames: u32,
    remaining: u32,
    events: Vec<PresentationEvent>,
}

impl TracePresentation {
    pub fn new(lerp_frames: u32) -> Self {
        Self {
            lerp_frames,
            remaining: 0,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: PresentationEvent) {
        log::trace!("presentation: {event:?}");
        self.events.push(event);
    }
}

impl PresentationSink for TracePresentation {
    fn update_highlight(&mut self, target: Highlight) {
        self.record(PresentationEvent::Highlight(target));
    }

    fn match_scale(&mut self, item: usize) {
        self.record(PresentationEvent::MatchScale(item));
    }

    fn reset_scale(&mut self) {
        self.record(PresentationEvent::ResetScale);
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.record(PresentationEvent::SetExpanded(expanded));
    }

    fn begin_lerp_to(&mut self, target: Cell) {
        self.remaining = self.lerp_frames;
        self.record(PresentationEvent::LerpTo(target));
    }

    fn is_animating(&self) -> bool {
        self.remaining > 0
    }

    fn flip(&mut self, axis: FlipAxis) {
        self.record(PresentationEvent::Flip { axis, immediate: false });
    }

    fn flip_immediate(&mut self, axis: FlipAxis) {
        self.record(PresentationEvent::Flip { axis, immediate: true });
    }

    fn rotate(&mut self, rotation: Rotation) {
        self.record(PresentationEvent::Rotate { rotation, immediate: false });
    }

    fn rotate_immediate(&mut self, rotation: Rotation) {
        self.record(PresentationEvent::Rotate { rotation, immediate: true });
    }

    fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
