use crate::{FlipAxis, Rotation};

use super::{EditorContext, EditorOperation, Outcome};

/// Rotate the held part by a quarter-turn step
#[derive(Debug)]
pub struct RotateCommand {
    step: Rotation,
}

impl RotateCommand {
    pub fn new(step: Rotation) -> Self {
        Self { step }
    }

    pub fn counter_clockwise() -> Self {
        Self::new(Rotation::Deg90)
    }

    pub fn clockwise() -> Self {
        Self::new(Rotation::Deg270)
    }

    fn rotate_held(ctx: &mut EditorContext, step: Rotation) -> Outcome {
        let Some(part) = ctx.state.held_mut_internal() else {
            return Outcome::Rejected;
        };
        part.transform.rotation = part.transform.rotation + step;
        ctx.presentation.rotate(step);
        Outcome::Done
    }
}

impl EditorOperation for RotateCommand {
    fn get_description(&self) -> String {
        match self.step {
            Rotation::Deg270 => "Rotate clockwise".to_string(),
            _ => "Rotate counter-clockwise".to_string(),
        }
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if self.step == Rotation::Deg0 {
            return Outcome::Rejected;
        }
        Self::rotate_held(ctx, self.step)
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        Self::rotate_held(ctx, self.step.inverse())
    }
}

/// Flip the held part along a screen axis
#[derive(Debug)]
pub struct FlipCommand {
    screen_axis: FlipAxis,
    /// Local axis actually toggled, fixed at first execution
    local_axis: Option<FlipAxis>,
}

impl FlipCommand {
    pub fn new(screen_axis: FlipAxis) -> Self {
        Self {
            screen_axis,
            local_axis: None,
        }
    }

    pub fn local_axis(&self) -> Option<FlipAxis> {
        self.local_axis
    }

    fn toggle(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(part) = ctx.state.held_mut_internal() else {
            return Outcome::Rejected;
        };
        match self.local_axis {
            Some(local) => part.transform.toggle_local(local),
            None => self.local_axis = Some(part.transform.flip(self.screen_axis)),
        }
        ctx.presentation.flip(self.screen_axis);
        Outcome::Done
    }
}

impl EditorOperation for FlipCommand {
    fn get_description(&self) -> String {
        match self.screen_axis {
            FlipAxis::Horizontal => "Flip horizontal".to_string(),
            FlipAxis::Vertical => "Flip vertical".to_string(),
        }
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.toggle(ctx)
    }

    // Flip is self-reversing
    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.toggle(ctx)
    }
}
