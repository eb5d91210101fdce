//! Suspended editor routines
//!
//! Some commands cannot finish within one input event because they wait for
//! the presentation. They hand a [`Routine`] back to the session, which raises
//! the routine's guard flag, steps it once per tick and lowers the guard when
//! the routine reports [`Step::Finished`]. Input is rejected in between.
//!
//! A routine never cancels halfway. When a stage cannot proceed it finishes
//! right away instead of waiting with half-restored state.

use crate::commands::{DeleteTarget, EditorContext, PartRecord};
use crate::{FlipAxis, GuardFlags, PartInstance, Rotation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Call `step` again next tick
    Yield,
    Finished,
}

/// Stages of [`Routine::RestoreDeleted`], in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreStage {
    Take,
    Transform,
    Reinsert,
    AwaitLerp,
}

#[derive(Debug)]
pub enum Routine {
    /// Wait for the lift lerp of a grabbed part
    GrabLerp,

    /// Bring a deleted part back out of the inventory
    RestoreDeleted {
        record: PartRecord,
        target: DeleteTarget,
        stage: RestoreStage,
        part: Option<PartInstance>,
    },
}

impl Routine {
    pub fn grab_lerp() -> Self {
        Routine::GrabLerp
    }

    pub fn restore_deleted(record: PartRecord, target: DeleteTarget) -> Self {
        Routine::RestoreDeleted {
            record,
            target,
            stage: RestoreStage::Take,
            part: None,
        }
    }

    /// Flag that blocks input while this routine runs
    pub fn guard(&self) -> GuardFlags {
        match self {
            Routine::GrabLerp => GuardFlags::MID_GRAB,
            Routine::RestoreDeleted { .. } => GuardFlags::MID_UNDO_DELETE,
        }
    }

    pub fn step(&mut self, ctx: &mut EditorContext) -> Step {
        match self {
            Routine::GrabLerp => {
                if ctx.presentation.is_animating() {
                    Step::Yield
                } else {
                    Step::Finished
                }
            }
            Routine::RestoreDeleted { record, target, stage, part } => restore_step(ctx, record, *target, stage, part),
        }
    }
}

fn restore_step(ctx: &mut EditorContext, record: &PartRecord, target: DeleteTarget, stage: &mut RestoreStage, part: &mut Option<PartInstance>) -> Step {
    match *stage {
        RestoreStage::Take => {
            let Some(taken) = ctx.inventory.try_take(&record.name, ctx.ids) else {
                log::warn!("Cannot restore '{}': not in the inventory", record.name);
                return Step::Finished;
            };
            *part = Some(taken);
            *stage = RestoreStage::Transform;
            Step::Yield
        }
        RestoreStage::Transform => {
            let Some(restored) = part.as_mut() else {
                return Step::Finished;
            };
            record.restore_onto(restored);
            let transform = record.transform;
            if transform.x_flipped {
                ctx.presentation.flip_immediate(FlipAxis::Horizontal);
            }
            if transform.y_flipped {
                ctx.presentation.flip_immediate(FlipAxis::Vertical);
            }
            if transform.rotation != Rotation::Deg0 {
                ctx.presentation.rotate_immediate(transform.rotation);
            }
            *stage = RestoreStage::Reinsert;
            Step::Yield
        }
        RestoreStage::Reinsert => {
            let Some(restored) = part.take() else {
                return Step::Finished;
            };
            match target {
                DeleteTarget::Held => {
                    if ctx.state.is_holding() {
                        log::warn!("Cannot restore '{}': hand is not empty", record.name);
                        ctx.inventory.add(restored.definition().clone());
                        return Step::Finished;
                    }
                    ctx.state.hold_internal(restored);
                    let cursor = ctx.state.cursor();
                    ctx.presentation.begin_lerp_to(cursor);
                    *stage = RestoreStage::AwaitLerp;
                    Step::Yield
                }
                DeleteTarget::Grid { center } => {
                    if let Err(restored) = ctx.grid.place(center, restored) {
                        log::warn!("Cannot restore '{}': {center} is occupied", record.name);
                        ctx.inventory.add(restored.definition().clone());
                    }
                    Step::Finished
                }
            }
        }
        RestoreStage::AwaitLerp => {
            if ctx.presentation.is_animating() {
                Step::Yield
            } else {
                Step::Finished
            }
        }
    }
}
