//! Command history
//!
//! Two stacks. Executing a new command clears the redo stack, so there is
//! never more than one redo path. The top of the undo stack may absorb an
//! incoming command (see [`EditorCommand::try_merge`]); merging only ever
//! looks one entry deep.

use crate::commands::{EditorCommand, EditorContext, Outcome};

#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command`, or merge it into the top of the undo stack.
    ///
    /// A rejected command is dropped and leaves both stacks untouched.
    pub fn execute(&mut self, mut command: EditorCommand, ctx: &mut EditorContext) -> Outcome {
        if let Some(top) = self.undo_stack.last_mut() {
            if top.try_merge(&command, ctx) {
                log::debug!("Merged '{}' into '{}'", command.description(), top.description());
                self.redo_stack.clear();
                return Outcome::Merged;
            }
        }

        let outcome = command.execute(ctx);
        if outcome.is_rejected() {
            log::debug!("Rejected '{}'", command.description());
            return outcome;
        }
        log::debug!("Executed '{}'", command.description());
        self.undo_stack.push(command);
        self.redo_stack.clear();
        outcome
    }

    /// Undo the most recent command. `None` when there is nothing to undo.
    pub fn undo(&mut self, ctx: &mut EditorContext) -> Option<Outcome> {
        let mut command = self.undo_stack.pop()?;
        let outcome = command.undo(ctx);
        log::debug!("Undid '{}': {:?}", command.description(), outcome);
        self.redo_stack.push(command);
        Some(outcome)
    }

    /// Redo the most recently undone command. `None` when there is nothing
    /// to redo.
    ///
    /// A command that re-validates and fails is dropped together with the
    /// rest of the redo path, which assumed it had happened.
    pub fn redo(&mut self, ctx: &mut EditorContext) -> Option<Outcome> {
        let mut command = self.redo_stack.pop()?;
        let outcome = command.redo(ctx);
        if outcome.is_rejected() {
            log::warn!("Redo of '{}' rejected, dropping redo stack", command.description());
            self.redo_stack.clear();
            return Some(outcome);
        }
        log::debug!("Redid '{}': {:?}", command.description(), outcome);
        self.undo_stack.push(command);
        Some(outcome)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|c| c.description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.description())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
