use super::{UndoCommand, UndoCommandGroup};
use crate::constants::DEFAULT_UNDO_LIMIT;
use crate::error::{Result, UndoError};

/// Linear undo/redo history over a target `T`.
///
/// At most one command group may be open at a time. While a group is open its
/// children are applied immediately (for live preview) but nothing is recorded
/// until [`commit_group`](Self::commit_group). Recording a new entry clears the
/// redo history. A failing undo or redo leaves the history position unchanged.
pub struct UndoStack<T> {
    commands: Vec<Box<dyn UndoCommand<T>>>,
    current_index: usize,
    clean_index: Option<usize>,
    limit: usize,
    active_group: Option<UndoCommandGroup<T>>,
}

impl<T: 'static> UndoStack<T> {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }

    /// Creates a stack keeping at most `limit` entries (0 = unlimited).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            commands: Vec::new(),
            current_index: 0,
            clean_index: Some(0),
            limit,
            active_group: None,
        }
    }

    /// Executes a single command and records it as one undo step.
    ///
    /// Returns `Ok(false)` (nothing recorded) if the command did not modify
    /// the target.
    pub fn execute<C>(&mut self, mut cmd: C, target: &mut T) -> Result<bool>
    where
        C: UndoCommand<T> + 'static,
    {
        if self.active_group.is_some() {
            return Err(UndoError::GroupActive.into());
        }
        if !cmd.execute(target)? {
            tracing::debug!("command '{}' did not modify anything, discarded", cmd.name());
            return Ok(false);
        }
        self.push(Box::new(cmd));
        Ok(true)
    }

    /// Opens a new command group.
    pub fn begin_group(&mut self, name: impl Into<String>) -> Result<()> {
        if self.active_group.is_some() {
            return Err(UndoError::GroupAlreadyOpen.into());
        }
        let name = name.into();
        tracing::debug!("begin command group '{}'", name);
        self.active_group = Some(UndoCommandGroup::new(name));
        Ok(())
    }

    /// Executes `cmd` immediately and appends it to the open group.
    pub fn append_to_group<C>(&mut self, cmd: C, target: &mut T) -> Result<bool>
    where
        C: UndoCommand<T> + 'static,
    {
        let group = self.active_group.as_mut().ok_or(UndoError::NoOpenGroup)?;
        group.execute_child(cmd, target)
    }

    /// Closes the open group and records it.
    ///
    /// A group without children is dropped and `Ok(false)` is returned.
    pub fn commit_group(&mut self) -> Result<bool> {
        let group = self.active_group.take().ok_or(UndoError::NoOpenGroup)?;
        if group.is_empty() {
            tracing::debug!("command group '{}' is empty, nothing recorded", group.name());
            return Ok(false);
        }
        tracing::debug!(
            "commit command group '{}' ({} commands)",
            group.name(),
            group.child_count()
        );
        self.push(Box::new(group));
        Ok(true)
    }

    /// Reverts all children of the open group and discards it.
    ///
    /// On failure the group stays open.
    pub fn abort_group(&mut self, target: &mut T) -> Result<()> {
        let mut group = self.active_group.take().ok_or(UndoError::NoOpenGroup)?;
        if let Err(e) = group.undo(target) {
            tracing::warn!("aborting command group '{}' failed: {}", group.name(), e);
            self.active_group = Some(group);
            return Err(e);
        }
        tracing::debug!("aborted command group '{}'", group.name());
        Ok(())
    }

    pub fn undo(&mut self, target: &mut T) -> Result<()> {
        if self.active_group.is_some() {
            return Err(UndoError::GroupActive.into());
        }
        if self.current_index == 0 {
            return Err(UndoError::NothingToUndo.into());
        }
        let cmd = &mut self.commands[self.current_index - 1];
        cmd.undo(target)?;
        tracing::debug!("undo '{}'", cmd.name());
        self.current_index -= 1;
        Ok(())
    }

    pub fn redo(&mut self, target: &mut T) -> Result<()> {
        if self.active_group.is_some() {
            return Err(UndoError::GroupActive.into());
        }
        if self.current_index >= self.commands.len() {
            return Err(UndoError::NothingToRedo.into());
        }
        let cmd = &mut self.commands[self.current_index];
        cmd.redo(target)?;
        tracing::debug!("redo '{}'", cmd.name());
        self.current_index += 1;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.active_group.is_none() && self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.active_group.is_none() && self.current_index < self.commands.len()
    }

    /// Name of the entry that `undo` would revert.
    pub fn undo_text(&self) -> Option<&str> {
        self.current_index
            .checked_sub(1)
            .and_then(|i| self.commands.get(i))
            .map(|c| c.name())
    }

    /// Name of the entry that `redo` would reapply.
    pub fn redo_text(&self) -> Option<&str> {
        self.commands.get(self.current_index).map(|c| c.name())
    }

    pub fn is_command_group_active(&self) -> bool {
        self.active_group.is_some()
    }

    /// Number of entries that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.current_index
    }

    /// Number of entries that can be redone.
    pub fn redo_depth(&self) -> usize {
        self.commands.len() - self.current_index
    }

    /// Marks the current position as the saved state.
    pub fn set_clean(&mut self) {
        self.clean_index = Some(self.current_index);
    }

    pub fn is_clean(&self) -> bool {
        self.active_group.is_none() && self.clean_index == Some(self.current_index)
    }

    /// Drops the whole history. The open group, if any, is left untouched.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.current_index = 0;
        self.clean_index = Some(0);
    }

    fn push(&mut self, cmd: Box<dyn UndoCommand<T>>) {
        self.commands.truncate(self.current_index);
        if self.clean_index.is_some_and(|i| i > self.current_index) {
            self.clean_index = None;
        }
        self.commands.push(cmd);
        self.current_index += 1;

        if self.limit > 0 && self.commands.len() > self.limit {
            let excess = self.commands.len() - self.limit;
            self.commands.drain(..excess);
            self.current_index -= excess;
            self.clean_index = self.clean_index.and_then(|i| i.checked_sub(excess));
        }
    }
}

impl<T: 'static> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
