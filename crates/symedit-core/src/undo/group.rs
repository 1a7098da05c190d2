use super::UndoCommand;
use crate::error::Result;

/// An ordered bundle of commands forming a single undo step.
///
/// Children execute in order; undo runs in reverse order. A failing child
/// rolls back the children already processed, so the group as a whole is
/// atomic. Children reporting no modification are dropped, and a group left
/// without children reports no modification itself.
pub struct UndoCommandGroup<T> {
    name: String,
    children: Vec<Box<dyn UndoCommand<T>>>,
}

impl<T> UndoCommandGroup<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a child to be executed together with the group.
    pub fn append_child<C>(&mut self, cmd: C)
    where
        C: UndoCommand<T> + 'static,
    {
        self.children.push(Box::new(cmd));
    }

    /// Executes `cmd` right away and keeps it if it modified the target.
    ///
    /// Used for groups that are already applied (an open group on the undo
    /// stack), where children must take effect immediately.
    pub fn execute_child<C>(&mut self, mut cmd: C, target: &mut T) -> Result<bool>
    where
        C: UndoCommand<T> + 'static,
    {
        let modified = cmd.execute(target)?;
        if modified {
            self.children.push(Box::new(cmd));
        } else {
            tracing::trace!("discarding no-op command '{}'", cmd.name());
        }
        Ok(modified)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn rollback_undo(children: &mut [Box<dyn UndoCommand<T>>], target: &mut T) {
        for child in children.iter_mut().rev() {
            if let Err(e) = child.undo(target) {
                tracing::error!("rollback of '{}' failed: {}", child.name(), e);
            }
        }
    }

    fn rollback_redo(children: &mut [Box<dyn UndoCommand<T>>], target: &mut T) {
        for child in children.iter_mut() {
            if let Err(e) = child.redo(target) {
                tracing::error!("rollback of '{}' failed: {}", child.name(), e);
            }
        }
    }
}

impl<T> UndoCommand<T> for UndoCommandGroup<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, target: &mut T) -> Result<bool> {
        let pending = std::mem::take(&mut self.children);
        let mut applied: Vec<Box<dyn UndoCommand<T>>> = Vec::with_capacity(pending.len());
        for mut child in pending {
            match child.execute(target) {
                Ok(true) => applied.push(child),
                Ok(false) => tracing::trace!("dropping no-op child '{}'", child.name()),
                Err(e) => {
                    Self::rollback_undo(&mut applied, target);
                    return Err(e);
                }
            }
        }
        self.children = applied;
        Ok(!self.children.is_empty())
    }

    fn undo(&mut self, target: &mut T) -> Result<()> {
        for i in (0..self.children.len()).rev() {
            if let Err(e) = self.children[i].undo(target) {
                Self::rollback_redo(&mut self.children[i + 1..], target);
                return Err(e);
            }
        }
        Ok(())
    }

    fn redo(&mut self, target: &mut T) -> Result<()> {
        for i in 0..self.children.len() {
            if let Err(e) = self.children[i].redo(target) {
                Self::rollback_undo(&mut self.children[..i], target);
                return Err(e);
            }
        }
        Ok(())
    }
}
