use crate::error::Result;

/// A reversible mutation of a target `T`.
///
/// Implementations must be atomic: when `execute`, `undo` or `redo` returns
/// an error, the target must be left as it was before the call.
pub trait UndoCommand<T> {
    /// Returns the name of the command for display.
    fn name(&self) -> &str;

    /// Applies the command for the first time.
    ///
    /// Returns `Ok(false)` if nothing was modified; such a command is
    /// discarded instead of being recorded.
    fn execute(&mut self, target: &mut T) -> Result<bool>;

    /// Restores the state from before `execute` (or `redo`).
    fn undo(&mut self, target: &mut T) -> Result<()>;

    /// Reapplies the command after `undo`.
    fn redo(&mut self, target: &mut T) -> Result<()>;
}

impl<T, C> UndoCommand<T> for Box<C>
where
    C: UndoCommand<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(&mut self, target: &mut T) -> Result<bool> {
        (**self).execute(target)
    }

    fn undo(&mut self, target: &mut T) -> Result<()> {
        (**self).undo(target)
    }

    fn redo(&mut self, target: &mut T) -> Result<()> {
        (**self).redo(target)
    }
}
