use symedit_core::{Error, Result, UndoCommand, UndoError, UndoStack};

/// Records operations on a list of strings; fails on demand.
struct AppendWord {
    word: String,
    fail_undo: bool,
}

impl AppendWord {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            fail_undo: false,
        }
    }

    fn failing_undo(word: &str) -> Self {
        Self {
            word: word.to_string(),
            fail_undo: true,
        }
    }
}

impl UndoCommand<Vec<String>> for AppendWord {
    fn name(&self) -> &str {
        &self.word
    }

    fn execute(&mut self, target: &mut Vec<String>) -> Result<bool> {
        self.redo(target)?;
        Ok(true)
    }

    fn undo(&mut self, target: &mut Vec<String>) -> Result<()> {
        if self.fail_undo {
            return Err(Error::other("undo refused"));
        }
        target.pop();
        Ok(())
    }

    fn redo(&mut self, target: &mut Vec<String>) -> Result<()> {
        target.push(self.word.clone());
        Ok(())
    }
}

#[test]
fn test_undo_stack_creation() {
    let stack: UndoStack<Vec<String>> = UndoStack::new();
    assert!(!stack.can_undo());
    assert!(!stack.can_redo());
    assert_eq!(stack.undo_depth(), 0);
    assert_eq!(stack.redo_depth(), 0);
    assert_eq!(stack.undo_text(), None);
}

#[test]
fn test_execute_undo_redo() {
    let mut words = Vec::new();
    let mut stack = UndoStack::new();

    assert!(stack.execute(AppendWord::new("a"), &mut words).unwrap());
    assert!(stack.execute(AppendWord::new("b"), &mut words).unwrap());
    assert_eq!(words, vec!["a", "b"]);
    assert_eq!(stack.undo_text(), Some("b"));

    stack.undo(&mut words).unwrap();
    assert_eq!(words, vec!["a"]);
    assert_eq!(stack.redo_text(), Some("b"));

    stack.redo(&mut words).unwrap();
    assert_eq!(words, vec!["a", "b"]);
    assert!(!stack.can_redo());
}

#[test]
fn test_new_command_clears_redo_history() {
    let mut words = Vec::new();
    let mut stack = UndoStack::new();
    stack.execute(AppendWord::new("a"), &mut words).unwrap();
    stack.execute(AppendWord::new("b"), &mut words).unwrap();
    stack.undo(&mut words).unwrap();
    assert_eq!(stack.redo_depth(), 1);

    stack.execute(AppendWord::new("c"), &mut words).unwrap();
    assert_eq!(stack.redo_depth(), 0);
    assert_eq!(words, vec!["a", "c"]);
}

#[test]
fn test_group_children_apply_immediately_and_commit_as_one_step() {
    let mut words = Vec::new();
    let mut stack = UndoStack::new();

    stack.begin_group("Add words").unwrap();
    stack.append_to_group(AppendWord::new("x"), &mut words).unwrap();
    stack.append_to_group(AppendWord::new("y"), &mut words).unwrap();
    assert_eq!(words, vec!["x", "y"]);
    assert!(stack.is_command_group_active());
    assert!(!stack.can_undo());

    assert!(stack.commit_group().unwrap());
    assert_eq!(stack.undo_depth(), 1);
    assert_eq!(stack.undo_text(), Some("Add words"));

    stack.undo(&mut words).unwrap();
    assert!(words.is_empty());
    stack.redo(&mut words).unwrap();
    assert_eq!(words, vec!["x", "y"]);
}

#[test]
fn test_abort_group_reverts_children_without_history() {
    let mut words = vec!["keep".to_string()];
    let mut stack = UndoStack::new();

    stack.begin_group("Preview").unwrap();
    stack.append_to_group(AppendWord::new("tmp1"), &mut words).unwrap();
    stack.append_to_group(AppendWord::new("tmp2"), &mut words).unwrap();
    stack.abort_group(&mut words).unwrap();

    assert_eq!(words, vec!["keep"]);
    assert_eq!(stack.undo_depth(), 0);
    assert!(!stack.is_command_group_active());
}

#[test]
fn test_empty_group_commit_records_nothing() {
    let mut stack: UndoStack<Vec<String>> = UndoStack::new();
    stack.begin_group("Nothing").unwrap();
    assert!(!stack.commit_group().unwrap());
    assert_eq!(stack.undo_depth(), 0);
    assert!(!stack.can_undo());
}

#[test]
fn test_group_discipline_errors() {
    let mut words = Vec::new();
    let mut stack = UndoStack::new();

    let err = stack
        .append_to_group(AppendWord::new("a"), &mut words)
        .unwrap_err();
    assert!(matches!(err, Error::Undo(UndoError::NoOpenGroup)));
    assert!(words.is_empty());

    stack.begin_group("first").unwrap();
    let err = stack.begin_group("second").unwrap_err();
    assert!(matches!(err, Error::Undo(UndoError::GroupAlreadyOpen)));

    let err = stack.undo(&mut words).unwrap_err();
    assert!(matches!(err, Error::Undo(UndoError::GroupActive)));

    assert!(matches!(
        stack.commit_group(),
        Ok(false)
    ));
    assert!(matches!(
        stack.commit_group().unwrap_err(),
        Error::Undo(UndoError::NoOpenGroup)
    ));
}

#[test]
fn test_failed_undo_leaves_position_unchanged() {
    let mut words = Vec::new();
    let mut stack = UndoStack::new();
    stack.execute(AppendWord::new("a"), &mut words).unwrap();
    stack
        .execute(AppendWord::failing_undo("b"), &mut words)
        .unwrap();

    assert!(stack.undo(&mut words).is_err());
    assert_eq!(stack.undo_depth(), 2);
    assert_eq!(stack.undo_text(), Some("b"));
    assert_eq!(words, vec!["a", "b"]);
}

#[test]
fn test_failed_group_undo_rolls_back_undone_children() {
    let mut words = Vec::new();
    let mut stack = UndoStack::new();
    stack.begin_group("mixed").unwrap();
    stack
        .append_to_group(AppendWord::failing_undo("a"), &mut words)
        .unwrap();
    stack.append_to_group(AppendWord::new("b"), &mut words).unwrap();
    stack.commit_group().unwrap();

    assert!(stack.undo(&mut words).is_err());
    assert_eq!(words, vec!["a", "b"]);
    assert_eq!(stack.undo_depth(), 1);
}

#[test]
fn test_nothing_to_undo_or_redo() {
    let mut words: Vec<String> = Vec::new();
    let mut stack: UndoStack<Vec<String>> = UndoStack::new();
    assert!(matches!(
        stack.undo(&mut words).unwrap_err(),
        Error::Undo(UndoError::NothingToUndo)
    ));
    assert!(matches!(
        stack.redo(&mut words).unwrap_err(),
        Error::Undo(UndoError::NothingToRedo)
    ));
}
