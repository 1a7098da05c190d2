use proptest::prelude::*;
use symedit_core::{Angle, Point, UndoCommand, UndoStack};
use symedit_library::{CmdPinAdd, CmdPinEdit, CmdPinRemove, LibraryError, Pin, SymbolDocument, Uuid};

#[derive(Debug, Clone)]
enum Op {
    Add(i64, i64),
    Move(usize, i64, i64),
    Rotate(usize, i32),
    Rename(usize, String),
    Remove(usize),
    AddAndMove(i64, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let coord = -50_000_000i64..50_000_000;
    prop_oneof![
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Add(x, y)),
        (0usize..8, coord.clone(), coord.clone()).prop_map(|(i, x, y)| Op::Move(i, x, y)),
        (0usize..8, 0i32..3600).prop_map(|(i, a)| Op::Rotate(i, a)),
        (0usize..8, "[A-Z]{1,4}").prop_map(|(i, n)| Op::Rename(i, n)),
        (0usize..8).prop_map(Op::Remove),
        (coord.clone(), coord).prop_map(|(x, y)| Op::AddAndMove(x, y)),
    ]
}

/// Ordered pins plus the set of pins owning a visual item.
fn snapshot(doc: &SymbolDocument) -> (Vec<Pin>, Vec<Uuid>) {
    let pins: Vec<Pin> = doc.symbol().pins().cloned().collect();
    let items = pins
        .iter()
        .map(Pin::uuid)
        .filter(|uuid| doc.graphics().contains(uuid))
        .collect();
    (pins, items)
}

fn pick(doc: &SymbolDocument, index: usize) -> Option<Uuid> {
    let uuids: Vec<Uuid> = doc.symbol().pin_uuids().collect();
    if uuids.is_empty() {
        None
    } else {
        Some(uuids[index % uuids.len()])
    }
}

fn apply(op: Op, stack: &mut UndoStack<SymbolDocument>, doc: &mut SymbolDocument) {
    match op {
        Op::Add(x, y) => {
            let mut pin = Pin::with_defaults();
            pin.set_position(Point::from_nm(x, y));
            stack.execute(CmdPinAdd::new(pin), doc).unwrap();
        }
        Op::Move(i, x, y) => {
            if let Some(uuid) = pick(doc, i) {
                let mut cmd = CmdPinEdit::new(doc.pin(&uuid).unwrap());
                cmd.set_position(doc, Point::from_nm(x, y), false).unwrap();
                stack.execute(cmd, doc).unwrap();
            }
        }
        Op::Rotate(i, a) => {
            if let Some(uuid) = pick(doc, i) {
                let mut cmd = CmdPinEdit::new(doc.pin(&uuid).unwrap());
                cmd.rotate(doc, Angle::from_deci_deg(a), Point::origin(), true).unwrap();
                stack.execute(cmd, doc).unwrap();
            }
        }
        Op::Rename(i, name) => {
            if let Some(uuid) = pick(doc, i) {
                let mut cmd = CmdPinEdit::new(doc.pin(&uuid).unwrap());
                cmd.set_name(doc, &name, false).unwrap();
                stack.execute(cmd, doc).unwrap();
            }
        }
        Op::Remove(i) => {
            if let Some(uuid) = pick(doc, i) {
                stack.execute(CmdPinRemove::new(uuid), doc).unwrap();
            }
        }
        Op::AddAndMove(x, y) => {
            stack.begin_group("Add symbol pin").unwrap();
            let add = CmdPinAdd::with_defaults();
            let uuid = add.pin_uuid();
            stack.append_to_group(add, doc).unwrap();
            let mut edit = CmdPinEdit::new(doc.pin(&uuid).unwrap());
            edit.set_position(doc, Point::from_nm(x, y), true).unwrap();
            stack.append_to_group(edit, doc).unwrap();
            stack.commit_group().unwrap();
        }
    }
}

proptest! {
    #[test]
    fn prop_undo_all_and_redo_all_round_trip(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let mut doc = SymbolDocument::default();
        for _ in 0..2 {
            doc.add_pin(Pin::with_defaults()).unwrap();
        }
        let mut stack = UndoStack::with_limit(0);
        let initial = snapshot(&doc);

        for op in ops {
            apply(op, &mut stack, &mut doc);
            prop_assert_eq!(doc.graphics().item_count(), doc.symbol().pin_count());
            for uuid in doc.symbol().pin_uuids() {
                prop_assert!(doc.graphics().pin_item(&uuid).is_ok());
            }
        }
        let last = snapshot(&doc);

        while stack.can_undo() {
            stack.undo(&mut doc).unwrap();
        }
        prop_assert_eq!(snapshot(&doc), initial);

        while stack.can_redo() {
            stack.redo(&mut doc).unwrap();
        }
        prop_assert_eq!(snapshot(&doc), last);
    }
}

#[test]
fn test_pin_ownership_follows_command_state() {
    let mut doc = SymbolDocument::default();
    let mut add = CmdPinAdd::with_defaults();
    let uuid = add.pin_uuid();

    // Pending: only the command holds the pin.
    assert!(add.pending_pin().is_some());
    assert!(doc.pin(&uuid).is_none());

    add.execute(&mut doc).unwrap();
    assert!(add.pending_pin().is_none());
    assert!(doc.pin(&uuid).is_some());

    let mut remove = CmdPinRemove::new(uuid);
    remove.execute(&mut doc).unwrap();
    assert!(remove.removed_pin().is_some());
    assert!(doc.pin(&uuid).is_none());
    assert!(!doc.graphics().contains(&uuid));

    remove.undo(&mut doc).unwrap();
    assert!(remove.removed_pin().is_none());
    assert!(doc.graphics().contains(&uuid));
}

#[test]
fn test_failed_command_leaves_document_unchanged() {
    let mut doc = SymbolDocument::default();
    let pin = Pin::with_defaults();
    let uuid = pin.uuid();
    doc.add_pin(pin).unwrap();
    let before = snapshot(&doc);

    let mut stack = UndoStack::new();
    stack.begin_group("Remove Symbol Elements").unwrap();
    stack.append_to_group(CmdPinRemove::new(uuid), &mut doc).unwrap();
    let err = stack
        .append_to_group(CmdPinRemove::new(uuid), &mut doc)
        .unwrap_err();
    assert_eq!(
        err.downcast_domain::<LibraryError>(),
        Some(&LibraryError::PinNotFound(uuid))
    );

    stack.abort_group(&mut doc).unwrap();
    assert_eq!(snapshot(&doc), before);
    assert!(!stack.can_undo());
}

#[test]
fn test_command_names() {
    let pin = Pin::with_defaults();
    assert_eq!(CmdPinAdd::new(pin.clone()).name(), "Add pin");
    assert_eq!(CmdPinEdit::new(&pin).name(), "Edit pin");
    assert_eq!(CmdPinRemove::new(pin.uuid()).name(), "Remove pin");
}
