use super::{fsm_with_pins, grid_point};
use symedit_core::{Angle, Point};
use symedit_editor::{SceneMouseEvent, StateKind};

#[test]
fn test_chain_of_pins_then_abort() {
    let (mut fsm, _) = fsm_with_pins(&[]);
    assert!(fsm.process_start_adding_pins());

    assert!(fsm.process_left_button_pressed(&SceneMouseEvent::new(grid_point(0, 0))));
    assert!(fsm.process_left_button_pressed(&SceneMouseEvent::new(grid_point(10, 0))));
    assert!(fsm.process_abort_command());
    assert_eq!(fsm.current_state(), StateKind::Select);

    let ctx = fsm.context();
    let pins: Vec<_> = ctx.document.symbol().pins().collect();
    assert_eq!(pins.len(), 2);
    assert_eq!(pins[0].position(), grid_point(0, 0));
    assert_eq!(pins[1].position(), grid_point(10, 0));
    assert!(pins.iter().all(|p| p.rotation() == Angle::deg0()));
    assert_eq!(ctx.document.graphics().item_count(), 2);
    assert!(ctx.document.selected_pins().is_empty());

    assert_eq!(ctx.undo_stack.undo_depth(), 2);
    assert_eq!(fsm.undo_text(), Some("Add symbol pin"));
    assert!(fsm.undo());
    assert_eq!(fsm.undo_text(), Some("Add symbol pin"));
    assert!(fsm.undo());
    assert_eq!(fsm.context().document.symbol().pin_count(), 0);
}

#[test]
fn test_pin_follows_cursor_on_grid() {
    let (mut fsm, _) = fsm_with_pins(&[]);
    fsm.process_start_adding_pins();
    let uuid = fsm.add_pins_state().current_pin().unwrap();

    assert!(fsm.process_mouse_moved(&SceneMouseEvent::new(Point::from_nm(3_000_000, 6_000_000))));
    let pin = fsm.context().document.pin(&uuid).unwrap();
    assert_eq!(pin.position(), grid_point(1, 2));
}

#[test]
fn test_next_pin_keeps_rotation() {
    let (mut fsm, _) = fsm_with_pins(&[]);
    fsm.process_start_adding_pins();
    assert!(fsm.process_rotate_cw());
    fsm.process_left_button_pressed(&SceneMouseEvent::new(grid_point(2, 0)));

    let next = fsm.add_pins_state().current_pin().unwrap();
    let pin = fsm.context().document.pin(&next).unwrap();
    assert_eq!(pin.position(), grid_point(2, 0));
    assert_eq!(pin.rotation(), Angle::deg270());
    assert!(fsm.context().document.graphics().is_selected(&next));

    fsm.process_abort_command();
    let committed: Vec<_> = fsm.context().document.symbol().pins().collect();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].rotation(), Angle::deg270());
}

#[test]
fn test_undo_cancels_placement_first() {
    let (mut fsm, _) = fsm_with_pins(&[]);
    fsm.process_start_adding_pins();
    fsm.process_left_button_pressed(&SceneMouseEvent::new(grid_point(1, 1)));
    assert_eq!(fsm.context().document.symbol().pin_count(), 2);

    assert!(fsm.undo());
    assert_eq!(fsm.current_state(), StateKind::Select);
    assert_eq!(fsm.context().document.symbol().pin_count(), 0);
    assert!(fsm.redo());
    assert_eq!(fsm.context().document.symbol().pin_count(), 1);
}

#[test]
fn test_remove_not_handled_while_placing() {
    let (mut fsm, _) = fsm_with_pins(&[]);
    fsm.process_start_adding_pins();
    assert!(!fsm.process_remove());
    assert!(!fsm.process_left_button_released(&SceneMouseEvent::new(Point::origin())));
    assert_eq!(fsm.current_state(), StateKind::AddPins);
}
