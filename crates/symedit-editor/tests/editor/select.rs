use super::{fsm_with_pins, grid_point, GRID_NM};
use proptest::prelude::*;
use symedit_core::{Angle, MessageLevel, Point};
use symedit_editor::{Modifiers, SceneMouseEvent, SelectSubState};

fn click(fsm: &mut symedit_editor::SymbolEditorFsm, pos: Point, modifiers: Modifiers) {
    let e = SceneMouseEvent::with_modifiers(pos, modifiers);
    assert!(fsm.process_left_button_pressed(&e));
    assert!(fsm.process_left_button_released(&e));
}

#[test]
fn test_rotate_single_pin_twice() {
    let (mut fsm, uuids) = fsm_with_pins(&[(grid_point(2, 3), Angle::deg0())]);
    click(&mut fsm, grid_point(2, 3), Modifiers::NONE);

    assert!(fsm.process_rotate_cw());
    assert!(fsm.process_rotate_cw());
    let pin = fsm.context().document.pin(&uuids[0]).unwrap();
    assert_eq!(pin.rotation(), Angle::deg180());
    assert_eq!(pin.rotation(), Angle::from_deg(-180.0));
    assert_eq!(pin.position(), grid_point(2, 3));
    assert_eq!(fsm.context().undo_stack.undo_depth(), 2);
    assert_eq!(fsm.undo_text(), Some("Rotate Symbol Elements"));

    assert!(fsm.undo());
    assert!(fsm.undo());
    let pin = fsm.context().document.pin(&uuids[0]).unwrap();
    assert_eq!(pin.rotation(), Angle::deg0());
}

#[test]
fn test_click_selects_topmost_only() {
    let (mut fsm, uuids) = fsm_with_pins(&[
        (Point::origin(), Angle::deg0()),
        (Point::origin(), Angle::deg90()),
    ]);
    let (back, front) = (uuids[0], uuids[1]);
    click(&mut fsm, Point::origin(), Modifiers::NONE);

    let graphics = fsm.context().document.graphics();
    assert!(graphics.is_selected(&front));
    assert!(!graphics.is_selected(&back));
}

#[test]
fn test_delete_selection_as_one_step() {
    let (mut fsm, uuids) = fsm_with_pins(&[
        (grid_point(0, 0), Angle::deg0()),
        (grid_point(0, 4), Angle::deg90()),
        (grid_point(8, 8), Angle::deg0()),
    ]);
    let before: Vec<_> = fsm.context().document.symbol().pins().cloned().collect();

    click(&mut fsm, grid_point(0, 0), Modifiers::NONE);
    click(&mut fsm, grid_point(0, 4), Modifiers::CONTROL);
    assert_eq!(fsm.context().document.selected_pins(), vec![uuids[0], uuids[1]]);

    assert!(fsm.process_remove());
    let ctx = fsm.context();
    assert_eq!(ctx.document.symbol().pin_uuids().collect::<Vec<_>>(), vec![uuids[2]]);
    assert_eq!(ctx.document.graphics().item_count(), 1);
    assert_eq!(ctx.undo_stack.undo_depth(), 1);
    assert_eq!(fsm.undo_text(), Some("Remove Symbol Elements"));

    assert!(fsm.undo());
    let ctx = fsm.context();
    let after: Vec<_> = ctx.document.symbol().pins().cloned().collect();
    assert_eq!(after, before);
    assert_eq!(ctx.document.graphics().item_count(), 3);
}

#[test]
fn test_remove_with_empty_selection_is_noop() {
    let (mut fsm, _) = fsm_with_pins(&[(Point::origin(), Angle::deg0())]);
    assert!(!fsm.process_remove());
    assert!(!fsm.process_rotate_ccw());
    assert!(!fsm.can_undo());

    let messages = fsm.take_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].level, MessageLevel::Info);
}

#[test]
fn test_drag_moves_selection_by_grid_steps() {
    let (mut fsm, uuids) = fsm_with_pins(&[
        (grid_point(0, 0), Angle::deg0()),
        (grid_point(0, 4), Angle::deg0()),
    ]);
    click(&mut fsm, grid_point(0, 0), Modifiers::NONE);
    fsm.process_left_button_pressed(&SceneMouseEvent::with_modifiers(
        grid_point(0, 4),
        Modifiers::CONTROL,
    ));
    assert_eq!(fsm.select_sub_state(), Some(SelectSubState::Moving));

    fsm.process_mouse_moved(&SceneMouseEvent::new(Point::from_nm(3 * GRID_NM + 1_000, 4 * GRID_NM)));
    fsm.process_left_button_released(&SceneMouseEvent::new(grid_point(3, 4)));

    let doc = &fsm.context().document;
    assert_eq!(doc.pin(&uuids[0]).unwrap().position(), grid_point(3, 0));
    assert_eq!(doc.pin(&uuids[1]).unwrap().position(), grid_point(3, 4));
    assert_eq!(fsm.undo_text(), Some("Move Symbol Elements"));

    assert!(fsm.undo());
    let doc = &fsm.context().document;
    assert_eq!(doc.pin(&uuids[0]).unwrap().position(), grid_point(0, 0));
    assert_eq!(doc.pin(&uuids[1]).unwrap().position(), grid_point(0, 4));
}

#[test]
fn test_rubber_band_selection_follows_rectangle() {
    let (mut fsm, uuids) = fsm_with_pins(&[
        (grid_point(0, 0), Angle::deg0()),
        (grid_point(0, 4), Angle::deg0()),
    ]);
    let start = grid_point(-2, -2);
    fsm.process_left_button_pressed(&SceneMouseEvent::new(start));
    assert_eq!(fsm.select_sub_state(), Some(SelectSubState::Selecting));

    fsm.process_mouse_moved(&SceneMouseEvent::new(grid_point(2, 6)));
    assert_eq!(fsm.context().document.selected_pins(), uuids);
    assert!(fsm.context().scene.selection_rect().is_some());

    // Shrinking the rectangle drops the pin that left it.
    fsm.process_mouse_moved(&SceneMouseEvent::new(grid_point(2, 2)));
    assert_eq!(fsm.context().document.selected_pins(), vec![uuids[0]]);

    fsm.process_left_button_released(&SceneMouseEvent::new(grid_point(2, 2)));
    assert_eq!(fsm.select_sub_state(), Some(SelectSubState::Idle));
    assert!(fsm.context().scene.selection_rect().is_none());
    assert!(!fsm.can_undo());
}

#[test]
fn test_additive_rubber_band_keeps_prior_selection() {
    let (mut fsm, uuids) = fsm_with_pins(&[
        (grid_point(0, 0), Angle::deg0()),
        (grid_point(0, 8), Angle::deg0()),
    ]);
    click(&mut fsm, grid_point(0, 0), Modifiers::NONE);

    fsm.process_left_button_pressed(&SceneMouseEvent::with_modifiers(
        grid_point(-2, 6),
        Modifiers::CONTROL,
    ));
    fsm.process_mouse_moved(&SceneMouseEvent::new(grid_point(2, 10)));
    fsm.process_left_button_released(&SceneMouseEvent::new(grid_point(2, 10)));

    assert_eq!(fsm.context().document.selected_pins(), uuids);
}

proptest! {
    #[test]
    fn prop_drag_below_half_grid_records_nothing(dx in -1_269_999i64..1_270_000, dy in -1_269_999i64..1_270_000) {
        let (mut fsm, uuids) = fsm_with_pins(&[(Point::origin(), Angle::deg0())]);
        let depth = fsm.context().undo_stack.undo_depth();

        fsm.process_left_button_pressed(&SceneMouseEvent::new(Point::origin()));
        fsm.process_mouse_moved(&SceneMouseEvent::new(Point::from_nm(dx, dy)));
        fsm.process_left_button_released(&SceneMouseEvent::new(Point::from_nm(dx, dy)));

        prop_assert_eq!(fsm.context().undo_stack.undo_depth(), depth);
        prop_assert_eq!(fsm.context().document.pin(&uuids[0]).unwrap().position(), Point::origin());
    }
}
