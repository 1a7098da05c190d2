use super::add_pins::AddPinsState;
use super::select::{SelectState, SelectSubState};
use super::state::SymbolEditorState;
use crate::context::SymbolEditorContext;
use crate::event::SceneMouseEvent;
use symedit_core::{EditorMessage, UndoError};

/// Identifies the active editing state.
///
/// `Idle` is only current while switching between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Idle,
    Select,
    AddPins,
}

/// The symbol editor's state machine.
///
/// Owns the context and one instance of each state, forwards events to the
/// active one and performs the transitions: the outgoing state's `exit` runs
/// before the incoming state's `entry`, and a refused `exit` cancels the
/// switch.
pub struct SymbolEditorFsm {
    context: SymbolEditorContext,
    select: SelectState,
    add_pins: AddPinsState,
    current: StateKind,
}

impl SymbolEditorFsm {
    /// Creates the state machine in the Select state.
    pub fn new(context: SymbolEditorContext) -> Self {
        let mut fsm = Self {
            context,
            select: SelectState::new(),
            add_pins: AddPinsState::new(),
            current: StateKind::Idle,
        };
        fsm.set_next_state(StateKind::Select);
        fsm
    }

    pub fn current_state(&self) -> StateKind {
        self.current
    }

    pub fn select_sub_state(&self) -> Option<SelectSubState> {
        (self.current == StateKind::Select).then(|| self.select.sub_state())
    }

    pub fn add_pins_state(&self) -> &AddPinsState {
        &self.add_pins
    }

    pub fn context(&self) -> &SymbolEditorContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SymbolEditorContext {
        &mut self.context
    }

    pub fn into_context(mut self) -> SymbolEditorContext {
        self.leave_current_state();
        self.context
    }

    pub fn take_messages(&mut self) -> Vec<EditorMessage> {
        self.context.take_messages()
    }

    // Event handlers

    pub fn process_mouse_moved(&mut self, e: &SceneMouseEvent) -> bool {
        let ctx = &mut self.context;
        match self.current {
            StateKind::Select => self.select.process_mouse_moved(ctx, e),
            StateKind::AddPins => self.add_pins.process_mouse_moved(ctx, e),
            StateKind::Idle => false,
        }
    }

    pub fn process_left_button_pressed(&mut self, e: &SceneMouseEvent) -> bool {
        let ctx = &mut self.context;
        let handled = match self.current {
            StateKind::Select => self.select.process_left_button_pressed(ctx, e),
            StateKind::AddPins => self.add_pins.process_left_button_pressed(ctx, e),
            StateKind::Idle => false,
        };
        self.leave_add_pins_if_stalled();
        handled
    }

    pub fn process_left_button_released(&mut self, e: &SceneMouseEvent) -> bool {
        let ctx = &mut self.context;
        match self.current {
            StateKind::Select => self.select.process_left_button_released(ctx, e),
            StateKind::AddPins => self.add_pins.process_left_button_released(ctx, e),
            StateKind::Idle => false,
        }
    }

    pub fn process_rotate_cw(&mut self) -> bool {
        let ctx = &mut self.context;
        match self.current {
            StateKind::Select => self.select.process_rotate_cw(ctx),
            StateKind::AddPins => self.add_pins.process_rotate_cw(ctx),
            StateKind::Idle => false,
        }
    }

    pub fn process_rotate_ccw(&mut self) -> bool {
        let ctx = &mut self.context;
        match self.current {
            StateKind::Select => self.select.process_rotate_ccw(ctx),
            StateKind::AddPins => self.add_pins.process_rotate_ccw(ctx),
            StateKind::Idle => false,
        }
    }

    pub fn process_remove(&mut self) -> bool {
        let ctx = &mut self.context;
        match self.current {
            StateKind::Select => self.select.process_remove(ctx),
            StateKind::AddPins => self.add_pins.process_remove(ctx),
            StateKind::Idle => false,
        }
    }

    /// Lets the active state handle the abort; otherwise AddPins falls back
    /// to Select.
    pub fn process_abort_command(&mut self) -> bool {
        let ctx = &mut self.context;
        let handled = match self.current {
            StateKind::Select => self.select.process_abort_command(ctx),
            StateKind::AddPins => self.add_pins.process_abort_command(ctx),
            StateKind::Idle => false,
        };
        if handled {
            return true;
        }
        match self.current {
            StateKind::AddPins => self.set_next_state(StateKind::Select),
            _ => false,
        }
    }

    pub fn process_start_selecting(&mut self) -> bool {
        self.set_next_state(StateKind::Select)
    }

    pub fn process_start_adding_pins(&mut self) -> bool {
        self.set_next_state(StateKind::AddPins)
    }

    // Undo / redo pass-through

    /// Undoes the last entry. A pin placement in progress is cancelled first;
    /// a drag or rubber-band in progress refuses the request.
    pub fn undo(&mut self) -> bool {
        if !self.prepare_history_access() {
            return false;
        }
        match self.context.undo_stack.undo(&mut self.context.document) {
            Ok(()) => true,
            Err(e) => {
                self.context.report_error("Undo failed", &e);
                false
            }
        }
    }

    pub fn redo(&mut self) -> bool {
        if !self.prepare_history_access() {
            return false;
        }
        match self.context.undo_stack.redo(&mut self.context.document) {
            Ok(()) => true,
            Err(e) => {
                self.context.report_error("Redo failed", &e);
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.context.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.context.undo_stack.can_redo()
    }

    pub fn undo_text(&self) -> Option<&str> {
        self.context.undo_stack.undo_text()
    }

    pub fn redo_text(&self) -> Option<&str> {
        self.context.undo_stack.redo_text()
    }

    fn prepare_history_access(&mut self) -> bool {
        if self.current == StateKind::AddPins && !self.set_next_state(StateKind::Select) {
            return false;
        }
        if self.select.is_busy() || self.context.undo_stack.is_command_group_active() {
            tracing::warn!("history access refused while an operation is in progress");
            self.context
                .report(EditorMessage::warning(UndoError::GroupActive.to_string()));
            return false;
        }
        true
    }

    // Transitions

    fn set_next_state(&mut self, next: StateKind) -> bool {
        if next == self.current {
            return true;
        }
        if !self.leave_current_state() {
            return false;
        }
        if self.enter_state(next) {
            return true;
        }
        tracing::warn!("entering {:?} failed", next);
        if next != StateKind::Select {
            self.enter_state(StateKind::Select);
        }
        false
    }

    fn leave_current_state(&mut self) -> bool {
        let ctx = &mut self.context;
        let left = match self.current {
            StateKind::Select => self.select.exit(ctx),
            StateKind::AddPins => self.add_pins.exit(ctx),
            StateKind::Idle => true,
        };
        if left {
            tracing::debug!("left state {:?}", self.current);
            self.current = StateKind::Idle;
        } else {
            tracing::warn!("state {:?} refused to exit", self.current);
        }
        left
    }

    fn enter_state(&mut self, next: StateKind) -> bool {
        let ctx = &mut self.context;
        let entered = match next {
            StateKind::Select => self.select.entry(ctx),
            StateKind::AddPins => self.add_pins.entry(ctx),
            StateKind::Idle => true,
        };
        if entered {
            tracing::debug!("entered state {:?}", next);
            self.current = next;
        }
        entered
    }

    /// AddPins without a pin in placement cannot do anything useful.
    fn leave_add_pins_if_stalled(&mut self) {
        if self.current == StateKind::AddPins && !self.add_pins.is_placing() {
            self.set_next_state(StateKind::Select);
        }
    }
}
