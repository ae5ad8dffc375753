use crate::config::Action;
use crate::draw::DrawingContext;
use crate::input::events::Key;
use log::{debug, info};

use super::{DrawingSurface, GestureState};

impl<C: DrawingContext> DrawingSurface<C> {
    /// Removes the most recently committed element.
    ///
    /// No-op on an empty diagram. Fires the content listener only when the last
    /// element is removed.
    pub fn undo(&mut self) {
        match self.diagram.undo() {
            Some(element) => {
                info!("Undo: removed {}", element);
                self.notify_content_change();
                self.repaint();
            }
            None => debug!("Undo ignored; diagram is empty"),
        }
    }

    /// Removes every committed element.
    ///
    /// No-op on an empty diagram. Any shape still being dragged is dropped
    /// along with the committed ones.
    pub fn clear(&mut self) {
        if self.diagram.is_empty() {
            debug!("Clear ignored; diagram is empty");
            return;
        }

        let removed = self.diagram.clear();
        if matches!(self.state, GestureState::Drawing { .. }) {
            self.state = GestureState::Idle;
        }
        info!("Cleared {removed} element(s)");
        self.notify_content_change();
        self.repaint();
    }

    /// Abandons whatever is in progress without committing it.
    ///
    /// Cancels a pending label prompt, or drops the shape being dragged.
    pub fn cancel(&mut self) {
        match self.state {
            GestureState::Idle => {}
            GestureState::AwaitingLabel { .. } => self.cancel_label(),
            GestureState::Drawing { .. } => {
                debug!("Drag cancelled");
                self.state = GestureState::Idle;
                self.repaint();
            }
        }
    }

    /// Processes a key press.
    ///
    /// Modifier keys update the tracked modifier state. Other keys are looked up
    /// in the action map using the current modifiers.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = true,
            Key::Ctrl => self.modifiers.ctrl = true,
            Key::Alt => self.modifiers.alt = true,
            _ => {
                if let Some(action) = key
                    .binding_name()
                    .and_then(|name| self.find_action(&name))
                {
                    self.handle_action(action);
                }
            }
        }
    }

    /// Processes a key release.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Forgets held modifiers, e.g. after the host loses keyboard focus.
    pub fn reset_modifiers(&mut self) {
        self.modifiers.reset();
    }

    /// Runs a bound action.
    pub fn handle_action(&mut self, action: Action) {
        debug!("Action: {action:?}");
        match action {
            Action::Undo => self.undo(),
            Action::ClearCanvas => self.clear(),
            Action::Cancel => self.cancel(),
        }
    }

    /// Look up an action for the given key name and current modifiers.
    fn find_action(&self, key_name: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_name,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }
}
