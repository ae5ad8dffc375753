use crate::draw::{DrawingContext, DrawingElement, Point};
use crate::input::{events::PointerEvent, tool::Tool};
use log::debug;

use super::{DrawingSurface, GestureState};

impl<C: DrawingContext> DrawingSurface<C> {
    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up { x, y } => self.on_pointer_up(x, y),
            PointerEvent::Leave { x, y } => self.on_pointer_leave(x, y),
        }
    }

    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Shape tools: start dragging a zero-extent provisional element
    /// - Text tool: wait for the host to supply a label at this position
    /// - Select or an unknown tool: nothing
    ///
    /// Presses while a gesture or label prompt is already active are ignored.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Ignoring pointer down while {:?}", self.state);
            return;
        }

        let at = Point::new(x, y);
        match self.selected_tool {
            Some(Tool::Text) => {
                debug!("Awaiting label at {at}");
                self.state = GestureState::AwaitingLabel { at };
            }
            Some(tool) => {
                let Some(kind) = tool.shape_kind() else {
                    return;
                };
                let id = self.allocate_id();
                let provisional = DrawingElement::shape(id, kind, at, self.current_color);
                debug!("Started {kind} at {at}");
                self.state = GestureState::Drawing { provisional };
                self.repaint();
            }
            None => {
                debug!("Ignoring pointer down for unknown tool '{}'", self.tool_id);
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// While dragging, updates the provisional extent to the offset from the
    /// press point and repaints the diagram with the live preview on top.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let GestureState::Drawing { provisional } = &mut self.state {
            let extent = provisional.origin().delta_to(Point::new(x, y));
            provisional.set_extent(extent);
            self.repaint();
        }
    }

    /// Processes a primary button release, committing or discarding the drag.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        self.finish_gesture(Point::new(x, y));
    }

    /// Processes the pointer leaving the canvas; behaves exactly like a release.
    pub fn on_pointer_leave(&mut self, x: f64, y: f64) {
        self.finish_gesture(Point::new(x, y));
    }

    /// Completes a pending label prompt with the host's text.
    ///
    /// A non-empty label commits a text element at the clicked position; an
    /// empty one is treated like a cancelled prompt. Returns whether an element
    /// was added.
    pub fn submit_label(&mut self, label: &str) -> bool {
        let GestureState::AwaitingLabel { at } = self.state else {
            debug!("No label prompt pending; ignoring label");
            return false;
        };
        self.state = GestureState::Idle;

        if label.is_empty() {
            debug!("Empty label; no text element created");
            return false;
        }

        let id = self.allocate_id();
        self.commit(DrawingElement::text(id, at, label, self.current_color));
        true
    }

    /// Dismisses a pending label prompt without creating anything.
    pub fn cancel_label(&mut self) {
        if self.is_awaiting_label() {
            debug!("Label prompt cancelled");
            self.state = GestureState::Idle;
        }
    }

    fn finish_gesture(&mut self, at: Point) {
        let mut provisional = match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Drawing { provisional } => provisional,
            other => {
                self.state = other;
                return;
            }
        };

        provisional.set_extent(provisional.origin().delta_to(at));

        if provisional.meets_commit_threshold() {
            self.commit(provisional);
        } else {
            debug!("Discarded {} below commit threshold", provisional.kind());
            self.repaint();
        }
    }
}
