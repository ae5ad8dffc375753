use crate::draw::{DrawCommand, DrawingContext, DrawingElement, render, replay};

use super::{DrawingSurface, GestureState};

impl<C: DrawingContext> DrawingSurface<C> {
    /// Returns the shape currently being dragged, for live preview.
    ///
    /// `None` when idle or waiting for a label; text never has a drag phase.
    pub fn provisional(&self) -> Option<&DrawingElement> {
        match &self.state {
            GestureState::Drawing { provisional } => Some(provisional),
            _ => None,
        }
    }

    /// Builds the full-repaint display list for the current state.
    pub fn display_list(&self) -> Vec<DrawCommand> {
        render(self.diagram.elements(), self.provisional(), &self.style)
    }

    /// Clears the drawing context and redraws committed elements plus preview.
    ///
    /// Called after every state transition; hosts can also call it after the
    /// underlying surface was lost or resized.
    pub fn repaint(&mut self) {
        let commands = self.display_list();
        replay(&commands, &mut self.ctx);
    }
}
