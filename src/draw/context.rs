//! Drawing context capability used by the surface.
//!
//! The surface never touches a concrete canvas; it is handed something that
//! implements [`DrawingContext`]. [`NullContext`] discards output and
//! [`RecordingContext`] keeps it for inspection.

use super::color::Color;
use super::element::{Extent, Point};
use super::font::FontDescriptor;
use super::render::DrawCommand;

/// The five primitives a diagram needs from its rendering target.
pub trait DrawingContext {
    /// Wipes the whole surface.
    fn clear(&mut self);

    /// Strokes a rectangle from `origin` to `origin + extent`.
    ///
    /// Implementations must accept negative extents and draw the same box as
    /// the equivalent normalized rectangle.
    fn stroke_rect(&mut self, origin: Point, extent: Extent, color: Color, line_width: f64);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64);

    /// Strokes a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, line_width: f64);

    /// Fills `text` with its baseline starting at `at`.
    fn fill_text(&mut self, at: Point, text: &str, color: Color, font: &FontDescriptor);
}

/// Context that ignores all drawing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullContext;

impl DrawingContext for NullContext {
    fn clear(&mut self) {}

    fn stroke_rect(&mut self, _origin: Point, _extent: Extent, _color: Color, _line_width: f64) {}

    fn stroke_circle(&mut self, _center: Point, _radius: f64, _color: Color, _line_width: f64) {}

    fn stroke_line(&mut self, _from: Point, _to: Point, _color: Color, _line_width: f64) {}

    fn fill_text(&mut self, _at: Point, _text: &str, _color: Color, _font: &FontDescriptor) {}
}

/// Context that records every primitive as a [`DrawCommand`].
#[derive(Debug, Default, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, across all repaints.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of full repaints (each begins with a clear).
    pub fn repaint_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }

    /// Commands issued since the most recent clear, including that clear.
    ///
    /// This is what is currently visible on the surface.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawingContext for RecordingContext {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_rect(&mut self, origin: Point, extent: Extent, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            origin,
            extent,
            color,
            line_width,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, at: Point, text: &str, color: Color, font: &FontDescriptor) {
        self.commands.push(DrawCommand::FillText {
            at,
            text: text.to_string(),
            color,
            font: font.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn last_frame_starts_at_latest_clear() {
        let mut ctx = RecordingContext::new();
        ctx.clear();
        ctx.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), BLACK, 2.0);
        ctx.clear();
        ctx.stroke_circle(Point::new(5.0, 5.0), 3.0, BLACK, 2.0);

        assert_eq!(ctx.repaint_count(), 2);
        assert_eq!(ctx.commands().len(), 4);
        assert_eq!(ctx.last_frame().len(), 2);
        assert_eq!(ctx.last_frame()[0], DrawCommand::Clear);
    }

    #[test]
    fn last_frame_without_clear_is_everything() {
        let mut ctx = RecordingContext::new();
        ctx.stroke_rect(Point::new(0.0, 0.0), Extent::new(4.0, 4.0), BLACK, 2.0);
        assert_eq!(ctx.last_frame().len(), 1);
    }

    #[test]
    fn take_drains_commands() {
        let mut ctx = RecordingContext::new();
        ctx.clear();
        assert_eq!(ctx.take(), vec![DrawCommand::Clear]);
        assert!(ctx.commands().is_empty());
    }
}
