//! Display-list rendering for diagram elements.
//!
//! [`render`] turns the committed elements plus an optional provisional element
//! into a flat list of [`DrawCommand`]s. The list always starts with
//! [`DrawCommand::Clear`], so replaying it onto any [`DrawingContext`] yields a
//! full repaint.

use super::color::Color;
use super::context::DrawingContext;
use super::element::{DrawingElement, ElementKind, Extent, Point};
use super::font::FontDescriptor;

/// Fixed stroke width for shape outlines, in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// A single drawing primitive. Coordinates are canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface.
    Clear,
    /// Unfilled rectangle from `origin` to `origin + extent`; extent may be negative.
    StrokeRect {
        origin: Point,
        extent: Extent,
        color: Color,
        line_width: f64,
    },
    /// Unfilled circle.
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
        line_width: f64,
    },
    /// Straight segment.
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        line_width: f64,
    },
    /// Filled text; `at` is the start of the alphabetic baseline.
    FillText {
        at: Point,
        text: String,
        color: Color,
        font: FontDescriptor,
    },
}

impl DrawCommand {
    /// Issues this command against a drawing context.
    pub fn apply<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        match self {
            DrawCommand::Clear => ctx.clear(),
            DrawCommand::StrokeRect {
                origin,
                extent,
                color,
                line_width,
            } => ctx.stroke_rect(*origin, *extent, *color, *line_width),
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
                line_width,
            } => ctx.stroke_circle(*center, *radius, *color, *line_width),
            DrawCommand::StrokeLine {
                from,
                to,
                color,
                line_width,
            } => ctx.stroke_line(*from, *to, *color, *line_width),
            DrawCommand::FillText {
                at,
                text,
                color,
                font,
            } => ctx.fill_text(*at, text, *color, font),
        }
    }
}

/// Stroke and font settings shared by every element on a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Outline width for rectangles, circles and lines
    pub line_width: f64,
    /// Font used for every text element
    pub font: FontDescriptor,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            font: FontDescriptor::default(),
        }
    }
}

/// Builds the display list for a full repaint.
///
/// Committed elements are emitted in list order, so later elements land on
/// top. The provisional element, if any, is drawn last as an overlay using its
/// live (possibly negative) extent.
pub fn render(
    committed: &[DrawingElement],
    provisional: Option<&DrawingElement>,
    style: &RenderStyle,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(committed.len() + 2);
    commands.push(DrawCommand::Clear);
    commands.extend(committed.iter().filter_map(|e| element_command(e, style)));
    commands.extend(provisional.and_then(|e| element_command(e, style)));
    commands
}

/// Replays a display list onto a drawing context.
pub fn replay<C: DrawingContext + ?Sized>(commands: &[DrawCommand], ctx: &mut C) {
    for command in commands {
        command.apply(ctx);
    }
}

/// Maps one element to its drawing primitive.
///
/// Returns `None` for a text element without a label, which has nothing to show.
pub fn element_command(element: &DrawingElement, style: &RenderStyle) -> Option<DrawCommand> {
    let color = element.color();
    let line_width = style.line_width;
    let origin = element.origin();

    match element.kind() {
        ElementKind::Rectangle => Some(DrawCommand::StrokeRect {
            origin,
            extent: element.extent().unwrap_or_default(),
            color,
            line_width,
        }),
        ElementKind::Circle => Some(DrawCommand::StrokeCircle {
            center: origin,
            radius: element.radius().unwrap_or_default(),
            color,
            line_width,
        }),
        ElementKind::Line => Some(DrawCommand::StrokeLine {
            from: origin,
            to: element.endpoint().unwrap_or(origin),
            color,
            line_width,
        }),
        ElementKind::Text => element.label().map(|text| DrawCommand::FillText {
            at: origin,
            text: text.to_string(),
            color,
            font: style.font.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{DIAGRAM_BLUE, RED};
    use crate::draw::{ElementId, RecordingContext};

    fn shape(id: u64, kind: ElementKind, x: f64, y: f64, w: f64, h: f64) -> DrawingElement {
        let mut element = DrawingElement::shape(ElementId(id), kind, Point::new(x, y), DIAGRAM_BLUE);
        element.set_extent(Extent::new(w, h));
        element
    }

    #[test]
    fn empty_diagram_renders_only_clear() {
        let commands = render(&[], None, &RenderStyle::default());
        assert_eq!(commands, vec![DrawCommand::Clear]);
    }

    #[test]
    fn committed_elements_render_in_insertion_order() {
        let committed = vec![
            shape(1, ElementKind::Rectangle, 10.0, 10.0, 90.0, 70.0),
            shape(2, ElementKind::Line, 0.0, 0.0, 30.0, -40.0),
            DrawingElement::text(ElementId(3), Point::new(5.0, 20.0), "DB", RED),
        ];
        let style = RenderStyle::default();

        let commands = render(&committed, None, &style);

        assert_eq!(
            commands,
            vec![
                DrawCommand::Clear,
                DrawCommand::StrokeRect {
                    origin: Point::new(10.0, 10.0),
                    extent: Extent::new(90.0, 70.0),
                    color: DIAGRAM_BLUE,
                    line_width: 2.0,
                },
                DrawCommand::StrokeLine {
                    from: Point::new(0.0, 0.0),
                    to: Point::new(30.0, -40.0),
                    color: DIAGRAM_BLUE,
                    line_width: 2.0,
                },
                DrawCommand::FillText {
                    at: Point::new(5.0, 20.0),
                    text: "DB".to_string(),
                    color: RED,
                    font: style.font.clone(),
                },
            ]
        );
    }

    #[test]
    fn provisional_is_drawn_last_with_live_extent() {
        let committed = vec![shape(1, ElementKind::Rectangle, 0.0, 0.0, 20.0, 20.0)];
        let provisional = shape(2, ElementKind::Rectangle, 50.0, 50.0, -15.0, -25.0);

        let commands = render(&committed, Some(&provisional), &RenderStyle::default());

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[2],
            DrawCommand::StrokeRect {
                origin: Point::new(50.0, 50.0),
                extent: Extent::new(-15.0, -25.0),
                color: DIAGRAM_BLUE,
                line_width: 2.0,
            }
        );
    }

    #[test]
    fn circle_command_uses_half_horizontal_extent() {
        let circle = shape(1, ElementKind::Circle, 50.0, 50.0, 40.0, 150.0);
        let command = element_command(&circle, &RenderStyle::default());
        assert_eq!(
            command,
            Some(DrawCommand::StrokeCircle {
                center: Point::new(50.0, 50.0),
                radius: 20.0,
                color: DIAGRAM_BLUE,
                line_width: 2.0,
            })
        );
    }

    #[test]
    fn custom_line_width_applies_to_shapes() {
        let style = RenderStyle {
            line_width: 4.0,
            ..RenderStyle::default()
        };
        let line = shape(1, ElementKind::Line, 0.0, 0.0, 10.0, 0.0);
        match element_command(&line, &style) {
            Some(DrawCommand::StrokeLine { line_width, .. }) => assert_eq!(line_width, 4.0),
            other => panic!("expected line command, got {other:?}"),
        }
    }

    #[test]
    fn replay_forwards_every_command() {
        let committed = vec![
            shape(1, ElementKind::Circle, 0.0, 0.0, 10.0, 0.0),
            shape(2, ElementKind::Rectangle, 0.0, 0.0, 10.0, 10.0),
        ];
        let commands = render(&committed, None, &RenderStyle::default());
        let mut recorder = RecordingContext::new();

        replay(&commands, &mut recorder);

        assert_eq!(recorder.commands(), commands.as_slice());
    }
}
