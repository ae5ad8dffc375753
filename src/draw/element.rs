//! Diagram element definitions.

use super::color::Color;
use std::fmt;

/// Minimum drag distance, in pixels, on either axis before a shape is kept.
///
/// The comparison is strict: a 5px drag is still treated as a stray click.
pub const COMMIT_THRESHOLD: f64 = 5.0;

/// A position in canvas-pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point displaced by `extent`.
    pub fn offset(self, extent: Extent) -> Point {
        Point::new(self.x + extent.width, self.y + extent.height)
    }

    /// Returns the signed delta from `self` to `other`.
    pub fn delta_to(self, other: Point) -> Extent {
        Extent::new(other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Signed width/height delta from an element's origin to its gesture end point.
///
/// Either component may be negative when the user drags up or to the left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const ZERO: Extent = Extent {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true when the drag moved past the commit threshold on either axis.
    pub fn exceeds_threshold(&self) -> bool {
        self.width.abs() > COMMIT_THRESHOLD || self.height.abs() > COMMIT_THRESHOLD
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Session-unique element identifier, handed out in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an element draws as. Fixed for the lifetime of the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Rectangle,
    Circle,
    Line,
    Text,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
            ElementKind::Line => "line",
            ElementKind::Text => "text",
        }
    }

    /// Shapes are produced by dragging; text is placed with a single click.
    pub fn is_shape(&self) -> bool {
        !matches!(self, ElementKind::Text)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shape or text annotation on the diagram.
///
/// Shapes carry an [`Extent`] and no label; text carries a label and no extent.
/// Once an element is committed to a [`Diagram`](super::Diagram) it is only
/// reachable through shared references, so it never changes again.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingElement {
    id: ElementId,
    kind: ElementKind,
    origin: Point,
    extent: Option<Extent>,
    label: Option<String>,
    color: Color,
}

impl DrawingElement {
    /// Creates a zero-extent shape anchored at `origin`, ready to be dragged.
    ///
    /// Passing [`ElementKind::Text`] yields a label-less text element, which
    /// never meets the commit threshold.
    pub fn shape(id: ElementId, kind: ElementKind, origin: Point, color: Color) -> Self {
        Self {
            id,
            kind,
            origin,
            extent: kind.is_shape().then_some(Extent::ZERO),
            label: None,
            color,
        }
    }

    /// Creates a text annotation anchored at `origin` (the text baseline start).
    pub fn text(id: ElementId, origin: Point, label: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            kind: ElementKind::Text,
            origin,
            extent: None,
            label: Some(label.into()),
            color,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Circle radius: half the horizontal drag distance.
    ///
    /// Vertical movement does not affect the radius.
    pub fn radius(&self) -> Option<f64> {
        match (self.kind, self.extent) {
            (ElementKind::Circle, Some(extent)) => Some(extent.width.abs() / 2.0),
            _ => None,
        }
    }

    /// Line end point: `origin + extent`.
    pub fn endpoint(&self) -> Option<Point> {
        match (self.kind, self.extent) {
            (ElementKind::Line, Some(extent)) => Some(self.origin.offset(extent)),
            _ => None,
        }
    }

    /// Whether the element is substantial enough to keep.
    pub fn meets_commit_threshold(&self) -> bool {
        match self.kind {
            ElementKind::Text => self.label.as_deref().is_some_and(|l| !l.is_empty()),
            _ => self.extent.is_some_and(|e| e.exceeds_threshold()),
        }
    }

    /// Updates the live extent of a provisional shape.
    pub(crate) fn set_extent(&mut self, extent: Extent) {
        if self.kind.is_shape() {
            self.extent = Some(extent);
        }
    }
}

impl fmt::Display for DrawingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.id, self.kind, self.origin)?;
        match self.kind {
            ElementKind::Text => write!(f, " {:?}", self.label().unwrap_or_default())?,
            ElementKind::Circle => {
                write!(f, " radius {}", self.radius().unwrap_or_default())?;
            }
            _ => {
                if let Some(extent) = self.extent {
                    write!(f, " extent {}", extent)?;
                }
            }
        }
        write!(f, " {}", self.color.to_hex())
    }
}
