//! Drawing tool selection.

use crate::draw::ElementKind;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool is chosen by a toolbar outside the surface and determines
/// what a pointer gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Pointer; gestures do nothing
    Select,
    /// Rectangle outline from the press point to the release point
    Rectangle,
    /// Circle centered on the press point
    Circle,
    /// Straight line from the press point to the release point
    Line,
    /// Text label placed at the press point
    Text,
}

/// Toolbar grouping for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Basic,
    Shapes,
    Connectors,
    Text,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Basic,
        ToolCategory::Shapes,
        ToolCategory::Connectors,
        ToolCategory::Text,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Basic => "Basic",
            ToolCategory::Shapes => "Shapes",
            ToolCategory::Connectors => "Connectors",
            ToolCategory::Text => "Text",
        }
    }
}

/// Returned when a tool id is not one the surface understands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool '{0}'")]
pub struct UnknownTool(pub String);

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 5] = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
        Tool::Text,
    ];

    /// Stable identifier used by toolbars and scripts.
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Text => "text",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Line => "Line",
            Tool::Text => "Text",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            Tool::Select => ToolCategory::Basic,
            Tool::Rectangle | Tool::Circle => ToolCategory::Shapes,
            Tool::Line => ToolCategory::Connectors,
            Tool::Text => ToolCategory::Text,
        }
    }

    /// The element kind a drag with this tool produces, if it draws a shape.
    pub fn shape_kind(&self) -> Option<ElementKind> {
        match self {
            Tool::Rectangle => Some(ElementKind::Rectangle),
            Tool::Circle => Some(ElementKind::Circle),
            Tool::Line => Some(ElementKind::Line),
            Tool::Select | Tool::Text => None,
        }
    }

    /// Tools belonging to a toolbar category, in toolbar order.
    pub fn in_category(category: ToolCategory) -> impl Iterator<Item = Tool> {
        Tool::ALL
            .into_iter()
            .filter(move |tool| tool.category() == category)
    }
}

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_id() {
        for tool in Tool::ALL {
            assert_eq!(tool.id().parse::<Tool>(), Ok(tool));
        }
    }

    #[test]
    fn rejects_unknown_ids() {
        assert_eq!("arrow".parse::<Tool>(), Err(UnknownTool("arrow".into())));
        assert!("Rectangle".parse::<Tool>().is_err());
        assert!("".parse::<Tool>().is_err());
    }

    #[test]
    fn shape_kind_only_for_drag_tools() {
        assert_eq!(Tool::Rectangle.shape_kind(), Some(ElementKind::Rectangle));
        assert_eq!(Tool::Circle.shape_kind(), Some(ElementKind::Circle));
        assert_eq!(Tool::Line.shape_kind(), Some(ElementKind::Line));
        assert_eq!(Tool::Text.shape_kind(), None);
        assert_eq!(Tool::Select.shape_kind(), None);
    }

    #[test]
    fn categories_group_toolbar() {
        let shapes: Vec<_> = Tool::in_category(ToolCategory::Shapes).collect();
        assert_eq!(shapes, vec![Tool::Rectangle, Tool::Circle]);
        assert_eq!(Tool::Line.category(), ToolCategory::Connectors);
        assert_eq!(Tool::Select.category(), ToolCategory::Basic);
    }
}
