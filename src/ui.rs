/// Text shown around the canvas: status line and tool palette
use crate::draw::DrawingContext;
use crate::input::{DrawingSurface, GestureState, Tool, ToolCategory};

/// Separator between status line segments
const STATUS_SEPARATOR: &str = " • ";

/// Builds the status line shown under the canvas.
///
/// Format: `Tool: rectangle • 3 element(s) • Diagram created`. The last
/// segment only appears once something has been drawn.
pub fn status_text(tool_id: &str, element_count: usize) -> String {
    let mut text = format!("Tool: {tool_id}{STATUS_SEPARATOR}{element_count} element(s)");
    if element_count > 0 {
        text.push_str(STATUS_SEPARATOR);
        text.push_str("Diagram created");
    }
    text
}

/// Status line for a live surface, with a hint while a label is pending.
pub fn surface_status<C: DrawingContext>(surface: &DrawingSurface<C>) -> String {
    let mut text = status_text(surface.tool_id(), surface.elements().len());
    if let GestureState::AwaitingLabel { at } = surface.state() {
        text.push_str(STATUS_SEPARATOR);
        text.push_str(&format!("Enter label at {at}"));
    }
    text
}

/// Lists the available tools grouped by toolbar category.
pub fn tool_palette() -> Vec<String> {
    let mut lines = Vec::new();
    for category in ToolCategory::ALL {
        lines.push(format!("{}:", category.label()));
        for tool in Tool::in_category(category) {
            lines.push(format!("  {:<10} {}", tool.id(), tool.name()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::NullContext;

    #[test]
    fn status_mentions_diagram_only_when_non_empty() {
        assert_eq!(status_text("select", 0), "Tool: select • 0 element(s)");
        assert_eq!(
            status_text("circle", 2),
            "Tool: circle • 2 element(s) • Diagram created"
        );
    }

    #[test]
    fn surface_status_shows_pending_label() {
        let mut surface = DrawingSurface::new(NullContext);
        surface.set_tool("text");
        surface.on_pointer_down(12.0, 30.0);

        assert_eq!(
            surface_status(&surface),
            "Tool: text • 0 element(s) • Enter label at (12, 30)"
        );
    }

    #[test]
    fn palette_groups_tools() {
        let palette = tool_palette();
        assert_eq!(palette[0], "Basic:");
        assert!(palette[1].trim_start().starts_with("select"));
        let connectors = palette.iter().position(|l| l == "Connectors:").unwrap();
        assert!(palette[connectors + 1].contains("line"));
        assert_eq!(palette.len(), ToolCategory::ALL.len() + Tool::ALL.len());
    }
}
