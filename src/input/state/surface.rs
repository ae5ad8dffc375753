//! Gesture state machine and surface state management.

use crate::config::{Action, Config, KeyBinding, KeybindingError, KeybindingsConfig};
use crate::draw::{
    Color, Diagram, DrawingContext, DrawingElement, ElementId, NullContext, Point, RenderStyle,
    color::DIAGRAM_BLUE,
};
use crate::input::{modifiers::Modifiers, tool::Tool};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Current gesture state.
///
/// Tracks whether the user is idle, dragging out a shape, or has clicked with
/// the text tool and the host is collecting a label.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// No active gesture - waiting for pointer input
    Idle,
    /// Pointer is held and a shape is being dragged out
    Drawing {
        /// The element being previewed; not part of the diagram yet
        provisional: DrawingElement,
    },
    /// Text tool was clicked; waiting for the host to supply or cancel a label
    AwaitingLabel {
        /// Where the text will be anchored
        at: Point,
    },
}

/// Callback told whether the diagram has any committed elements.
pub type ContentListener = Box<dyn FnMut(bool)>;

/// Interactive diagram drawing surface.
///
/// Owns the committed [`Diagram`], interprets pointer and key input according
/// to the selected tool, and repaints through the injected [`DrawingContext`]
/// after every state transition. The content listener fires only when the
/// element count crosses between zero and non-zero.
pub struct DrawingSurface<C: DrawingContext = NullContext> {
    /// Committed elements in draw order
    pub(super) diagram: Diagram,
    /// Current gesture state machine
    pub(super) state: GestureState,
    /// Parsed tool, or `None` when the host selected an id we don't know
    pub(super) selected_tool: Option<Tool>,
    /// Tool id exactly as the host supplied it
    pub(super) tool_id: String,
    /// Color given to new elements
    pub(super) current_color: Color,
    /// Stroke width and font for rendering
    pub(super) style: RenderStyle,
    /// Current modifier key state
    pub(super) modifiers: Modifiers,
    /// Keybinding action map for efficient lookup
    pub(super) action_map: HashMap<KeyBinding, Action>,
    /// Rendering target
    pub(super) ctx: C,
    /// Next element id to hand out
    next_id: u64,
    /// Content presence last reported to the listener
    reported_content: bool,
    content_listener: Option<ContentListener>,
}

impl<C: DrawingContext> DrawingSurface<C> {
    /// Creates a surface with the diagram page defaults: `#2563EB` elements,
    /// 2px strokes, 16px Inter text, the `select` tool and default keybindings.
    pub fn new(ctx: C) -> Self {
        let action_map = KeybindingsConfig::default()
            .build_action_map()
            .unwrap_or_default();
        Self::with_defaults(ctx, DIAGRAM_BLUE, RenderStyle::default(), action_map)
    }

    /// Creates a surface with explicit drawing defaults.
    ///
    /// # Arguments
    /// * `ctx` - Rendering target
    /// * `color` - Color assigned to every new element
    /// * `style` - Stroke width and text font
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        ctx: C,
        color: Color,
        style: RenderStyle,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            diagram: Diagram::new(),
            state: GestureState::Idle,
            selected_tool: Some(Tool::Select),
            tool_id: Tool::Select.id().to_string(),
            current_color: color,
            style,
            modifiers: Modifiers::new(),
            action_map,
            ctx,
            next_id: 1,
            reported_content: false,
            content_listener: None,
        }
    }

    /// Creates a surface from loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the configured keybindings are invalid or clash.
    pub fn from_config(ctx: C, config: &Config) -> Result<Self, KeybindingError> {
        let action_map = config.keybindings.build_action_map()?;
        Ok(Self::with_defaults(
            ctx,
            config.drawing.default_color.to_color(),
            config.render_style(),
            action_map,
        ))
    }

    /// Selects the active tool by id, as supplied by the toolbar.
    ///
    /// Unknown ids are remembered but make pointer-down a no-op. Changing tools
    /// does not affect a gesture that is already in progress.
    pub fn set_tool(&mut self, id: &str) {
        self.selected_tool = match id.parse::<Tool>() {
            Ok(tool) => Some(tool),
            Err(err) => {
                debug!("{err}; pointer input will be ignored");
                None
            }
        };
        self.tool_id = id.to_string();
    }

    /// The parsed active tool, if the selected id is known.
    pub fn selected_tool(&self) -> Option<Tool> {
        self.selected_tool
    }

    /// The active tool id exactly as it was selected.
    pub fn tool_id(&self) -> &str {
        &self.tool_id
    }

    /// Registers the callback told about content presence changes.
    ///
    /// Replaces any previous listener. The listener is not called on
    /// registration, only on later zero/non-zero transitions.
    pub fn set_content_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.content_listener = Some(Box::new(listener));
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Committed elements in draw order.
    pub fn elements(&self) -> &[DrawingElement] {
        self.diagram.elements()
    }

    pub fn has_content(&self) -> bool {
        !self.diagram.is_empty()
    }

    /// Whether undo would do anything; hosts use this to disable the button.
    pub fn can_undo(&self) -> bool {
        self.has_content()
    }

    /// Whether clear would do anything; hosts use this to disable the button.
    pub fn can_clear(&self) -> bool {
        self.has_content()
    }

    pub fn is_awaiting_label(&self) -> bool {
        matches!(self.state, GestureState::AwaitingLabel { .. })
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Consumes the surface, returning its rendering target.
    pub fn into_context(self) -> C {
        self.ctx
    }

    pub(super) fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends an element, then notifies and repaints.
    pub(super) fn commit(&mut self, element: DrawingElement) {
        debug!("Committed {}", element);
        self.diagram.push(element);
        self.notify_content_change();
        self.repaint();
    }

    /// Calls the listener if content presence differs from what it last heard.
    pub(super) fn notify_content_change(&mut self) {
        let has_content = self.has_content();
        if has_content == self.reported_content {
            return;
        }
        self.reported_content = has_content;
        debug!("Content presence changed: {has_content}");
        if let Some(listener) = self.content_listener.as_mut() {
            listener(has_content);
        }
    }
}

impl<C: DrawingContext> fmt::Debug for DrawingSurface<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("tool_id", &self.tool_id)
            .field("state", &self.state)
            .field("elements", &self.diagram.len())
            .finish_non_exhaustive()
    }
}
