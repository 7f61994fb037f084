//! Conversion options and the custom-renderer extension point.

use std::fmt;
use std::sync::Arc;

use htmlview_core::{LinkHandler, StyleRecord, StyleSheet, StyledNode};

use crate::dom::{Dom, NodeId};
use crate::service::HtmlViewService;

/// What a custom renderer decided for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// Use this node verbatim instead of the default rendering
    Replace(StyledNode),
    /// Produce no output for this node
    Skip,
}

/// The node a custom renderer is being asked about, with its surroundings.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// The document being transformed
    pub dom: &'a Dom,
    /// The node under consideration
    pub node: NodeId,
    /// Position of the node within its sibling list
    pub index: usize,
    /// The full sibling list
    pub siblings: &'a [NodeId],
    /// The enclosing element, if any
    pub parent: Option<NodeId>,
}

/// Per-node override hook, consulted before any default processing.
///
/// Returning `None` means "not handled": the node goes through default
/// rendering. The service reference allows hooks to recurse into children
/// via [`HtmlViewService::render_nodes`].
pub type CustomRenderer =
    Arc<dyn Fn(&HookContext<'_>, &HtmlViewService) -> Option<RenderOutcome> + Send + Sync>;

/// Options for a conversion. Construct with struct-update syntax over
/// [`Default`] and hand to [`HtmlViewService::with_options`]; the options
/// are immutable for the duration of a conversion.
#[derive(Clone)]
pub struct RenderOptions {
    /// Line-break decoration text
    pub line_break: String,

    /// Paragraph-break decoration text
    pub paragraph_break: String,

    /// Glyph prefixed to unordered list items
    pub bullet: String,

    /// Insert line-break decorations around block elements
    pub add_line_breaks: bool,

    /// Default style applied beneath the inherited cascade on text nodes
    /// and list prefixes
    pub text_style: StyleRecord,

    /// Per-tag style rules
    pub styles: StyleSheet,

    /// Handler links forward their decoded href to
    pub link_handler: Option<LinkHandler>,

    /// Handler for long-press link activation
    pub link_long_press_handler: Option<LinkHandler>,

    /// Per-node override hook
    pub custom_renderer: Option<CustomRenderer>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_break: "\n".to_string(),
            paragraph_break: "\n\n".to_string(),
            bullet: "\u{2022} ".to_string(),
            add_line_breaks: false,
            text_style: StyleRecord::new(),
            styles: StyleSheet::new(),
            link_handler: None,
            link_long_press_handler: None,
            custom_renderer: None,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("line_break", &self.line_break)
            .field("paragraph_break", &self.paragraph_break)
            .field("bullet", &self.bullet)
            .field("add_line_breaks", &self.add_line_breaks)
            .field("text_style", &self.text_style)
            .field("styles", &self.styles)
            .field("link_handler", &self.link_handler.is_some())
            .field(
                "link_long_press_handler",
                &self.link_long_press_handler.is_some(),
            )
            .field("custom_renderer", &self.custom_renderer.is_some())
            .finish()
    }
}
