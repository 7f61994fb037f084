//! The styled node tree produced by a conversion.
//!
//! This is the hand-off format to a UI layer: each node carries its effective
//! style, link affordances are pre-wired activations, and line breaks and
//! list prefixes are typed decorations rather than extra sequence entries.

use std::fmt;
use std::sync::Arc;

use crate::style::StyleRecord;

/// Shared callback invoked with a link URL
pub type LinkHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// A link affordance: a decoded URL bound to a caller-supplied handler.
#[derive(Clone)]
pub struct Activation {
    url: String,
    handler: LinkHandler,
}

impl Activation {
    /// Bind a handler to an already-decoded URL
    pub fn new(url: impl Into<String>, handler: LinkHandler) -> Self {
        Self {
            url: url.into(),
            handler,
        }
    }

    /// The URL this activation forwards
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Invoke the handler with the bound URL
    pub fn invoke(&self) {
        (self.handler)(&self.url);
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation").field("url", &self.url).finish()
    }
}

impl PartialEq for Activation {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && Arc::ptr_eq(&self.handler, &other.handler)
    }
}

/// A run of entity-decoded text with its effective style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub style: StyleRecord,
}

impl TextNode {
    pub fn new(text: impl Into<String>, style: StyleRecord) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A styled container node with optional decorations and link affordances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementNode {
    /// Lowercase tag name of the source element
    pub tag_name: String,
    /// Composed effective style
    pub style: StyleRecord,
    /// Transformed children, in source order
    pub children: Vec<StyledNode>,
    /// Activation bound for `<a href>` elements
    pub on_activate: Option<Activation>,
    /// Long-press activation, when a handler is configured
    pub on_long_activate: Option<Activation>,
    /// Leading line-break decoration
    pub break_before: Option<String>,
    /// Trailing line-break decoration
    pub break_after: Option<String>,
    /// Leading list-prefix decoration (`"1. "`, bullet glyph)
    pub list_prefix: Option<TextNode>,
}

impl ElementNode {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }
}

/// A remote image reference with explicit dimensions.
///
/// Zero width/height means "unsized"; resolving the natural size is the
/// rendering layer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

/// An image leaf: the reference plus its companion size style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageNode {
    pub source: ImageRef,
    pub style: StyleRecord,
}

/// A node of the styled output tree
#[derive(Debug, Clone, PartialEq)]
pub enum StyledNode {
    Text(TextNode),
    Element(ElementNode),
    Image(ImageNode),
}

impl StyledNode {
    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, StyledNode::Text(_))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, StyledNode::Element(_))
    }

    /// Get the text node, if this is one
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            StyledNode::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the element node, if this is one
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            StyledNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get the image node, if this is one
    pub fn as_image(&self) -> Option<&ImageNode> {
        match self {
            StyledNode::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Flatten this subtree to plain text, decorations included.
    ///
    /// Images contribute nothing; elements contribute break-before, list
    /// prefix, children, then break-after.
    pub fn text_content(&self) -> String {
        match self {
            StyledNode::Text(text) => text.text.clone(),
            StyledNode::Image(_) => String::new(),
            StyledNode::Element(element) => {
                let mut out = String::new();
                if let Some(ref brk) = element.break_before {
                    out.push_str(brk);
                }
                if let Some(ref prefix) = element.list_prefix {
                    out.push_str(&prefix.text);
                }
                for child in &element.children {
                    out.push_str(&child.text_content());
                }
                if let Some(ref brk) = element.break_after {
                    out.push_str(brk);
                }
                out
            }
        }
    }
}
