//! # htmlview
//!
//! Convert parsed HTML into a styled node tree for UI rendering.
//!
//! The converter walks a parsed markup tree and produces a tree of styled,
//! typed nodes ([`StyledNode`]) that an arbitrary UI layer can paint:
//! cascaded styles, inline CSS shorthand, responsive magnitude scaling,
//! line-break and list-numbering decorations, pre-wired link activations,
//! and a per-node override hook.
//!
//! ## Design
//!
//! Parsing is a pluggable collaborator: any HTML parser can build the arena
//! [`Dom`] and hand it over. The bundled `scraper`/html5ever front-end sits
//! behind the default `html` feature, so consumers with their own parser
//! carry no parser dependency.
//!
//! ## Example (Dom-based)
//!
//! ```rust
//! use htmlview::{Dom, HtmlViewService};
//!
//! let mut dom = Dom::new();
//! let h1 = dom.new_element("h1");
//! let text = dom.new_text("Hello World");
//! dom.append_child(h1, text);
//! dom.add_root(h1);
//!
//! let service = HtmlViewService::new();
//! let nodes = service.render(&dom);
//! assert_eq!(nodes[0].text_content(), "Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmlview::HtmlViewService;
//!
//! let service = HtmlViewService::new();
//! let nodes = service.render_html("<h1>Hello World</h1>").unwrap();
//! assert_eq!(nodes[0].text_content(), "Hello World");
//! ```

pub mod cascade;
pub mod css;
pub mod dom;
pub mod entity;
#[cfg(feature = "html")]
pub mod html;
mod image;
mod options;
pub mod scale;
mod service;

pub use dom::{Dom, NodeData, NodeId, ParsedNode};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use htmlview_core::{
    Activation, ElementNode, ImageNode, ImageRef, LinkHandler, StyleRecord, StyleSheet,
    StyleValue, StyledNode, TextNode,
};
pub use options::{CustomRenderer, HookContext, RenderOptions, RenderOutcome};
pub use scale::{device_width, set_device_width, Scaler};
pub use service::HtmlViewService;

/// Error type for htmlview operations
#[derive(Debug, thiserror::Error)]
pub enum HtmlViewError {
    /// The markup front-end failed to produce a tree
    #[error("Parse error: {0}")]
    Parse(String),

    /// An inline style value carried no numeric token
    #[error("Malformed style value: {0}")]
    MalformedStyleValue(String),
}

pub type Result<T> = std::result::Result<T, HtmlViewError>;
