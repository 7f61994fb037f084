//! htmlview-core - styled node tree and style records
//!
//! This crate provides the output data model shared by the `htmlview`
//! converter and UI adapters: ordered style records with right-biased
//! merging, and the styled node tree handed to a rendering layer.
//!
//! # Example
//!
//! ```rust
//! use htmlview_core::{StyleRecord, StyledNode, TextNode};
//!
//! let style: StyleRecord = [("color", "red")].into_iter().collect();
//! let node = StyledNode::Text(TextNode::new("Hello World", style));
//!
//! assert_eq!(node.text_content(), "Hello World");
//! ```

mod style;
mod tree;

pub use style::{StyleRecord, StyleSheet, StyleValue};
pub use tree::{
    Activation, ElementNode, ImageNode, ImageRef, LinkHandler, StyledNode, TextNode,
};
