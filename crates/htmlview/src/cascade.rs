//! Style inheritance along the ancestor chain.

use htmlview_core::{StyleRecord, StyleSheet};

use crate::dom::{Dom, NodeId};

/// Resolve the style a node inherits from `ancestor` and everything above it.
///
/// The chain is resolved root-first, overlaying each ancestor's per-tag
/// stylesheet entry on the way down, so the nearest ancestor's entry wins
/// and the root-most is weakest. Call with a node's parent handle; `None`
/// (a tree root) resolves to an empty record.
pub fn inherited_style(dom: &Dom, ancestor: Option<NodeId>, sheet: &StyleSheet) -> StyleRecord {
    let Some(id) = ancestor else {
        return StyleRecord::new();
    };

    let node = dom.node(id);
    let mut style = inherited_style(dom, node.parent(), sheet);
    if let Some(entry) = node.tag_name().and_then(|tag| sheet.get(tag)) {
        style.merge(entry);
    }
    style
}
