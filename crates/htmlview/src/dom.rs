//! Arena-backed parsed DOM.
//!
//! The converter is parser agnostic: any HTML parser can build this
//! structure and hand it to [`crate::HtmlViewService`]. Nodes live in a flat
//! arena indexed by [`NodeId`]; parent links are handles, never owning
//! references, so the upward pointers required by style inheritance cannot
//! form ownership cycles.

/// Handle to a node inside a [`Dom`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node payload: raw text or an element
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Raw, entity-encoded character data
    Text { content: String },
    /// An element with its tag name (lowercase) and attributes
    Element {
        tag_name: String,
        attributes: Vec<(String, String)>,
    },
}

/// A single parsed node with its tree links
#[derive(Debug, Clone)]
pub struct ParsedNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ParsedNode {
    /// The node payload
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Handle of the containing element, if any
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in document order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text { .. })
    }

    /// The tag name (lowercase) for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { tag_name, .. } => Some(tag_name.as_str()),
            NodeData::Text { .. } => None,
        }
    }

    /// Get an attribute value by name, case-insensitively
    pub fn attr(&self, name: &str) -> Option<&str> {
        match &self.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str()),
            NodeData::Text { .. } => None,
        }
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// A parsed document: flat node storage plus the top-level sibling list.
#[derive(Debug, Clone, Default)]
pub struct Dom {
    nodes: Vec<ParsedNode>,
    roots: Vec<NodeId>,
}

impl Dom {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the document has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in document order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Access a node by handle
    pub fn node(&self, id: NodeId) -> &ParsedNode {
        &self.nodes[id.0]
    }

    /// Tag name of a node's parent, if the parent is an element
    pub fn parent_tag(&self, id: NodeId) -> Option<&str> {
        self.node(id)
            .parent()
            .and_then(|parent| self.node(parent).tag_name())
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ParsedNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached text node
    pub fn new_text(&mut self, content: &str) -> NodeId {
        self.alloc(NodeData::Text {
            content: content.to_string(),
        })
    }

    /// Create a detached element node
    pub fn new_element(&mut self, tag_name: &str) -> NodeId {
        self.new_element_with_attrs(tag_name, &[])
    }

    /// Create a detached element node with attributes
    pub fn new_element_with_attrs(&mut self, tag_name: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.alloc(NodeData::Element {
            tag_name: tag_name.to_lowercase(),
            attributes: attrs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        })
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// This is the only attachment operation, so a node's parent handle
    /// always points at the element whose child list contains it.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Register a detached node as a top-level sibling
    pub fn add_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }
}
