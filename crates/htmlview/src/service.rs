//! HtmlViewService - the main entry point for DOM to styled-tree conversion.

use htmlview_core::{Activation, ElementNode, StyleRecord, StyledNode, TextNode};

use crate::cascade::inherited_style;
use crate::dom::{Dom, NodeData, NodeId};
use crate::options::{HookContext, RenderOptions, RenderOutcome};
use crate::scale::Scaler;
use crate::{css, entity, image};

/// The main service for converting a parsed DOM into a styled node tree.
///
/// The transform is synchronous and recursive: one [`StyledNode`] per input
/// node, in source order, unless the custom renderer skips a node. The
/// device width is read once at construction.
pub struct HtmlViewService {
    options: RenderOptions,
    scaler: Scaler,
}

impl HtmlViewService {
    /// Create a service with default options
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a service with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            scaler: Scaler::from_device(),
        }
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Transform a whole document
    pub fn render(&self, dom: &Dom) -> Vec<StyledNode> {
        self.render_nodes(dom, dom.roots(), None)
    }

    /// Parse an HTML string and transform the result
    #[cfg(feature = "html")]
    pub fn render_html(&self, html: &str) -> crate::Result<Vec<StyledNode>> {
        let dom = crate::html::parse_html(html)?;
        Ok(self.render(&dom))
    }

    /// Transform one sibling list.
    ///
    /// The ordered-list counter is local to this invocation: recursing into
    /// an `ol`'s children starts a fresh counter at 1.
    pub fn render_nodes(
        &self,
        dom: &Dom,
        nodes: &[NodeId],
        parent: Option<NodeId>,
    ) -> Vec<StyledNode> {
        let mut ordered_counter = 1u32;
        let mut out = Vec::with_capacity(nodes.len());

        for (index, &id) in nodes.iter().enumerate() {
            if let Some(ref hook) = self.options.custom_renderer {
                let ctx = HookContext {
                    dom,
                    node: id,
                    index,
                    siblings: nodes,
                    parent,
                };
                match hook(&ctx, self) {
                    Some(RenderOutcome::Replace(node)) => {
                        out.push(node);
                        continue;
                    }
                    Some(RenderOutcome::Skip) => continue,
                    None => {}
                }
            }

            match dom.node(id).data() {
                NodeData::Text { content } => out.push(self.render_text(dom, content, parent)),
                NodeData::Element { tag_name, .. } => out.push(self.render_element(
                    dom,
                    id,
                    tag_name,
                    index,
                    nodes.len(),
                    parent,
                    &mut ordered_counter,
                )),
            }
        }

        out
    }

    fn render_text(&self, dom: &Dom, content: &str, parent: Option<NodeId>) -> StyledNode {
        StyledNode::Text(TextNode::new(
            entity::decode(content),
            self.cascaded_text_style(dom, parent),
        ))
    }

    /// Caller-default text style with the inherited cascade overlaid on top
    fn cascaded_text_style(&self, dom: &Dom, parent: Option<NodeId>) -> StyleRecord {
        let mut style = self.options.text_style.clone();
        style.merge(&inherited_style(dom, parent, &self.options.styles));
        style
    }

    #[allow(clippy::too_many_arguments)]
    fn render_element(
        &self,
        dom: &Dom,
        id: NodeId,
        tag: &str,
        index: usize,
        sibling_count: usize,
        parent: Option<NodeId>,
        ordered_counter: &mut u32,
    ) -> StyledNode {
        let node = dom.node(id);

        if tag == "img" {
            return image::styled_image(node);
        }

        let last_sibling = index + 1 == sibling_count;
        let mut element = ElementNode::new(tag);

        if tag == "a" {
            if let Some(href) = node.attr("href") {
                let url = entity::decode(href);
                if let Some(ref handler) = self.options.link_handler {
                    element.on_activate = Some(Activation::new(url.clone(), handler.clone()));
                }
                if let Some(ref handler) = self.options.link_long_press_handler {
                    element.on_long_activate = Some(Activation::new(url, handler.clone()));
                }
            }
        }

        if self.options.add_line_breaks {
            match tag {
                "pre" => element.break_before = Some(self.options.line_break.clone()),
                "p" if !last_sibling => {
                    element.break_after = Some(self.options.paragraph_break.clone());
                }
                "br" | "h1" | "h2" | "h3" | "h4" | "h5" => {
                    element.break_after = Some(self.options.line_break.clone());
                }
                _ => {}
            }
        }

        if tag == "li" {
            let prefix_text = match parent.and_then(|p| dom.node(p).tag_name()) {
                Some("ol") => {
                    let label = format!("{ordered_counter}. ");
                    *ordered_counter += 1;
                    Some(label)
                }
                Some("ul") => Some(self.options.bullet.clone()),
                _ => None,
            };
            if let Some(text) = prefix_text {
                element.list_prefix =
                    Some(TextNode::new(text, self.cascaded_text_style(dom, parent)));
            }
            if self.options.add_line_breaks && !last_sibling {
                element.break_after = Some(self.options.line_break.clone());
            }
        }

        let mut style = match node.attr("style") {
            Some(raw) => css::parse_inline_style(raw, &self.scaler),
            None => StyleRecord::new(),
        };

        // Tree roots take their own tag's stylesheet entry directly, beneath
        // the inline style; everything deeper receives stylesheet effects
        // through the inherited cascade instead.
        if node.parent().is_none() {
            if let Some(entry) = self.options.styles.get(tag) {
                let mut composed = entry.clone();
                composed.merge(&style);
                style = composed;
            }
        }

        if tag == "blockquote" {
            style.set("borderLeftWidth", self.scaler.scale(4.0));
            style.set("borderLeftColor", "#808080");
            style.set("paddingLeft", self.scaler.scale(10.0));
            style.set("fontStyle", "italic");
            style.set("marginBottom", self.scaler.scale(10.0));
        }

        element.style = style;
        element.children = self.render_nodes(dom, node.children(), Some(id));

        StyledNode::Element(element)
    }
}

impl Default for HtmlViewService {
    fn default() -> Self {
        Self::new()
    }
}
