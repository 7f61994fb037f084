//! HTML parsing support.
//!
//! This module provides the bundled markup front-end: an HTML string is
//! parsed with `scraper`/html5ever and converted into the arena [`Dom`] the
//! converter consumes. html5ever recovers from malformed input, so the
//! error arm of [`parse_html`] is the seam for stricter front-ends plugged
//! into the same contract.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::dom::{Dom, NodeId};
use crate::Result;

/// Parse an HTML string into a [`Dom`].
///
/// # Example
///
/// ```rust
/// use htmlview::{parse_html, HtmlViewService};
///
/// let dom = parse_html("<p>Hello <em>World</em></p>").unwrap();
/// let nodes = HtmlViewService::new().render(&dom);
/// assert_eq!(nodes[0].text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Result<Dom> {
    let document = Html::parse_fragment(html);
    let mut dom = Dom::new();

    // parse_fragment wraps content in a synthetic <html> element; its
    // children are the document's top-level siblings.
    for child in document.root_element().children() {
        match child.value() {
            ScraperNode::Text(text) => {
                let id = dom.new_text(&text.text);
                dom.add_root(id);
            }
            ScraperNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    let id = convert_element(&mut dom, element);
                    dom.add_root(id);
                }
            }
            _ => {}
        }
    }

    Ok(dom)
}

/// Convert a scraper element subtree into arena nodes
fn convert_element(dom: &mut Dom, element: ElementRef) -> NodeId {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let id = dom.new_element_with_attrs(element.value().name(), &attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                let text_id = dom.new_text(&text.text);
                dom.append_child(id, text_id);
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    let child_id = convert_element(dom, child_element);
                    dom.append_child(id, child_id);
                }
            }
            _ => {}
        }
    }

    id
}
