//! Mapping of `img` elements into sized image-reference nodes.

use htmlview_core::{ImageNode, ImageRef, StyleRecord, StyledNode};

use crate::dom::ParsedNode;

/// Parse the leading digit run of an attribute value, `parseInt`-style.
///
/// `"50"` and `"50px"` both read as 50; anything without leading digits
/// reads as absent.
fn attr_magnitude(value: Option<&str>) -> Option<u32> {
    let digits: String = value?
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Resolve one dimension: explicit attribute first, `data-` fallback second,
/// zero when neither carries a usable magnitude. Zero counts as unset so a
/// `width="0"` still defers to `data-width`.
fn dimension(node: &ParsedNode, name: &str, data_name: &str) -> u32 {
    attr_magnitude(node.attr(name))
        .filter(|v| *v > 0)
        .or_else(|| attr_magnitude(node.attr(data_name)).filter(|v| *v > 0))
        .unwrap_or(0)
}

/// Adapt an `img` element into an image leaf.
///
/// The companion size style mirrors the resolved dimensions; a zero-sized
/// reference is valid output whose natural size the rendering layer
/// resolves downstream.
pub(crate) fn styled_image(node: &ParsedNode) -> StyledNode {
    let width = dimension(node, "width", "data-width");
    let height = dimension(node, "height", "data-height");

    let source = ImageRef {
        uri: node.attr("src").unwrap_or_default().to_string(),
        width,
        height,
    };

    let mut style = StyleRecord::new();
    style.set("width", width as f32);
    style.set("height", height as f32);

    StyledNode::Image(ImageNode { source, style })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Dom;

    fn image(attrs: &[(&str, &str)]) -> ImageNode {
        let mut dom = Dom::new();
        let img = dom.new_element_with_attrs("img", attrs);
        match styled_image(dom.node(img)) {
            StyledNode::Image(image) => image,
            other => panic!("expected image node, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_dimensions() {
        let image = image(&[("src", "a.png"), ("width", "120"), ("height", "80")]);
        assert_eq!(
            image.source,
            ImageRef {
                uri: "a.png".to_string(),
                width: 120,
                height: 80,
            }
        );
    }

    #[test]
    fn test_data_attribute_fallback() {
        let image = image(&[("src", "a.png"), ("data-width", "50")]);
        assert_eq!(image.source.width, 50);
        assert_eq!(image.source.height, 0);
    }

    #[test]
    fn test_explicit_wins_over_data() {
        let image = image(&[("width", "30"), ("data-width", "50")]);
        assert_eq!(image.source.width, 30);
    }

    #[test]
    fn test_zero_defers_to_data() {
        let image = image(&[("width", "0"), ("data-width", "50")]);
        assert_eq!(image.source.width, 50);
    }

    #[test]
    fn test_non_numeric_reads_as_unsized() {
        let image = image(&[("src", "a.png"), ("width", "auto")]);
        assert_eq!(image.source.width, 0);
    }

    #[test]
    fn test_unit_suffix_ignored() {
        let image = image(&[("width", "50px")]);
        assert_eq!(image.source.width, 50);
    }

    #[test]
    fn test_size_style_mirrors_dimensions() {
        let image = image(&[("width", "50"), ("height", "20")]);
        assert_eq!(
            image.style.get("width").and_then(htmlview_core::StyleValue::as_num),
            Some(50.0)
        );
        assert_eq!(
            image.style.get("height").and_then(htmlview_core::StyleValue::as_num),
            Some(20.0)
        );
    }
}
