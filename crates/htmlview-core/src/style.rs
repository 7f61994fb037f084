//! Style records: ordered property → value maps with right-biased merging.

use std::fmt;

use indexmap::IndexMap;

/// A single style property value.
///
/// Styles are stringly-keyed to stay agnostic of the UI layer; values are
/// either raw strings (colors, alignments) or numbers (magnitudes that went
/// through scaling).
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Textual value, e.g. `"center"` or `"#808080"`
    Str(String),
    /// Numeric value, e.g. a scaled font size
    Num(f32),
}

impl StyleValue {
    /// Get the numeric value, if this is one
    pub fn as_num(&self) -> Option<f32> {
        match self {
            StyleValue::Num(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }

    /// Get the string value, if this is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s.as_str()),
            StyleValue::Num(_) => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Num(value)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => write!(f, "{}", s),
            StyleValue::Num(n) => write!(f, "{}", n),
        }
    }
}

/// An ordered collection of style properties.
///
/// Merging is a shallow right-biased union: the record merged *in* overwrites
/// same-named properties entirely. Insertion order is preserved, which keeps
/// conversions deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRecord {
    props: IndexMap<String, StyleValue>,
}

impl StyleRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties in the record
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check whether the record has no properties
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Set a property, overwriting any earlier value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.props.insert(name.into(), value.into());
    }

    /// Look up a property by name
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// Overlay `other` on top of this record: every property of `other`
    /// overwrites the same-named property here
    pub fn merge(&mut self, other: &StyleRecord) {
        for (name, value) in &other.props {
            self.props.insert(name.clone(), value.clone());
        }
    }

    /// Iterate properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = StyleRecord::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

/// Per-tag style rules supplied by the caller.
///
/// Keys are tag names, normalized to lowercase on insert and lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: IndexMap<String, StyleRecord>,
}

impl StyleSheet {
    /// Create an empty stylesheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style record for a tag name
    pub fn insert(&mut self, tag: &str, record: StyleRecord) {
        self.rules.insert(tag.to_lowercase(), record);
    }

    /// Look up the style record for a tag name
    pub fn get(&self, tag: &str) -> Option<&StyleRecord> {
        self.rules.get(&tag.to_lowercase())
    }

    /// Check whether the stylesheet has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut record = StyleRecord::new();
        record.set("color", "red");
        record.set("fontSize", 12.0);

        assert_eq!(record.get("color"), Some(&StyleValue::Str("red".into())));
        assert_eq!(record.get("fontSize").and_then(StyleValue::as_num), Some(12.0));
        assert_eq!(record.get("padding"), None);
    }

    #[test]
    fn test_merge_is_right_biased() {
        let mut base = StyleRecord::new();
        base.set("color", "blue");
        base.set("fontSize", 10.0);
        let over: StyleRecord = [("color", "red")].into_iter().collect();

        base.merge(&over);

        assert_eq!(base.get("color"), Some(&StyleValue::Str("red".into())));
        assert_eq!(base.get("fontSize").and_then(StyleValue::as_num), Some(10.0));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = StyleRecord::new();
        record.set("padding", 4.0);
        record.set("margin", 2.0);
        record.set("padding", 8.0);

        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["padding", "margin"]);
        assert_eq!(record.get("padding").and_then(StyleValue::as_num), Some(8.0));
    }

    #[test]
    fn test_stylesheet_lookup_is_case_insensitive() {
        let mut sheet = StyleSheet::new();
        sheet.insert("P", [("color", "green")].into_iter().collect());

        assert!(sheet.get("p").is_some());
        assert!(sheet.get("P").is_some());
        assert!(sheet.get("div").is_none());
    }
}
