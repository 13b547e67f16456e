//! Element and span data model for parsed fragments
//!
//! The data model is the minimal contract the extractor needs from a markup
//! parser: ordered top-level elements, each with a tag name, an attribute
//! map, and (when known) the byte offsets delimiting its content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Byte offsets delimiting an element's content in the source document.
///
/// `start_tag_end` is the offset immediately after the opening tag closes;
/// `end_tag_start` is the offset where the closing tag begins. The content
/// is the text strictly between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSpan {
    pub start_tag_end: usize,
    pub end_tag_start: usize,
}

impl ContentSpan {
    pub fn new(start_tag_end: usize, end_tag_start: usize) -> Self {
        Self {
            start_tag_end,
            end_tag_start,
        }
    }

    /// The content substring, or `None` when the offsets are reversed, out
    /// of range, or not on char boundaries. A malformed span is treated the
    /// same as a missing one, never as a panic.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        if self.start_tag_end > self.end_tag_start {
            return None;
        }
        source.get(self.start_tag_end..self.end_tag_start)
    }
}

/// A top-level element of a parsed fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, ASCII-lowercased
    pub tag_name: String,
    /// Attribute names (ASCII-lowercased) to values; bare attributes map to "".
    /// Ordered by name so serialized output is stable
    pub attributes: BTreeMap<String, String>,
    /// `None` marks an unlocated element (unclosed, or bad offsets upstream)
    pub location: Option<ContentSpan>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: BTreeMap::new(),
            location: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The `lang` attribute, the one attribute selection cares about
    pub fn lang(&self) -> Option<&str> {
        self.attribute("lang")
    }
}
