//! Selection of a top-level element by tag name and language attribute

use crate::sfc::node::Element;

/// Language constraint for selection: a single value or any of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangFilter {
    Exact(String),
    OneOf(Vec<String>),
}

impl LangFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            LangFilter::Exact(lang) => lang == value,
            LangFilter::OneOf(langs) => langs.iter().any(|lang| lang == value),
        }
    }
}

/// First element in document order matching the tag name and the optional
/// language filter.
///
/// Without a filter, any element of the tag matches regardless of its
/// `lang` attribute. With a filter, an element matches only if it carries a
/// `lang` attribute the filter accepts; an element with no attributes never
/// matches a filter. Zero matches is `None`, not an error.
pub fn select_node<'a>(
    nodes: &'a [Element],
    tag: &str,
    lang: Option<&LangFilter>,
) -> Option<&'a Element> {
    let tag = tag.to_ascii_lowercase();
    nodes.iter().find(|node| {
        if node.tag_name != tag {
            return false;
        }
        match lang {
            None => true,
            Some(filter) => node.lang().is_some_and(|value| filter.matches(value)),
        }
    })
}
