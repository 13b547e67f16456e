//! Fragment builder: pairs top-level open/close tags into elements
//!
//! This is the tree-building collaborator of the extractor. It walks the
//! token stream once and emits the document's top-level elements in order.
//! While an element is open, only tags with the *same* name adjust nesting
//! depth, so tag-like noise inside a block (generics in a script, nested
//! markup in a template) cannot unbalance the pairing. An element still open
//! at end of input is emitted unlocated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sfc::lexer::{tokenize_with_spans, Token};
use crate::sfc::node::{ContentSpan, Element};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^</?([A-Za-z][-A-Za-z0-9_]*)").unwrap());

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:@][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/=]+)))?"#)
        .unwrap()
});

/// An element whose closing tag has not been seen yet
struct OpenElement {
    element: Element,
    start_tag_end: usize,
    /// Nesting depth of same-named tags inside this element
    depth: usize,
}

/// Parse the document's top-level elements, in document order.
///
/// This is the whole consumed parsing contract: tag name, attribute map,
/// and the two content offsets. No text nodes, no nesting below the top
/// level.
pub fn parse_fragment(input: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut state: Option<OpenElement> = None;

    for (token, span) in tokenize_with_spans(input) {
        let raw = &input[span.start..span.end];
        match token {
            Token::OpenTag => {
                let self_closing = raw.ends_with("/>");
                if state.is_none() {
                    let Some(element) = element_from_open_tag(raw) else {
                        continue;
                    };
                    if self_closing {
                        // Located, zero-length content at the end of the tag
                        elements.push(Element {
                            location: Some(ContentSpan::new(span.end, span.end)),
                            ..element
                        });
                    } else {
                        state = Some(OpenElement {
                            element,
                            start_tag_end: span.end,
                            depth: 0,
                        });
                    }
                } else if let Some(open) = state.as_mut() {
                    if !self_closing && tag_name(raw).as_deref() == Some(open.element.tag_name.as_str()) {
                        open.depth += 1;
                    }
                }
            }
            Token::CloseTag => {
                if let Some(mut open) = state.take() {
                    if tag_name(raw).as_deref() == Some(open.element.tag_name.as_str()) {
                        if open.depth == 0 {
                            open.element.location =
                                Some(ContentSpan::new(open.start_tag_end, span.start));
                            elements.push(open.element);
                        } else {
                            open.depth -= 1;
                            state = Some(open);
                        }
                    } else {
                        state = Some(open);
                    }
                }
            }
            Token::Comment | Token::LessThan | Token::Text => {}
        }
    }

    // Unclosed top-level element: present, but unlocated
    if let Some(open) = state.take() {
        elements.push(open.element);
    }

    elements
}

/// Tag name of a raw open or close tag, ASCII-lowercased
fn tag_name(raw: &str) -> Option<String> {
    TAG_NAME_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Build an element (name + attributes) from a raw open tag
fn element_from_open_tag(raw: &str) -> Option<Element> {
    let name = TAG_NAME_RE.captures(raw).and_then(|caps| caps.get(1))?;
    let mut element = Element::new(name.as_str().to_ascii_lowercase());

    let rest = raw[name.end()..]
        .trim_end_matches('>')
        .trim_end_matches('/');
    for caps in ATTR_RE.captures_iter(rest) {
        let Some(key) = caps.get(1) else { continue };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        // First occurrence of a duplicated attribute name wins
        element
            .attributes
            .entry(key.as_str().to_ascii_lowercase())
            .or_insert(value);
    }

    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element() {
        let nodes = parse_fragment("<script>let a = 1;</script>");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag_name, "script");
        assert_eq!(nodes[0].location, Some(ContentSpan::new(8, 18)));
    }

    #[test]
    fn test_top_level_order() {
        let doc = "<template><div/></template>\n<script>code</script>\n<style>a {}</style>";
        let nodes = parse_fragment(doc);
        let names: Vec<&str> = nodes.iter().map(|n| n.tag_name.as_str()).collect();
        assert_eq!(names, vec!["template", "script", "style"]);
    }

    #[test]
    fn test_nested_markup_does_not_close_template() {
        let doc = "<template><div><span>x</span></div></template>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 1);
        let span = nodes[0].location.unwrap();
        assert_eq!(span.slice(doc), Some("<div><span>x</span></div>"));
    }

    #[test]
    fn test_nested_same_name_tags() {
        let doc = "<template><template>x</template></template>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 1);
        let span = nodes[0].location.unwrap();
        assert_eq!(span.slice(doc), Some("<template>x</template>"));
    }

    #[test]
    fn test_attributes_quoted_single_unquoted_bare() {
        let doc = "<script lang=\"ts\" id='main' type=module setup></script>";
        let nodes = parse_fragment(doc);
        let attrs = &nodes[0].attributes;
        assert_eq!(attrs.get("lang").map(String::as_str), Some("ts"));
        assert_eq!(attrs.get("id").map(String::as_str), Some("main"));
        assert_eq!(attrs.get("type").map(String::as_str), Some("module"));
        assert_eq!(attrs.get("setup").map(String::as_str), Some(""));
    }

    #[test]
    fn test_duplicate_attribute_keeps_first() {
        let doc = "<script lang=\"ts\" lang=\"js\"></script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes[0].lang(), Some("ts"));
    }

    #[test]
    fn test_tag_and_attribute_names_lowercased() {
        let doc = "<Script Lang=\"ts\"></Script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes[0].tag_name, "script");
        assert_eq!(nodes[0].lang(), Some("ts"));
    }

    #[test]
    fn test_self_closing_top_level_is_located_and_empty() {
        let doc = "<div/><script>x</script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tag_name, "div");
        let span = nodes[0].location.unwrap();
        assert_eq!(span.slice(doc), Some(""));
    }

    #[test]
    fn test_unclosed_element_is_unlocated() {
        let nodes = parse_fragment("<script>\nlet a = 1;");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag_name, "script");
        assert_eq!(nodes[0].location, None);
    }

    #[test]
    fn test_comment_with_tag_inside_is_ignored() {
        let doc = "<!-- <script>hidden</script> -->\n<script>real</script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 1);
        let span = nodes[0].location.unwrap();
        assert_eq!(span.slice(doc), Some("real"));
    }

    #[test]
    fn test_stray_angles_inside_script_content() {
        let doc = "<script>if (a < b) { x = a<b; }</script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 1);
        let span = nodes[0].location.unwrap();
        assert_eq!(span.slice(doc), Some("if (a < b) { x = a<b; }"));
    }

    #[test]
    fn test_tag_like_run_before_script_keeps_offsets() {
        // The rejected run lexes as `<` plus text, so the script's content
        // offsets are unaffected
        let doc = "const x = a<b) ? 1 : 2;\n<script>code</script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag_name, "script");
        assert_eq!(nodes[0].location.unwrap().slice(doc), Some("code"));
    }

    #[test]
    fn test_quoted_attribute_value_containing_closing_angle() {
        let doc = "<script data-x=\"a>b\">code</script>";
        let nodes = parse_fragment(doc);
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].attributes.get("data-x").map(String::as_str),
            Some("a>b")
        );
        assert_eq!(nodes[0].location.unwrap().slice(doc), Some("code"));
    }

    #[test]
    fn test_different_close_tag_is_ignored() {
        // A stray close of another name does not end the open element
        let doc = "<template>a</div>b</template>";
        let nodes = parse_fragment(doc);
        let span = nodes[0].location.unwrap();
        assert_eq!(span.slice(doc), Some("a</div>b"));
    }

    #[test]
    fn test_top_level_text_is_ignored() {
        let nodes = parse_fragment("prose\n<script>x</script>\nmore prose");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag_name, "script");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_fragment("").is_empty());
    }
}
