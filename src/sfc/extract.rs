//! Entry point: parse, select, pad, with a pluggable fallback policy
//!
//! When extraction comes up empty for a tag the fallback policy knows, the
//! policy's text is returned instead. The default policy covers only
//! `script`: module-aware tooling treats a file without exports as a
//! non-module, so a missing script block becomes a minimal empty module.
//! Callers targeting other ecosystems install their own policy or disable
//! the fallback entirely.

use std::collections::HashMap;

use crate::sfc::node::Element;
use crate::sfc::pad::pad_content;
use crate::sfc::select::{select_node, LangFilter};
use crate::sfc::tree::parse_fragment;

/// Fallback emitted for a missing `script` block. Contains no markup tags,
/// so feeding it back through the parser finds nothing to extract.
pub const EMPTY_MODULE_FALLBACK: &str =
    "// tslint:disable\nimport Vue from 'vue'\nexport default Vue\n";

/// Maps tag names to the text returned when extraction comes up empty
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    entries: HashMap<String, String>,
}

impl FallbackPolicy {
    /// A policy with no fallbacks at all
    pub fn none() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, tag: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(tag.into(), text.into());
        self
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::none().with("script", EMPTY_MODULE_FALLBACK)
    }
}

/// Options for [`extract`]
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Constraint on the block's `lang` attribute
    pub lang: Option<LangFilter>,
    /// Whether an empty result may be replaced by the fallback policy
    pub empty_module_fallback: bool,
    pub fallbacks: FallbackPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            lang: None,
            empty_module_fallback: true,
            fallbacks: FallbackPolicy::default(),
        }
    }
}

/// Extract a block's content with line-preserving padding.
///
/// Parses the document's top-level elements, selects the first one matching
/// `tag` (and the options' lang filter), and pads everything before its
/// content. An absent or unlocated block yields the empty string, or the
/// policy's fallback text when one is configured for `tag`.
pub fn extract(input: &str, tag: &str, options: &ExtractOptions) -> String {
    let nodes = parse_fragment(input);
    let node = select_node(&nodes, tag, options.lang.as_ref());
    let padded = pad_content(node, input);

    if padded.is_empty() && options.empty_module_fallback {
        if let Some(text) = options.fallbacks.get(tag) {
            return text.to_string();
        }
    }

    padded
}

/// All top-level elements of the document, for callers doing their own
/// selection
pub fn select_all(input: &str) -> Vec<Element> {
    parse_fragment(input)
}

/// The first top-level element matching the tag and optional lang filter
pub fn select(input: &str, tag: &str, lang: Option<&LangFilter>) -> Option<Element> {
    let nodes = parse_fragment(input);
    select_node(&nodes, tag, lang).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_yields_empty() {
        assert_eq!(extract("<template>x</template>", "style", &ExtractOptions::default()), "");
    }

    #[test]
    fn test_missing_script_yields_fallback() {
        let result = extract("<template>x</template>", "script", &ExtractOptions::default());
        assert_eq!(result, EMPTY_MODULE_FALLBACK);
    }

    #[test]
    fn test_fallback_disabled() {
        let options = ExtractOptions {
            empty_module_fallback: false,
            ..ExtractOptions::default()
        };
        assert_eq!(extract("<template>x</template>", "script", &options), "");
    }

    #[test]
    fn test_custom_fallback_policy() {
        let options = ExtractOptions {
            fallbacks: FallbackPolicy::none().with("style", "/* none */\n"),
            ..ExtractOptions::default()
        };
        assert_eq!(extract("<template>x</template>", "style", &options), "/* none */\n");
        // The default script fallback is gone under the custom policy
        assert_eq!(extract("<template>x</template>", "script", &options), "");
    }

    #[test]
    fn test_unclosed_script_falls_back() {
        let result = extract("<script>\nlet a = 1;", "script", &ExtractOptions::default());
        assert_eq!(result, EMPTY_MODULE_FALLBACK);
    }

    #[test]
    fn test_lang_filter_threaded_through() {
        let doc = "<script>plain</script>\n<script lang=\"ts\">typed</script>";
        let options = ExtractOptions {
            lang: Some(LangFilter::Exact("ts".to_string())),
            ..ExtractOptions::default()
        };
        let result = extract(doc, "script", &options);
        assert!(result.ends_with("typed"));
    }

    #[test]
    fn test_select_returns_owned_element() {
        let node = select("<script lang=\"ts\">x</script>", "script", None).unwrap();
        assert_eq!(node.tag_name, "script");
        assert_eq!(node.lang(), Some("ts"));
    }

    #[test]
    fn test_select_all_order() {
        let nodes = select_all("<template>a</template><script>b</script>");
        let names: Vec<&str> = nodes.iter().map(|n| n.tag_name.as_str()).collect();
        assert_eq!(names, vec!["template", "script"]);
    }
}
