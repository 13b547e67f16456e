//! Position-preserving padding of extracted block content
//!
//! The prefix of the document (everything up to and including the block's
//! opening tag) is replaced with line-comment filler carrying exactly the
//! same number of line breaks, so the content keeps its original line
//! numbers. When enough filler is available, a lint-suppression pair
//! brackets the filler region so the filler itself never trips downstream
//! linters. Column alignment on the content's first line is not preserved;
//! line numbers are, on every branch.

use crate::sfc::node::Element;

/// Minimal one-line filler unit
const FILLER_LINE: &str = "//\n";

/// Suppression pair bracketing the filler region
const LINT_DISABLE: &str = "// tslint:disable";
const LINT_ENABLE: &str = "// tslint:enable";

/// Filler budget the promoted directive pair consumes. The pair is only
/// emitted when more filler than this remains, i.e. when there is enough
/// room to contain both markers.
const DIRECTIVE_BUDGET: usize = LINT_DISABLE.len() + 1 + LINT_ENABLE.len();

/// Replace everything before the element's content with line-preserving
/// filler and append the content verbatim.
///
/// Returns the empty string for a missing, unlocated, or malformed-span
/// element; "nothing to extract" is never an error.
pub fn pad_content(node: Option<&Element>, input: &str) -> String {
    let Some(element) = node else {
        return String::new();
    };
    let Some(span) = element.location else {
        return String::new();
    };
    let (Some(content), Some(prefix)) = (span.slice(input), input.get(..span.start_tag_end))
    else {
        return String::new();
    };

    let mut lines = prefix.matches('\n').count() + 1;
    // The filler pool: one character of budget per prefix character
    let mut budget = prefix.chars().count();
    let mut marker = String::new();

    // Reserve one line for the suppression marker when the content starts
    // below the first two lines
    if lines > 2 {
        marker.push_str(FILLER_LINE);
        lines -= 1;
        budget = budget.saturating_sub(FILLER_LINE.len());
    }

    let mut filler = String::new();
    for _ in 1..lines {
        filler.push_str(FILLER_LINE);
        budget = budget.saturating_sub(FILLER_LINE.len());
    }

    // Promote the marker to the full directive pair when there is room for
    // both markers; otherwise the remaining pool stays plain comment filler
    let remainder = if !marker.is_empty() && budget > DIRECTIVE_BUDGET {
        marker.clear();
        marker.push_str(LINT_DISABLE);
        marker.push('\n');
        let blanks = budget.saturating_sub(DIRECTIVE_BUDGET);
        format!("{}   {}", " ".repeat(blanks), LINT_ENABLE)
    } else {
        "/".repeat(budget)
    };

    let mut out =
        String::with_capacity(marker.len() + filler.len() + remainder.len() + content.len());
    out.push_str(&marker);
    out.push_str(&filler);
    out.push_str(&remainder);
    out.push_str(content);
    out
}
