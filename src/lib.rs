//! # sfc-extract
//!
//! Extracts the content of a single named block (template, script, style,
//! or a custom block) from a single-file-component style document. Everything
//! before the block's content is replaced with line-preserving comment filler,
//! so tools that only see the extracted block (type checkers, linters) report
//! diagnostics at positions that map back to the original file.
//!
//! Given:
//!
//! ```text
//! <template>
//! <div/>
//! </template>
//! <script>
//! export default {}
//! </script>
//! ```
//!
//! extracting `script` yields four lines of comment filler followed by the
//! verbatim script content, so `export default {}` stays on line 5.

pub mod sfc;

pub use sfc::extract::{
    extract, select, select_all, ExtractOptions, FallbackPolicy, EMPTY_MODULE_FALLBACK,
};
pub use sfc::node::{ContentSpan, Element};
pub use sfc::select::LangFilter;
