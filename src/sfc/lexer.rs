//! Lexer for composite markup documents
//!
//! Tokenizes raw markup into tags, comments, and text runs. The tokenization
//! is handled by logos; the spans reported by the lexer are the byte offsets
//! the tree builder turns into content locations.
//!
//! The token set is deliberately small: the tree builder only pairs top-level
//! open/close tags, so anything that is not a tag or a comment collapses into
//! `Text`. Tag matching is quote-aware: a `>` inside a quoted attribute value
//! does not end the tag. A lone `<` (as in `a < b` inside a script block) is
//! its own token, and a tag-like run the tag rules reject (as in `a<b) ...`,
//! or a tag with unbalanced quoting) is re-emitted as `<` plus plain text, so
//! stray angles never desynchronize the scan.

use logos::Logos;

/// All tokens produced when scanning a markup document
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `<!-- ... -->`; matched whole so tag-like text inside is skipped
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->")]
    Comment,

    /// `</name ...>`
    #[regex(r#"</[A-Za-z]([^<>"']|"[^"]*"|'[^']*')*>"#)]
    CloseTag,

    /// `<name ...>`; self-closing when the raw text ends with `/>`
    #[regex(r#"<[A-Za-z]([^<>"']|"[^"]*"|'[^']*')*>"#)]
    OpenTag,

    /// A `<` that does not begin a tag or comment
    #[token("<")]
    LessThan,

    /// A run of anything that cannot begin a tag
    #[regex(r"[^<]+")]
    Text,
}

impl Token {
    /// Check if this token is a tag (open or close)
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::OpenTag | Token::CloseTag)
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
///
/// A run the tag rules cannot accept (a `<` that looks like it starts a tag
/// but never reaches a valid `>`) comes back from logos as an error; it is
/// re-emitted as `LessThan` for the angle plus `Text` for the remainder, so
/// every byte of the source stays covered by a token.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(_) => {
                if source[span.clone()].starts_with('<') {
                    tokens.push((Token::LessThan, span.start..span.start + 1));
                    if span.end > span.start + 1 {
                        tokens.push((Token::Text, span.start + 1..span.end));
                    }
                } else {
                    tokens.push((Token::Text, span));
                }
            }
        }
    }

    tokens
}
