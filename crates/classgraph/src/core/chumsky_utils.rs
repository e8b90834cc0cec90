//! Shared chumsky parser utilities
//!
//! Small combinators reused by the markup reader.

use chumsky::prelude::*;

/// Parse optional whitespace including newlines.
///
/// Uses explicit character matching to avoid the "repeated combinator making no progress"
/// issue that can occur with `chumsky::text::whitespace().repeated()`.
pub fn optional_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t\n\r").repeated().ignored()
}

/// Parse required whitespace (at least one whitespace/newline character).
pub fn whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t\n\r").repeated().at_least(1).ignored()
}

/// Parse an HTML-style name (letters, digits, `-`, `_`), lowercased.
pub fn html_name<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|s: &str| s.to_ascii_lowercase())
}

/// Parse an HTML attribute value: double-quoted, single-quoted or bare.
///
/// A bare value stops before a self-closing `/>`.
pub fn attribute_value<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    let double_quoted = just('"')
        .ignore_then(none_of('"').repeated().to_slice())
        .then_ignore(just('"'));
    let single_quoted = just('\'')
        .ignore_then(none_of('\'').repeated().to_slice())
        .then_ignore(just('\''));
    let bare = none_of(" \t\n\r>\"'")
        .and_is(just("/>").not())
        .repeated()
        .at_least(1)
        .to_slice();

    double_quoted
        .or(single_quoted)
        .or(bare)
        .map(|s: &str| s.to_string())
}
