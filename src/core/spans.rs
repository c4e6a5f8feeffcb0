//! Math span scanning for markdown text
//!
//! Finds `$$…$$` display spans and `$…$` inline spans in document text and
//! substitutes rendered output, in discovery order. Display spans reproduce
//! every output row; inline spans are restricted to a single row (see
//! `render_inline`). Text outside spans is untouched and no coloring is
//! applied.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref DISPLAY_SPAN: Regex = Regex::new(r"(?s)\$\$(.+?)\$\$").unwrap();
    static ref INLINE_SPAN: Regex = Regex::new(r"\$([^$\n]+?)\$").unwrap();
}

/// Render every math span in a document, leaving other text untouched
pub fn render_document(input: &str) -> String {
    let displayed = DISPLAY_SPAN.replace_all(input, |caps: &Captures| {
        // A display span may wrap across lines; join them into one expression
        let expression = caps[1]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        crate::render(&expression)
    });

    INLINE_SPAN
        .replace_all(&displayed, |caps: &Captures| crate::render_inline(&caps[1]))
        .into_owned()
}
