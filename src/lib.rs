//! # termtex
//!
//! Renders LaTeX-style math expressions into multi-line Unicode text for
//! terminal display.
//!
//! ## Features
//!
//! - **Two-dimensional layout**: fractions, roots, exponents, subscripts,
//!   big operators with limits, and scaled delimiters compose on baselines
//! - **Best-effort recovery**: rendering never fails; malformed input
//!   degrades to printable output and a diagnostics side channel records
//!   what was tolerated
//! - **Markdown integration**: `$$…$$` and `$…$` spans in document text
//! - **Reentrant**: all state is per-call; renders are safe to run
//!   concurrently
//! - **WASM support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Expression rendering
//!
//! ```rust
//! use termtex::render;
//!
//! let out = render(r"\frac{1}{2}");
//! assert_eq!(out, "1\n━\n2");
//!
//! let out = render("x_i");
//! assert_eq!(out, "xᵢ");
//! ```
//!
//! ### Document rendering
//!
//! ```rust
//! use termtex::render_document;
//!
//! let out = render_document("the midpoint $x_1$ of the interval");
//! assert_eq!(out, "the midpoint x₁ of the interval");
//! ```

/// Core rendering pipeline
pub mod core;

/// Data layer - static glyph tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the core pipeline types
pub use core::ast::{Arena, Node, NodeId};
pub use core::layout::{Frame, LayoutEngine};
pub use core::parser::{Parser, MAX_DEPTH};
pub use core::spans::render_document;
pub use core::token::{tokenize, Token, TokenKind};

// Re-export data tables
pub use data::scripts;
pub use data::symbols;

// Re-export diagnostics
pub use utils::diagnostics::{Diagnostic, DiagnosticKind, RenderOutput};

/// Render a math expression to multi-line Unicode text
///
/// # Arguments
/// * `expression` - LaTeX-style math, delimiters already stripped
///
/// # Returns
/// Newline-joined rendered text; never fails
pub fn render(expression: &str) -> String {
    render_with_diagnostics(expression).content
}

/// Render a math expression, keeping the diagnostics side channel
pub fn render_with_diagnostics(expression: &str) -> RenderOutput {
    let mut diagnostics = Vec::new();
    let frame = render_frame(expression, &mut diagnostics);
    RenderOutput::with_diagnostics(frame.to_text(), diagnostics)
}

/// Render a math expression to a single row for use inside running text
///
/// Inline math is restricted to one row: the baseline row, the row adjacent
/// text aligns with. Rows of a taller result are dropped and recorded as an
/// `InlineTruncated` diagnostic.
pub fn render_inline(expression: &str) -> String {
    render_inline_with_diagnostics(expression).content
}

/// Single-row rendition, keeping the diagnostics side channel
pub fn render_inline_with_diagnostics(expression: &str) -> RenderOutput {
    let mut diagnostics = Vec::new();
    let frame = render_frame(expression, &mut diagnostics);
    if frame.height > 1 {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::InlineTruncated,
            format!("{} of {} rows dropped", frame.height - 1, frame.height),
        ));
    }
    let row = frame.lines[frame.baseline].trim_end().to_string();
    RenderOutput::with_diagnostics(row, diagnostics)
}

/// Run the full pipeline: tokenize, parse, lay out
fn render_frame(expression: &str, diagnostics: &mut Vec<Diagnostic>) -> Frame {
    let tokens = core::token::tokenize(expression, diagnostics);
    let mut arena = Arena::new();
    let root = Parser::new(&tokens, &mut arena, diagnostics).parse_expression();
    core::layout::layout(&arena, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let expr = r"\frac{-b+\sqrt{b^2-4ac}}{2a}";
        assert_eq!(render(expr), render(expr));
    }

    #[test]
    fn test_render_empty_is_one_empty_line() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_render_never_panics_on_garbage() {
        for input in ["}}}{{{", r"\frac", "^_^", "$$$", r"\left\left\left", "))(("] {
            let _ = render(input);
        }
    }

    #[test]
    fn test_diagnostics_side_channel() {
        let out = render_with_diagnostics(r"\zzz");
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnknownCommand && d.message.contains("\\zzz")));
        // The default entry point stays lenient
        assert!(render(r"\zzz").contains("\\zzz"));
    }

    #[test]
    fn test_inline_truncation_is_reported() {
        let out = render_inline_with_diagnostics(r"\frac{1}{2}");
        assert_eq!(out.content, "━");
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::InlineTruncated));
    }

    #[test]
    fn test_inline_single_row_is_untouched() {
        let out = render_inline_with_diagnostics("a+b");
        assert_eq!(out.content, "a + b");
        assert!(!out.has_diagnostics());
    }
}
