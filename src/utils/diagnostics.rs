//! Rendering diagnostics
//!
//! The renderer never fails: malformed input is tolerated by silent
//! substitution. This module is the side channel that records what was
//! tolerated, for callers that want stricter or testable behavior. The
//! default `render` entry point discards it.

use std::fmt;

/// What kind of input problem was tolerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A command not found in any glyph table, rendered as literal text
    UnknownCommand,
    /// A character the tokenizer could not classify, dropped
    DroppedChar,
    /// A missing closing `}`/`)`/`]` or an unpaired `\left`/`\right`
    UnbalancedDelimiter,
    /// Nesting deeper than the parser's recursion bound, truncated with `…`
    TooDeep,
    /// An inline span taller than one row, cut down to its baseline row
    InlineTruncated,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownCommand => write!(f, "unknown command"),
            DiagnosticKind::DroppedChar => write!(f, "dropped character"),
            DiagnosticKind::UnbalancedDelimiter => write!(f, "unbalanced delimiter"),
            DiagnosticKind::TooDeep => write!(f, "expression too deep"),
            DiagnosticKind::InlineTruncated => write!(f, "inline math truncated"),
        }
    }
}

/// A single tolerated problem
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}: {}", self.kind, self.message)
    }
}

/// Rendered output with its diagnostics
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The rendered text, newline-joined
    pub content: String,
    /// Everything that was silently tolerated while producing it
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(content: String, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            content,
            diagnostics,
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
