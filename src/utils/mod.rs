//! Utility modules

pub mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticKind, RenderOutput};
