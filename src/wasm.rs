//! WASM bindings for termtex
//!
//! This module provides JavaScript-accessible functions for math rendering.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a math expression to multi-line Unicode text
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render(expression: &str) -> String {
    crate::render(expression)
}

/// Render a math expression to a single row for inline use
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render_inline(expression: &str) -> String {
    crate::render_inline(expression)
}

/// Render every `$...$` / `$$...$$` span in a markdown document
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render_document(input: &str) -> String {
    crate::core::spans::render_document(input)
}
