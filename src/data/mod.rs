//! Data layer - static glyph tables
//!
//! This module contains all static data used for math rendering:
//! - Superscript/subscript character maps
//! - Greek letter and math symbol mappings
//! - Multi-row big-operator glyphs and scalable delimiter pieces

pub mod glyphs;
pub mod scripts;
pub mod symbols;

// Re-export commonly used items
pub use glyphs::{
    big_operator_baseline, big_operator_glyph, matching_delimiter, named_delimiter,
    scaled_delimiter,
};
pub use scripts::{
    map_subscript, map_superscript, subscript_char, superscript_char, SUBSCRIPTS, SUPERSCRIPTS,
};
pub use symbols::{lookup_symbol, GREEK_LETTERS, MATH_SYMBOLS};
