//! Core rendering pipeline
//!
//! The pipeline runs in stages, each owning its piece of per-render state:
//! - `token`: expression string → flat token stream
//! - `ast` + `parser` + `commands`: token stream → node arena
//! - `layout`: node arena → frames → rendered lines
//! - `spans`: document text → rendered math spans

pub mod ast;
pub mod commands;
pub mod layout;
pub mod parser;
pub mod spans;
pub mod token;

// Re-export main types for convenience
pub use ast::{Arena, Node, NodeId};
pub use layout::{layout, Frame, LayoutEngine};
pub use parser::{Parser, MAX_DEPTH};
pub use spans::render_document;
pub use token::{tokenize, Token, TokenKind};
