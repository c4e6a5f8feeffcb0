//! Command argument parsing
//!
//! Known commands get specialized node shapes; argument sub-expressions
//! recurse into the parser. Anything unrecognized is looked up in the
//! Greek/symbol tables and otherwise degrades to literal text.

use super::ast::{Node, NodeId};
use super::parser::Parser;
use super::token::TokenKind;
use crate::data::glyphs::named_delimiter;
use crate::data::symbols::lookup_symbol;
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind};

/// Dispatch a command whose name token has already been consumed
pub(crate) fn parse_command(p: &mut Parser, name: &str) -> NodeId {
    match name {
        "frac" => {
            let numerator = p.parse_group();
            let denominator = p.parse_group();
            p.arena.push(Node::Frac {
                numerator,
                denominator,
            })
        }
        "sqrt" => {
            let index = p.parse_optional_index();
            let radicand = p.parse_group();
            p.arena.push(Node::Sqrt { radicand, index })
        }
        "sum" | "prod" | "int" | "bigcup" | "bigcap" | "lim" => parse_big_operator(p, name),
        "left" => parse_left_right(p),
        "right" => {
            // Stray \right with no \left: drop it and its delimiter
            p.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnbalancedDelimiter,
                "\\right without \\left",
            ));
            capture_delimiter(p);
            p.arena.push(Node::Empty)
        }
        "text" | "mathrm" | "textit" | "textbf" => parse_text_group(p),
        _ => {
            if let Some(glyph) = lookup_symbol(name) {
                p.arena.push(Node::Symbol { glyph })
            } else {
                p.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnknownCommand,
                    format!("\\{}", name),
                ));
                p.arena.push(Node::Text {
                    text: format!("\\{}", name),
                })
            }
        }
    }
}

/// `\sum`-family: optional `_{lower}` and `^{upper}` in either order
///
/// The operand is not captured here; it attaches afterward through ordinary
/// implicit multiplication in the enclosing term.
fn parse_big_operator(p: &mut Parser, name: &str) -> NodeId {
    let mut lower = None;
    let mut upper = None;
    loop {
        if lower.is_none() && p.eat(TokenKind::Under) {
            lower = Some(p.parse_group());
        } else if upper.is_none() && p.eat(TokenKind::Caret) {
            upper = Some(p.parse_group());
        } else {
            break;
        }
    }
    p.arena.push(Node::BigOp {
        name: name.to_string(),
        lower,
        upper,
    })
}

/// `\left X ... \right Y`: one delimiter glyph, the interior, and a discarded
/// `\right`; the pair is not verified to balance
fn parse_left_right(p: &mut Parser) -> NodeId {
    let delimiter = capture_delimiter(p).unwrap_or_else(|| ".".to_string());
    let inner = p.parse_expr();
    if p.peek().is_cmd("right") {
        p.advance();
        capture_delimiter(p);
    } else {
        p.diagnostics.push(Diagnostic::new(
            DiagnosticKind::UnbalancedDelimiter,
            "missing \\right",
        ));
    }
    p.arena.push(Node::Paren { inner, delimiter })
}

/// Consume one token as a delimiter glyph, if the next token can be one
fn capture_delimiter(p: &mut Parser) -> Option<String> {
    let tok = p.peek();
    match tok.kind {
        TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::LBrack
        | TokenKind::RBrack
        | TokenKind::LBrace
        | TokenKind::RBrace => {
            let glyph = p.advance().value.clone();
            Some(glyph)
        }
        // The invisible delimiter `.` arrives as a Num token
        TokenKind::Num if tok.value == "." => {
            p.advance();
            Some(".".to_string())
        }
        TokenKind::Cmd => {
            let glyph = named_delimiter(&tok.value)?;
            p.advance();
            Some(glyph.to_string())
        }
        _ => None,
    }
}

/// `\text`-family: flatten the brace group to one literal text node,
/// discarding nested structure
fn parse_text_group(p: &mut Parser) -> NodeId {
    if !p.eat(TokenKind::LBrace) {
        return p.arena.push(Node::Text {
            text: String::new(),
        });
    }

    let mut depth = 1usize;
    let mut text = String::new();
    loop {
        match p.peek().kind {
            TokenKind::Eof => {
                p.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnbalancedDelimiter,
                    "missing '}'",
                ));
                break;
            }
            TokenKind::LBrace => {
                depth += 1;
                p.advance();
            }
            TokenKind::RBrace => {
                depth -= 1;
                p.advance();
                if depth == 0 {
                    break;
                }
            }
            _ => {
                let value = p.advance().value.clone();
                let word_boundary = text.chars().next_back().is_some_and(|c| c.is_alphanumeric())
                    && value.chars().next().is_some_and(|c| c.is_alphanumeric());
                if word_boundary {
                    text.push(' ');
                }
                text.push_str(&value);
            }
        }
    }
    p.arena.push(Node::Text { text })
}
