//! Tokenizer for math expressions
//!
//! Scans the expression string into a flat token stream. Every position is
//! classified as whitespace (skipped), a single-character structural token, a
//! `\`-prefixed command name, a digit/`.` run, or a letter run. Anything else
//! is dropped and recorded in the diagnostics side channel; tokenizing never
//! fails. The stream always ends with one `Eof` token.

use crate::utils::diagnostics::{Diagnostic, DiagnosticKind};

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal digit/`.` run
    Num,
    /// Maximal ASCII letter run
    Var,
    /// `\`-prefixed command name, stored without the backslash
    Cmd,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Caret,
    Under,
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Comma,
    Eof,
}

/// One token: classification plus the literal it was scanned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// True for a `Cmd` token with the given name
    pub fn is_cmd(&self, name: &str) -> bool {
        self.kind == TokenKind::Cmd && self.value == name
    }
}

fn single_char_kind(c: char) -> Option<TokenKind> {
    match c {
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '[' => Some(TokenKind::LBrack),
        ']' => Some(TokenKind::RBrack),
        '^' => Some(TokenKind::Caret),
        '_' => Some(TokenKind::Under),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        '=' => Some(TokenKind::Eq),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

/// Tokenize an expression string, recording dropped characters
pub fn tokenize(input: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        if let Some(kind) = single_char_kind(c) {
            tokens.push(Token::new(kind, c.to_string()));
            pos += 1;
            continue;
        }

        if c == '\\' {
            pos += 1;
            let start = pos;
            while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
                pos += 1;
            }
            if pos > start {
                let name: String = chars[start..pos].iter().collect();
                tokens.push(Token::new(TokenKind::Cmd, name));
            } else {
                // Lone backslash; whatever follows gets classified on its own
                diagnostics.push(Diagnostic::new(DiagnosticKind::DroppedChar, "stray '\\'"));
            }
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = pos;
            while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                pos += 1;
            }
            let literal: String = chars[start..pos].iter().collect();
            tokens.push(Token::new(TokenKind::Num, literal));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = pos;
            while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
                pos += 1;
            }
            let literal: String = chars[start..pos].iter().collect();
            tokens.push(Token::new(TokenKind::Var, literal));
            continue;
        }

        diagnostics.push(Diagnostic::new(
            DiagnosticKind::DroppedChar,
            format!("'{}'", c),
        ));
        pos += 1;
    }

    tokens.push(Token::new(TokenKind::Eof, ""));
    tokens
}
