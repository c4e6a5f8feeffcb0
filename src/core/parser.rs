//! Recursive-descent expression parser
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr   → term ((+|-|=) term)*
//! term   → factor ((*|/|implicit) factor)*
//! factor → base ((^|_) base)*
//! base   → NUM | VAR | command | (expr) | {expr} | -factor
//! ```
//!
//! `=` is an ordinary left-associative binary operator, so `a=b=c` parses as
//! `(a=b)=c`. The right operand of `^`/`_` is a single `base`, so `x^2^3`
//! parses as `(x^2)^3`. Implicit multiplication joins adjacent factors after
//! every explicit operator match fails, decided by whether the next token can
//! start a factor at all.
//!
//! Recovery: expected closing delimiters are consumed opportunistically and
//! parsing proceeds as if present when they are not. Unbalanced input reshapes
//! the AST but never errors; every tolerated problem lands in the diagnostics
//! side channel.

use super::ast::{Arena, Node, NodeId};
use super::commands;
use super::token::{Token, TokenKind};
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind};

/// Recursion bound for `expr` and `base`, the two choke points every nested
/// construct passes through
pub const MAX_DEPTH: usize = 80;

pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    pub(crate) arena: &'a mut Arena,
    pub(crate) diagnostics: &'a mut Vec<Diagnostic>,
    depth: usize,
    depth_reported: bool,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: &'a [Token],
        arena: &'a mut Arena,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            arena,
            diagnostics,
            depth: 0,
            depth_reported: false,
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        // The stream is Eof-terminated, so the last token absorbs overruns
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    /// Consume the next token if it has the given kind
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Opportunistically consume an expected closing delimiter
    pub(crate) fn eat_closer(&mut self, kind: TokenKind, expected: &str) {
        if !self.eat(kind) {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnbalancedDelimiter,
                format!("missing '{}'", expected),
            ));
        }
    }

    /// Substitute for a subtree the depth guard refused to parse
    fn truncated(&mut self) -> NodeId {
        if !self.depth_reported {
            self.depth_reported = true;
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::TooDeep,
                format!("nesting deeper than {} levels, truncated", MAX_DEPTH),
            ));
        }
        self.arena.push(Node::Text {
            text: "…".to_string(),
        })
    }

    /// Top-level entry: parse expressions until Eof
    ///
    /// Leftover expressions after the first are joined by implicit
    /// multiplication; stray tokens no rule consumes (unmatched closers) are
    /// skipped so trailing garbage never aborts a render.
    pub fn parse_expression(&mut self) -> NodeId {
        let mut root = self.parse_expr();
        loop {
            if self.peek().kind == TokenKind::Eof {
                break;
            }
            if self.can_start_factor() {
                let right = self.parse_expr();
                root = self.arena.push(Node::Mul { left: root, right });
            } else {
                let literal = self.advance().value.clone();
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnbalancedDelimiter,
                    format!("unmatched '{}'", literal),
                ));
            }
        }
        root
    }

    pub(crate) fn parse_expr(&mut self) -> NodeId {
        if self.depth >= MAX_DEPTH {
            return self.truncated();
        }
        self.depth += 1;

        let mut left = self.parse_term();
        loop {
            match self.peek().kind {
                TokenKind::Plus => {
                    self.advance();
                    let right = self.parse_term();
                    left = self.arena.push(Node::Add { left, right });
                }
                TokenKind::Minus => {
                    self.advance();
                    let right = self.parse_term();
                    left = self.arena.push(Node::Sub { left, right });
                }
                TokenKind::Eq => {
                    self.advance();
                    let right = self.parse_term();
                    left = self.arena.push(Node::Eq { left, right });
                }
                _ => break,
            }
        }

        self.depth -= 1;
        left
    }

    fn parse_term(&mut self) -> NodeId {
        let mut left = self.parse_factor();
        loop {
            match self.peek().kind {
                TokenKind::Star => {
                    self.advance();
                    let right = self.parse_factor();
                    left = self.arena.push(Node::Mul { left, right });
                }
                TokenKind::Slash => {
                    self.advance();
                    let right = self.parse_factor();
                    left = self.arena.push(Node::Div { left, right });
                }
                // Implicit multiplication: adjacent factors with no operator
                _ if self.can_start_factor() => {
                    let right = self.parse_factor();
                    left = self.arena.push(Node::Mul { left, right });
                }
                _ => break,
            }
        }
        left
    }

    fn parse_factor(&mut self) -> NodeId {
        let mut node = self.parse_base();
        loop {
            match self.peek().kind {
                TokenKind::Caret => {
                    self.advance();
                    let exponent = self.parse_base();
                    node = self.arena.push(Node::Pow {
                        base: node,
                        exponent,
                    });
                }
                TokenKind::Under => {
                    self.advance();
                    let subscript = self.parse_base();
                    node = self.arena.push(Node::Subscript {
                        base: node,
                        subscript,
                    });
                }
                _ => break,
            }
        }
        node
    }

    pub(crate) fn parse_base(&mut self) -> NodeId {
        if self.depth >= MAX_DEPTH {
            // Consume one token so callers always make progress
            if self.peek().kind != TokenKind::Eof {
                self.advance();
            }
            return self.truncated();
        }
        self.depth += 1;

        let node = match self.peek().kind {
            TokenKind::Num => {
                let text = self.advance().value.clone();
                self.arena.push(Node::Num { text })
            }
            TokenKind::Var => {
                let name = self.advance().value.clone();
                self.arena.push(Node::Var { name })
            }
            TokenKind::Comma => {
                self.advance();
                self.arena.push(Node::Text {
                    text: ",".to_string(),
                })
            }
            TokenKind::Cmd => {
                let name = self.advance().value.clone();
                commands::parse_command(self, &name)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr();
                self.eat_closer(TokenKind::RParen, ")");
                self.arena.push(Node::Paren {
                    inner,
                    delimiter: "(".to_string(),
                })
            }
            // Braces group transparently; they leave no node behind
            TokenKind::LBrace => {
                self.advance();
                let inner = self.parse_expr();
                self.eat_closer(TokenKind::RBrace, "}");
                inner
            }
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_factor();
                self.arena.push(Node::Neg { operand })
            }
            // Missing operand; nothing is consumed
            _ => self.arena.push(Node::Empty),
        };

        self.depth -= 1;
        node
    }

    /// Lookahead for implicit multiplication: can the next token start a factor?
    pub(crate) fn can_start_factor(&self) -> bool {
        let tok = self.peek();
        match tok.kind {
            TokenKind::Num
            | TokenKind::Var
            | TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::Comma => true,
            // `\right` terminates the enclosing `\left` group instead
            TokenKind::Cmd => tok.value != "right",
            _ => false,
        }
    }

    /// A required brace group; a bare base is accepted so `\frac 1 2` works
    pub(crate) fn parse_group(&mut self) -> NodeId {
        if self.eat(TokenKind::LBrace) {
            let inner = self.parse_expr();
            self.eat_closer(TokenKind::RBrace, "}");
            inner
        } else {
            self.parse_base()
        }
    }

    /// An optional `[...]` argument, as in `\sqrt[3]{x}`
    pub(crate) fn parse_optional_index(&mut self) -> Option<NodeId> {
        if self.eat(TokenKind::LBrack) {
            let index = self.parse_expr();
            self.eat_closer(TokenKind::RBrack, "]");
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::tokenize;

    fn parse(input: &str) -> (Arena, NodeId, Vec<Diagnostic>) {
        let mut diags = Vec::new();
        let tokens = tokenize(input, &mut diags);
        let mut arena = Arena::new();
        let root = Parser::new(&tokens, &mut arena, &mut diags).parse_expression();
        (arena, root, diags)
    }

    #[test]
    fn test_addition_is_left_associative() {
        let (arena, root, _) = parse("a+b+c");
        // ((a+b)+c)
        match arena.get(root) {
            Node::Add { left, .. } => match arena.get(*left) {
                Node::Add { .. } => {}
                other => panic!("expected nested Add, got {:?}", other),
            },
            other => panic!("expected Add at root, got {:?}", other),
        }
    }

    #[test]
    fn test_equals_chains_left() {
        let (arena, root, _) = parse("a=b=c");
        match arena.get(root) {
            Node::Eq { left, .. } => {
                assert!(matches!(arena.get(*left), Node::Eq { .. }));
            }
            other => panic!("expected Eq at root, got {:?}", other),
        }
    }

    #[test]
    fn test_implicit_multiplication() {
        let (arena, root, _) = parse("2x");
        assert!(matches!(arena.get(root), Node::Mul { .. }));
    }

    #[test]
    fn test_power_binds_tighter_than_mul() {
        let (arena, root, _) = parse("2x^2");
        // Mul(2, Pow(x, 2))
        match arena.get(root) {
            Node::Mul { right, .. } => {
                assert!(matches!(arena.get(*right), Node::Pow { .. }));
            }
            other => panic!("expected Mul at root, got {:?}", other),
        }
    }

    #[test]
    fn test_chained_power_is_left_associative() {
        let (arena, root, _) = parse("x^2^3");
        match arena.get(root) {
            Node::Pow { base, .. } => {
                assert!(matches!(arena.get(*base), Node::Pow { .. }));
            }
            other => panic!("expected Pow at root, got {:?}", other),
        }
    }

    #[test]
    fn test_braces_group_transparently() {
        let (arena, root, _) = parse("{a+b}");
        assert!(matches!(arena.get(root), Node::Add { .. }));
    }

    #[test]
    fn test_parens_leave_a_node() {
        let (arena, root, _) = parse("(a+b)");
        assert!(matches!(arena.get(root), Node::Paren { .. }));
    }

    #[test]
    fn test_unary_minus() {
        let (arena, root, _) = parse("-x");
        assert!(matches!(arena.get(root), Node::Neg { .. }));
    }

    #[test]
    fn test_missing_closer_recovers() {
        let (arena, root, diags) = parse("{a+b");
        assert!(matches!(arena.get(root), Node::Add { .. }));
        assert!(diags
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnbalancedDelimiter));
    }

    #[test]
    fn test_stray_closer_skipped() {
        let (_, _, diags) = parse("a ) b");
        assert!(diags
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnbalancedDelimiter));
    }

    #[test]
    fn test_empty_input_yields_empty_node() {
        let (arena, root, _) = parse("");
        assert!(matches!(arena.get(root), Node::Empty));
    }

    #[test]
    fn test_depth_guard_truncates() {
        let pathological = "{".repeat(500);
        let (_, _, diags) = parse(&pathological);
        assert!(diags.iter().any(|d| d.kind == DiagnosticKind::TooDeep));
    }
}
