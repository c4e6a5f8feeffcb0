//! Two-dimensional box layout
//!
//! Walks the AST bottom-up, computing one frame per node: width and height in
//! character cells, the baseline row other frames align to, and the rendered
//! lines. Every line holds exactly `width` chars. Layout never fails: every
//! node type has a defined frame even for degenerate children, so malformed
//! input yields odd but always-printable output.

use fxhash::FxHashMap;

use super::ast::{Arena, Node, NodeId};
use crate::data::glyphs::{
    big_operator_baseline, big_operator_glyph, matching_delimiter, scaled_delimiter,
};
use crate::data::scripts::{map_subscript, superscript_char};

/// The rendered box of one AST node
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub baseline: usize,
    pub lines: Vec<String>,
}

impl Frame {
    /// Single-row frame holding literal text
    pub fn from_text(text: &str) -> Self {
        Self {
            width: text.chars().count(),
            height: 1,
            baseline: 0,
            lines: vec![text.to_string()],
        }
    }

    /// Zero-width frame standing in for an absent operand
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 1,
            baseline: 0,
            lines: vec![String::new()],
        }
    }

    /// Newline-joined rendered text
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Pad `text` to `width`, splitting the slack evenly (extra column on the right)
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", spaces(left), text, spaces(right))
}

/// A child's row in composed coordinates, blank outside the child's extent
fn child_row(frame: &Frame, row: usize, baseline: usize) -> String {
    let offset = baseline - frame.baseline;
    if row >= offset && row - offset < frame.height {
        frame.lines[row - offset].clone()
    } else {
        spaces(frame.width)
    }
}

/// Per-render layout state: the node arena and the frame cache
pub struct LayoutEngine<'a> {
    arena: &'a Arena,
    frames: FxHashMap<NodeId, Frame>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            frames: FxHashMap::default(),
        }
    }

    /// Frame for a node, computed once per id per render
    pub fn layout_node(&mut self, id: NodeId) -> Frame {
        if let Some(frame) = self.frames.get(&id) {
            return frame.clone();
        }
        let frame = self.compute(id);
        self.frames.insert(id, frame.clone());
        frame
    }

    fn layout_optional(&mut self, id: Option<NodeId>) -> Option<Frame> {
        id.map(|id| self.layout_node(id))
    }

    fn compute(&mut self, id: NodeId) -> Frame {
        match self.arena.get(id).clone() {
            Node::Num { text } => Frame::from_text(&text),
            Node::Var { name } => Frame::from_text(&name),
            Node::Text { text } => Frame::from_text(&text),
            Node::Symbol { glyph } => Frame::from_text(glyph),
            Node::Empty => Frame::empty(),
            Node::Add { left, right } => self.binary(left, right, '+'),
            Node::Sub { left, right } => self.binary(left, right, '-'),
            Node::Eq { left, right } => self.binary(left, right, '='),
            // Implicit multiplication shows no operator glyph
            Node::Mul { left, right } => self.binary(left, right, ' '),
            Node::Div { left, right } => self.binary(left, right, '÷'),
            Node::Neg { operand } => self.negate(operand),
            Node::Pow { base, exponent } => self.power(base, exponent),
            Node::Subscript { base, subscript } => self.subscript(base, subscript),
            Node::Frac {
                numerator,
                denominator,
            } => self.fraction(numerator, denominator),
            // The root index is parsed but not rendered
            Node::Sqrt { radicand, .. } => self.root(radicand),
            Node::BigOp { name, lower, upper } => self.big_operator(&name, lower, upper),
            Node::Paren { inner, delimiter } => self.parenthesize(inner, &delimiter),
        }
    }

    /// Horizontal concat: baselines coincide, operator sits on the baseline row
    fn binary(&mut self, left: NodeId, right: NodeId, op: char) -> Frame {
        let left = self.layout_node(left);
        let right = self.layout_node(right);

        let baseline = left.baseline.max(right.baseline);
        let below = (left.height - left.baseline).max(right.height - right.baseline);
        let height = baseline + below;
        let width = left.width + 3 + right.width;

        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            let mut line = child_row(&left, row, baseline);
            if row == baseline {
                line.push(' ');
                line.push(op);
                line.push(' ');
            } else {
                line.push_str("   ");
            }
            line.push_str(&child_row(&right, row, baseline));
            lines.push(line);
        }

        Frame {
            width,
            height,
            baseline,
            lines,
        }
    }

    /// One extra column, `-` on the baseline row
    fn negate(&mut self, operand: NodeId) -> Frame {
        let inner = self.layout_node(operand);
        let lines = inner
            .lines
            .iter()
            .enumerate()
            .map(|(row, line)| {
                if row == inner.baseline {
                    format!("-{}", line)
                } else {
                    format!(" {}", line)
                }
            })
            .collect();
        Frame {
            width: inner.width + 1,
            height: inner.height,
            baseline: inner.baseline,
            lines,
        }
    }

    /// Superscript glyph top-right when the exponent maps to a single
    /// superscript char; otherwise the exponent stacks fully above the base
    fn power(&mut self, base: NodeId, exponent: NodeId) -> Frame {
        let base = self.layout_node(base);
        let exp = self.layout_node(exponent);

        if exp.height == 1 && exp.width == 1 {
            let ch = exp.lines[0].chars().next().unwrap_or(' ');
            if let Some(sup) = superscript_char(ch) {
                let mut lines = vec![format!("{}{}", spaces(base.width), sup)];
                for line in &base.lines {
                    lines.push(format!("{} ", line));
                }
                return Frame {
                    width: base.width + 1,
                    height: base.height + 1,
                    baseline: base.baseline + 1,
                    lines,
                };
            }
        }

        // Stacked: exponent above and to the right, zero row overlap
        let width = base.width + exp.width;
        let mut lines = Vec::with_capacity(base.height + exp.height);
        for line in &exp.lines {
            lines.push(format!("{}{}", spaces(base.width), line));
        }
        for line in &base.lines {
            lines.push(format!("{}{}", line, spaces(exp.width)));
        }
        Frame {
            width,
            height: base.height + exp.height,
            baseline: base.baseline + exp.height,
            lines,
        }
    }

    /// Unicode subscript fused onto the bottom row when fully mappable;
    /// otherwise stacked below-right sharing the base's bottom row
    fn subscript(&mut self, base: NodeId, subscript: NodeId) -> Frame {
        let base = self.layout_node(base);
        let sub = self.layout_node(subscript);

        if sub.height == 1 {
            if let Some(mapped) = map_subscript(&sub.lines[0]) {
                let bottom = base.height - 1;
                let lines = base
                    .lines
                    .iter()
                    .enumerate()
                    .map(|(row, line)| {
                        if row == bottom {
                            format!("{}{}", line, mapped)
                        } else {
                            format!("{}{}", line, spaces(sub.width))
                        }
                    })
                    .collect();
                return Frame {
                    width: base.width + sub.width,
                    height: base.height,
                    baseline: base.baseline,
                    lines,
                };
            }
        }

        // Stacked: the subscript's top row shares the base's bottom row
        let width = base.width + sub.width;
        let height = base.height + sub.height - 1;
        let mut lines = Vec::with_capacity(height);
        for (row, line) in base.lines.iter().enumerate() {
            if row == base.height - 1 {
                lines.push(format!("{}{}", line, sub.lines[0]));
            } else {
                lines.push(format!("{}{}", line, spaces(sub.width)));
            }
        }
        for line in sub.lines.iter().skip(1) {
            lines.push(format!("{}{}", spaces(base.width), line));
        }
        Frame {
            width,
            height,
            baseline: base.baseline,
            lines,
        }
    }

    /// Numerator over a `━` bar over the denominator, both centered
    fn fraction(&mut self, numerator: NodeId, denominator: NodeId) -> Frame {
        let num = self.layout_node(numerator);
        let den = self.layout_node(denominator);

        let width = num.width.max(den.width);
        let mut lines = Vec::with_capacity(num.height + 1 + den.height);
        for line in &num.lines {
            lines.push(center(line, width));
        }
        lines.push("━".repeat(width));
        for line in &den.lines {
            lines.push(center(line, width));
        }

        Frame {
            width,
            height: num.height + 1 + den.height,
            baseline: num.height,
            lines,
        }
    }

    /// `╲╱ ` prefix on the bottom radicand row, `▁` vinculum above
    fn root(&mut self, radicand: NodeId) -> Frame {
        let rad = self.layout_node(radicand);

        let width = rad.width + 3;
        let mut lines = Vec::with_capacity(rad.height + 1);
        lines.push(format!("  {}", "▁".repeat(rad.width + 1)));
        for (row, line) in rad.lines.iter().enumerate() {
            if row == rad.height - 1 {
                lines.push(format!("╲╱ {}", line));
            } else {
                lines.push(format!("   {}", line));
            }
        }

        Frame {
            width,
            height: rad.height + 1,
            baseline: rad.baseline + 1,
            lines,
        }
    }

    /// Multi-row operator glyph with the lower limit centered below and the
    /// upper limit centered above (right-shifted for the integral)
    fn big_operator(&mut self, name: &str, lower: Option<NodeId>, upper: Option<NodeId>) -> Frame {
        let glyph = big_operator_glyph(name).unwrap_or(&["?"]);
        let glyph_width = glyph[0].chars().count();
        let lower = self.layout_optional(lower);
        let upper = self.layout_optional(upper);

        let width = glyph_width
            .max(lower.as_ref().map_or(0, |f| f.width))
            .max(upper.as_ref().map_or(0, |f| f.width));
        let upper_rows = upper.as_ref().map_or(0, |f| f.height);
        let lower_rows = lower.as_ref().map_or(0, |f| f.height);

        let mut lines = Vec::with_capacity(upper_rows + glyph.len() + lower_rows);
        if let Some(ref upper) = upper {
            for line in &upper.lines {
                if name == "int" {
                    // Right-shifted over the glyph
                    let pad = width - line.chars().count().min(width);
                    lines.push(format!("{}{}", spaces(pad), line));
                } else {
                    lines.push(center(line, width));
                }
            }
        }
        for row in glyph {
            lines.push(center(row, width));
        }
        if let Some(ref lower) = lower {
            for line in &lower.lines {
                lines.push(center(line, width));
            }
        }

        Frame {
            width,
            height: upper_rows + glyph.len() + lower_rows,
            baseline: upper_rows + big_operator_baseline(name),
            lines,
        }
    }

    /// Plain pair at height 1, scaled column pieces otherwise
    fn parenthesize(&mut self, inner: NodeId, delimiter: &str) -> Frame {
        let inner = self.layout_node(inner);
        if delimiter == "." {
            return inner;
        }
        let closing = matching_delimiter(delimiter);

        if inner.height == 1 {
            let line = format!("{}{}{}", delimiter, inner.lines[0], closing);
            return Frame {
                width: inner.width + 2,
                height: 1,
                baseline: 0,
                lines: vec![line],
            };
        }

        let lines = inner
            .lines
            .iter()
            .enumerate()
            .map(|(row, line)| {
                format!(
                    "{}{}{}",
                    scaled_delimiter(delimiter, row, inner.height),
                    line,
                    scaled_delimiter(closing, row, inner.height)
                )
            })
            .collect();

        Frame {
            width: inner.width + 2,
            height: inner.height,
            baseline: inner.baseline,
            lines,
        }
    }
}

/// Compute the frame of a parsed expression
pub fn layout(arena: &Arena, root: NodeId) -> Frame {
    LayoutEngine::new(arena).layout_node(root)
}
