//! Multi-row operator glyphs and scalable delimiters
//!
//! Big operators span two rows (three for the integral) so their limits read
//! above and below; delimiters taller than one row are assembled from the
//! Unicode bracket-piece block.

/// Rows of the multi-row glyph for a big operator, top to bottom
pub fn big_operator_glyph(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "sum" => Some(&["⎲", "⎳"]),
        "prod" => Some(&["┏━┓", "┃ ┃"]),
        "int" => Some(&["⌠", "⎮", "⌡"]),
        "bigcup" => Some(&["│ │", "╰─╯"]),
        "bigcap" => Some(&["╭─╮", "│ │"]),
        "lim" => Some(&["lim"]),
        _ => None,
    }
}

/// Row within the glyph that carries the operator's baseline
pub fn big_operator_baseline(name: &str) -> usize {
    match name {
        // The integral is three rows tall; its middle row lines up with the
        // operand. Two-row glyphs align on their top row.
        "int" => 1,
        _ => 0,
    }
}

/// Delimiter glyph for a named command after `\left` or `\right`
pub fn named_delimiter(name: &str) -> Option<&'static str> {
    match name {
        "langle" => Some("⟨"),
        "rangle" => Some("⟩"),
        "lbrace" => Some("{"),
        "rbrace" => Some("}"),
        "lceil" => Some("⌈"),
        "rceil" => Some("⌉"),
        "lfloor" => Some("⌊"),
        "rfloor" => Some("⌋"),
        "vert" => Some("|"),
        "Vert" => Some("‖"),
        _ => None,
    }
}

/// Closing glyph paired with an opening delimiter
pub fn matching_delimiter(open: &str) -> &'static str {
    match open {
        "(" => ")",
        "[" => "]",
        "{" => "}",
        "⟨" => "⟩",
        "⌈" => "⌉",
        "⌊" => "⌋",
        "|" => "|",
        "‖" => "‖",
        "." => ".",
        _ => ")",
    }
}

/// Piece of a delimiter column at `row` out of `height` rows (height ≥ 2)
pub fn scaled_delimiter(delim: &str, row: usize, height: usize) -> char {
    let bottom = height - 1;
    match delim {
        "(" => match row {
            0 => '⎛',
            r if r == bottom => '⎝',
            _ => '⎜',
        },
        ")" => match row {
            0 => '⎞',
            r if r == bottom => '⎠',
            _ => '⎟',
        },
        "[" => match row {
            0 => '⎡',
            r if r == bottom => '⎣',
            _ => '⎢',
        },
        "]" => match row {
            0 => '⎤',
            r if r == bottom => '⎦',
            _ => '⎥',
        },
        "{" => match row {
            0 => '⎧',
            r if r == bottom => '⎩',
            r if r == height / 2 => '⎨',
            _ => '⎪',
        },
        "}" => match row {
            0 => '⎫',
            r if r == bottom => '⎭',
            r if r == height / 2 => '⎬',
            _ => '⎪',
        },
        "|" => '│',
        "‖" => '║',
        other => other.chars().next().unwrap_or(' '),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_glyph_heights() {
        assert_eq!(big_operator_glyph("sum").unwrap().len(), 2);
        assert_eq!(big_operator_glyph("prod").unwrap().len(), 2);
        assert_eq!(big_operator_glyph("int").unwrap().len(), 3);
        assert_eq!(big_operator_glyph("lim").unwrap().len(), 1);
        assert!(big_operator_glyph("frac").is_none());
    }

    #[test]
    fn test_int_baseline_is_middle_row() {
        assert_eq!(big_operator_baseline("int"), 1);
        assert_eq!(big_operator_baseline("sum"), 0);
    }

    #[test]
    fn test_delimiter_pairing() {
        assert_eq!(matching_delimiter("("), ")");
        assert_eq!(matching_delimiter("⟨"), "⟩");
        assert_eq!(matching_delimiter("."), ".");
    }

    #[test]
    fn test_scaled_paren_column() {
        assert_eq!(scaled_delimiter("(", 0, 3), '⎛');
        assert_eq!(scaled_delimiter("(", 1, 3), '⎜');
        assert_eq!(scaled_delimiter("(", 2, 3), '⎝');
        assert_eq!(scaled_delimiter("|", 1, 3), '│');
    }
}
