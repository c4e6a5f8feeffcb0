//! Integration tests for termtex expression and document rendering

use termtex::{
    render, render_document, render_inline, render_inline_with_diagnostics,
    render_with_diagnostics, DiagnosticKind,
};

fn width(output: &str) -> usize {
    output.lines().next().unwrap_or("").chars().count()
}

fn height(output: &str) -> usize {
    output.lines().count().max(1)
}

// ============================================================================
// Leaf and operator layout
// ============================================================================

mod expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_text_is_single_row() {
        for leaf in ["x", "abc", "42", "3.14"] {
            let out = render(leaf);
            assert_eq!(height(&out), 1, "leaf {} must stay one row", leaf);
            assert_eq!(width(&out), leaf.chars().count());
            assert_eq!(out, leaf);
        }
    }

    #[test]
    fn test_empty_input_renders_one_empty_line() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            "a+b",
            r"\frac{-b+\sqrt{b^2-4ac}}{2a}",
            r"\sum_{i=1}^{n} x_i",
            "}}{{",
        ];
        for input in inputs {
            assert_eq!(render(input), render(input), "render({}) must be stable", input);
        }
    }

    #[test]
    fn test_addition_width_and_operator_row() {
        let out = render("a+b");
        assert_eq!(out, "a + b");
        assert_eq!(width(&out), 1 + 3 + 1);
    }

    #[test]
    fn test_operator_sits_on_the_taller_baseline() {
        let out = render(r"\frac{1}{2}+x");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["1    ", "━ + x", "2    "]);
    }

    #[test]
    fn test_equality_is_a_binary_operator() {
        assert_eq!(render("a=b"), "a = b");
        // Left-associative chain renders flat
        assert_eq!(render("a=b=c"), "a = b = c");
    }

    #[test]
    fn test_explicit_division_glyph() {
        assert_eq!(render("a/b"), "a ÷ b");
    }

    #[test]
    fn test_implicit_multiplication_composes() {
        let out = render(r"\pi r^2");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["     ²", "π   r "]);
    }

    #[test]
    fn test_fraction_is_three_rows() {
        let out = render(r"\frac{1}{2}");
        assert_eq!(out, "1\n━\n2");
    }

    #[test]
    fn test_superscript_adds_one_row() {
        let out = render("x^2");
        assert_eq!(out, " ²\nx ");
        assert_eq!(height(&out), 2);
    }

    #[test]
    fn test_subscript_stays_inline() {
        let out = render("x_i");
        assert_eq!(out, "xᵢ");
        assert_eq!(height(&out), 1);
        assert_eq!(width(&out), 2);
    }

    #[test]
    fn test_sqrt_is_two_rows() {
        let out = render(r"\sqrt{4}");
        assert_eq!(out, "  ▁▁\n╲╱ 4");
    }

    #[test]
    fn test_sqrt_wraps_tall_radicand() {
        let out = render(r"\sqrt{\frac{1}{2}}");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["  ▁▁", "   1", "   ━", "╲╱ 2"]);
    }

    #[test]
    fn test_sqrt_index_is_parsed_but_not_rendered() {
        assert_eq!(render(r"\sqrt[3]{x}"), render(r"\sqrt{x}"));
    }

    #[test]
    fn test_greek_and_symbols() {
        assert_eq!(render(r"\alpha"), "α");
        assert_eq!(render(r"\Omega"), "Ω");
        assert_eq!(render(r"\infty"), "∞");
        assert_eq!(render(r"x \leq y"), "x   ≤   y");
    }

    #[test]
    fn test_text_command_flattens() {
        assert_eq!(render(r"\text{rate of change}"), "rate of change");
    }
}

// ============================================================================
// Big operators
// ============================================================================

mod big_operators {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sum_with_limits_and_operand() {
        let out = render(r"\sum_{i=1}^{n} x_i");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["  n       ", "  ⎲     xᵢ", "  ⎳       ", "i = 1     "]
        );
        // Upper limit centered above the 2-row glyph, lower centered below,
        // operand composed to the right on the glyph's top row
        assert!(lines[0].contains('n'));
        assert!(lines[1].contains('⎲') && lines[1].contains("xᵢ"));
        assert!(lines[3].contains("i = 1"));
    }

    #[test]
    fn test_product_glyph_spans_two_rows() {
        let out = render(r"\prod_{i=1}^{n}");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["  n  ", " ┏━┓ ", " ┃ ┃ ", "i = 1"]);
    }

    #[test]
    fn test_integral_upper_limit_right_shifted() {
        let out = render(r"\int_0^1");
        assert_eq!(out, "1\n⌠\n⎮\n⌡\n0");
    }

    #[test]
    fn test_limit_renders_as_text_operator() {
        let out = render(r"\lim_{x \to 0}");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["   lim   ", "x   →   0"]);
    }

    #[test]
    fn test_bare_operator_has_no_limit_rows() {
        assert_eq!(render(r"\sum"), "⎲\n⎳");
    }

    #[test]
    fn test_scripts_accepted_in_either_order() {
        assert_eq!(render(r"\sum_{i=1}^{n}"), render(r"\sum^{n}_{i=1}"));
    }
}

// ============================================================================
// Delimiters
// ============================================================================

mod delimiters {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_parens_at_height_one() {
        assert_eq!(render("(a+b)"), "(a + b)");
    }

    #[test]
    fn test_scaled_parens_around_fraction() {
        let out = render(r"\left( \frac{1}{2} \right)");
        assert_eq!(out, "⎛1⎞\n⎜━⎟\n⎝2⎠");
    }

    #[test]
    fn test_scaled_brackets() {
        let out = render(r"\left[ \frac{1}{2} \right]");
        assert_eq!(out, "⎡1⎤\n⎢━⎥\n⎣2⎦");
    }

    #[test]
    fn test_invisible_left_delimiter() {
        assert_eq!(render(r"\left. \frac{1}{2} \right)"), "1\n━\n2");
    }

    #[test]
    fn test_mismatched_pair_is_not_verified() {
        // The \right delimiter is discarded; the opening glyph decides both
        let out = render(r"\left( x \right]");
        assert_eq!(out, "(x)");
    }
}

// ============================================================================
// Recovery - malformed input never errors
// ============================================================================

mod recovery {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_command_renders_literally() {
        let out = render(r"\zzz");
        assert!(out.contains("\\zzz"), "got {:?}", out);
    }

    #[test]
    fn test_unclosed_fraction_completes() {
        let out = render(r"\frac{1}{2");
        assert_eq!(out, "1\n━\n2");
    }

    #[test]
    fn test_garbage_inputs_produce_output() {
        for input in [
            "}}}{{{",
            r"\frac",
            "^_^",
            "((((",
            r"\left( x",
            r"x \right)",
            "a @@ b",
        ] {
            let out = render(input);
            assert!(height(&out) >= 1, "render({}) must produce rows", input);
        }
    }

    #[test]
    fn test_missing_operand_is_zero_width() {
        assert_eq!(render("+"), " + ");
    }

    #[test]
    fn test_deep_nesting_is_truncated_not_fatal() {
        let pathological = "{".repeat(2_000);
        let out = render_with_diagnostics(&pathological);
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::TooDeep));
    }
}

// ============================================================================
// Diagnostics side channel
// ============================================================================

mod diagnostics {
    use super::*;

    #[test]
    fn test_unknown_command_is_named() {
        let out = render_with_diagnostics(r"\zzz");
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnknownCommand && d.message.contains("\\zzz")));
    }

    #[test]
    fn test_unbalanced_delimiter_is_recorded() {
        let out = render_with_diagnostics(r"\frac{1}{2");
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnbalancedDelimiter));
    }

    #[test]
    fn test_dropped_chars_are_recorded() {
        let out = render_with_diagnostics("a ; b");
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::DroppedChar));
    }

    #[test]
    fn test_clean_input_has_no_diagnostics() {
        let out = render_with_diagnostics(r"\frac{a+b}{c}");
        assert!(
            !out.has_diagnostics(),
            "unexpected diagnostics: {:?}",
            out.diagnostics
        );
    }
}

// ============================================================================
// Inline and document rendering
// ============================================================================

mod documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_keeps_single_row_results() {
        assert_eq!(render_inline("a+b"), "a + b");
        assert_eq!(render_inline("x_i"), "xᵢ");
    }

    #[test]
    fn test_inline_truncates_to_baseline_row() {
        let out = render_inline_with_diagnostics(r"\frac{1}{2}");
        assert_eq!(out.content, "━");
        assert!(out
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::InlineTruncated));
    }

    #[test]
    fn test_display_span_reproduces_every_row() {
        let out = render_document("Solve\n$$\\frac{1}{2}$$\ndone");
        assert_eq!(out, "Solve\n1\n━\n2\ndone");
    }

    #[test]
    fn test_inline_span_substitution() {
        let out = render_document("the term $x^2$ grows");
        assert_eq!(out, "the term x grows");
    }

    #[test]
    fn test_text_outside_spans_untouched() {
        let input = "plain paragraph, costs $5 though";
        assert_eq!(render_document(input), input);
    }

    #[test]
    fn test_spans_render_in_discovery_order() {
        let out = render_document("$a$, $$b$$, $c$");
        assert_eq!(out, "a, b, c");
    }
}

// ============================================================================
// Composition
// ============================================================================

mod composition {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quadratic_formula() {
        let out = render(r"\frac{-b+\sqrt{b^2-4ac}}{2a}");
        assert_eq!(height(&out), 5);
        assert!(out.contains('━'));
        assert!(out.contains("╲╱"));
        // Every row spans the same width
        let w = width(&out);
        for line in out.lines() {
            assert_eq!(line.chars().count(), w, "ragged row {:?}", line);
        }
    }

    #[test]
    fn test_nested_fraction() {
        let out = render(r"\frac{1}{1+\frac{1}{x}}");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["  1  ", "━━━━━", "    1", "1 + ━", "    x"]
        );
    }

    #[test]
    fn test_chained_superscripts_associate_left() {
        // (x^2)^3: both exponents are single mappable chars
        let out = render("x^2^3");
        assert_eq!(out, "  ³\n ² \nx  ");
    }
}
