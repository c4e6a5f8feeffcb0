//! Greek letter and math symbol mappings
//!
//! Command names are keyed without the leading backslash; the tokenizer
//! already strips it. A name found in neither table renders as literal
//! escaped text.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Greek letter commands
    pub static ref GREEK_LETTERS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Lowercase
        m.insert("alpha", "α");
        m.insert("beta", "β");
        m.insert("gamma", "γ");
        m.insert("delta", "δ");
        m.insert("epsilon", "ε");
        m.insert("varepsilon", "ε");
        m.insert("zeta", "ζ");
        m.insert("eta", "η");
        m.insert("theta", "θ");
        m.insert("vartheta", "ϑ");
        m.insert("iota", "ι");
        m.insert("kappa", "κ");
        m.insert("lambda", "λ");
        m.insert("mu", "μ");
        m.insert("nu", "ν");
        m.insert("xi", "ξ");
        m.insert("omicron", "ο");
        m.insert("pi", "π");
        m.insert("varpi", "ϖ");
        m.insert("rho", "ρ");
        m.insert("varrho", "ϱ");
        m.insert("sigma", "σ");
        m.insert("varsigma", "ς");
        m.insert("tau", "τ");
        m.insert("upsilon", "υ");
        m.insert("phi", "φ");
        m.insert("varphi", "ϕ");
        m.insert("chi", "χ");
        m.insert("psi", "ψ");
        m.insert("omega", "ω");

        // Uppercase (only the forms that differ from Latin letters)
        m.insert("Gamma", "Γ");
        m.insert("Delta", "Δ");
        m.insert("Theta", "Θ");
        m.insert("Lambda", "Λ");
        m.insert("Xi", "Ξ");
        m.insert("Pi", "Π");
        m.insert("Sigma", "Σ");
        m.insert("Upsilon", "Υ");
        m.insert("Phi", "Φ");
        m.insert("Psi", "Ψ");
        m.insert("Omega", "Ω");

        m
    };

    /// Math symbol commands
    pub static ref MATH_SYMBOLS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Constants and letterlike forms
        m.insert("infty", "∞");
        m.insert("partial", "∂");
        m.insert("nabla", "∇");
        m.insert("hbar", "ℏ");
        m.insert("ell", "ℓ");
        m.insert("aleph", "ℵ");
        m.insert("Re", "ℜ");
        m.insert("Im", "ℑ");
        m.insert("wp", "℘");
        m.insert("prime", "′");
        m.insert("degree", "°");
        m.insert("dagger", "†");
        m.insert("angle", "∠");

        // Binary operators
        m.insert("pm", "±");
        m.insert("mp", "∓");
        m.insert("times", "×");
        m.insert("cdot", "·");
        m.insert("div", "÷");
        m.insert("ast", "∗");
        m.insert("star", "⋆");
        m.insert("circ", "∘");
        m.insert("bullet", "•");
        m.insert("oplus", "⊕");
        m.insert("ominus", "⊖");
        m.insert("otimes", "⊗");
        m.insert("oslash", "⊘");
        m.insert("setminus", "∖");
        m.insert("wedge", "∧");
        m.insert("land", "∧");
        m.insert("vee", "∨");
        m.insert("lor", "∨");
        m.insert("neg", "¬");
        m.insert("lnot", "¬");

        // Relations
        m.insert("leq", "≤");
        m.insert("le", "≤");
        m.insert("geq", "≥");
        m.insert("ge", "≥");
        m.insert("neq", "≠");
        m.insert("ne", "≠");
        m.insert("approx", "≈");
        m.insert("equiv", "≡");
        m.insert("sim", "∼");
        m.insert("simeq", "≃");
        m.insert("cong", "≅");
        m.insert("propto", "∝");
        m.insert("ll", "≪");
        m.insert("gg", "≫");
        m.insert("perp", "⊥");
        m.insert("parallel", "∥");
        m.insert("mid", "∣");

        // Set theory and logic
        m.insert("in", "∈");
        m.insert("notin", "∉");
        m.insert("ni", "∋");
        m.insert("subset", "⊂");
        m.insert("supset", "⊃");
        m.insert("subseteq", "⊆");
        m.insert("supseteq", "⊇");
        m.insert("cup", "∪");
        m.insert("cap", "∩");
        m.insert("emptyset", "∅");
        m.insert("varnothing", "∅");
        m.insert("forall", "∀");
        m.insert("exists", "∃");
        m.insert("nexists", "∄");
        m.insert("therefore", "∴");
        m.insert("because", "∵");

        // Arrows
        m.insert("rightarrow", "→");
        m.insert("to", "→");
        m.insert("leftarrow", "←");
        m.insert("gets", "←");
        m.insert("leftrightarrow", "↔");
        m.insert("Rightarrow", "⇒");
        m.insert("Leftarrow", "⇐");
        m.insert("Leftrightarrow", "⇔");
        m.insert("implies", "⇒");
        m.insert("iff", "⇔");
        m.insert("mapsto", "↦");
        m.insert("uparrow", "↑");
        m.insert("downarrow", "↓");

        // Dots
        m.insert("ldots", "…");
        m.insert("dots", "…");
        m.insert("cdots", "⋯");
        m.insert("vdots", "⋮");
        m.insert("ddots", "⋱");

        m
    };
}

/// Look up a command name in the Greek and symbol tables
pub fn lookup_symbol(name: &str) -> Option<&'static str> {
    if let Some(glyph) = GREEK_LETTERS.get(name) {
        return Some(glyph);
    }
    MATH_SYMBOLS.get(name).copied()
}
