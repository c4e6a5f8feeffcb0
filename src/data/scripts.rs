//! Unicode superscript and subscript character tables
//!
//! These drive the inline forms of `x^2` and `x_i`: an exponent or subscript
//! whose characters all map here can be fused into the base row instead of
//! being stacked as a separate box.

use phf::phf_map;

/// Characters with a Unicode superscript form
pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    // Digits
    '0' => '⁰',
    '1' => '¹',
    '2' => '²',
    '3' => '³',
    '4' => '⁴',
    '5' => '⁵',
    '6' => '⁶',
    '7' => '⁷',
    '8' => '⁸',
    '9' => '⁹',

    // Operators
    '+' => '⁺',
    '-' => '⁻',
    '=' => '⁼',
    '(' => '⁽',
    ')' => '⁾',

    // Lowercase letters (no superscript 'q' exists)
    'a' => 'ᵃ',
    'b' => 'ᵇ',
    'c' => 'ᶜ',
    'd' => 'ᵈ',
    'e' => 'ᵉ',
    'f' => 'ᶠ',
    'g' => 'ᵍ',
    'h' => 'ʰ',
    'i' => 'ⁱ',
    'j' => 'ʲ',
    'k' => 'ᵏ',
    'l' => 'ˡ',
    'm' => 'ᵐ',
    'n' => 'ⁿ',
    'o' => 'ᵒ',
    'p' => 'ᵖ',
    'r' => 'ʳ',
    's' => 'ˢ',
    't' => 'ᵗ',
    'u' => 'ᵘ',
    'v' => 'ᵛ',
    'w' => 'ʷ',
    'x' => 'ˣ',
    'y' => 'ʸ',
    'z' => 'ᶻ',

    // Uppercase letters with a superscript form
    'A' => 'ᴬ',
    'B' => 'ᴮ',
    'D' => 'ᴰ',
    'E' => 'ᴱ',
    'G' => 'ᴳ',
    'H' => 'ᴴ',
    'I' => 'ᴵ',
    'J' => 'ᴶ',
    'K' => 'ᴷ',
    'L' => 'ᴸ',
    'M' => 'ᴹ',
    'N' => 'ᴺ',
    'O' => 'ᴼ',
    'P' => 'ᴾ',
    'R' => 'ᴿ',
    'T' => 'ᵀ',
    'U' => 'ᵁ',
    'V' => 'ⱽ',
    'W' => 'ᵂ',
};

/// Characters with a Unicode subscript form
pub static SUBSCRIPTS: phf::Map<char, char> = phf_map! {
    // Digits
    '0' => '₀',
    '1' => '₁',
    '2' => '₂',
    '3' => '₃',
    '4' => '₄',
    '5' => '₅',
    '6' => '₆',
    '7' => '₇',
    '8' => '₈',
    '9' => '₉',

    // Operators
    '+' => '₊',
    '-' => '₋',
    '=' => '₌',
    '(' => '₍',
    ')' => '₎',

    // The only letters Unicode defines subscripts for
    'a' => 'ₐ',
    'e' => 'ₑ',
    'h' => 'ₕ',
    'i' => 'ᵢ',
    'j' => 'ⱼ',
    'k' => 'ₖ',
    'l' => 'ₗ',
    'm' => 'ₘ',
    'n' => 'ₙ',
    'o' => 'ₒ',
    'p' => 'ₚ',
    'r' => 'ᵣ',
    's' => 'ₛ',
    't' => 'ₜ',
    'u' => 'ᵤ',
    'v' => 'ᵥ',
    'x' => 'ₓ',
};

/// Map a single character to its superscript form
pub fn superscript_char(c: char) -> Option<char> {
    SUPERSCRIPTS.get(&c).copied()
}

/// Map a single character to its subscript form
pub fn subscript_char(c: char) -> Option<char> {
    SUBSCRIPTS.get(&c).copied()
}

/// Map a whole string to superscript form, or None if any character is missing
pub fn map_superscript(text: &str) -> Option<String> {
    text.chars().map(superscript_char).collect()
}

/// Map a whole string to subscript form, or None if any character is missing
pub fn map_subscript(text: &str) -> Option<String> {
    text.chars().map(subscript_char).collect()
}
