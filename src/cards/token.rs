//! Token domain: classification, weights, and display glyphs.
//!
//! A token is a raw `i32`. Numerals occupy `[-99, 99]`; the four
//! arithmetic operators use the fixed codes `101..=104`. Both the codes
//! and the weight tables below are game-balance contracts shared with the
//! expression generator — they must not drift.

use serde::{Deserialize, Serialize};

/// Operator code for `+`.
pub const OP_ADD: i32 = 101;
/// Operator code for `-`.
pub const OP_SUB: i32 = 102;
/// Operator code for `×`.
pub const OP_MUL: i32 = 103;
/// Operator code for `÷`.
pub const OP_DIV: i32 = 104;

/// Smallest legal numeral token.
pub const NUMERAL_MIN: i32 = -99;
/// Largest legal numeral token.
pub const NUMERAL_MAX: i32 = 99;

/// Semantic classification of a token.
///
/// The variant order is the canonical layout order: hands are arranged
/// and sampled by `(kind, token)` ascending, so the derived `Ord` here is
/// part of the engine's observable behavior.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TokenKind {
    /// Numeral with `|v| < 10`.
    SingleDigit,
    /// Numeral with `10 <= |v| <= 99`.
    DoubleDigit,
    /// One of the four operator codes.
    Symbol,
    /// Multi-digit numeral produced by merging; never derived directly
    /// from a token value.
    ManyDigits,
    /// Out-of-range value; the card shows an error face.
    #[default]
    IllegalToken,
}

/// Check whether a token is one of the four operator codes.
#[must_use]
pub const fn is_operator(token: i32) -> bool {
    token >= OP_ADD && token <= OP_DIV
}

/// Classify a raw token value.
///
/// Merge products are tagged separately by the card; plain classification
/// never yields `ManyDigits`.
#[must_use]
pub const fn classify(token: i32) -> TokenKind {
    if is_operator(token) {
        TokenKind::Symbol
    } else if token >= NUMERAL_MIN && token <= NUMERAL_MAX {
        if token / 10 == 0 {
            TokenKind::SingleDigit
        } else {
            TokenKind::DoubleDigit
        }
    } else {
        TokenKind::IllegalToken
    }
}

/// Sampling weight of a legal token.
///
/// Operators use a fixed per-operator table; numerals weigh their
/// absolute value, except zero, which weighs 7 so no card can have a
/// zero draw weight. Only meaningful for tokens that classify legally.
#[must_use]
pub const fn weight(token: i32) -> u32 {
    match token {
        OP_ADD => 6,
        OP_SUB => 4,
        OP_MUL => 8,
        OP_DIV => 8,
        0 => 7,
        v => v.unsigned_abs(),
    }
}

/// Display glyph for an operator code.
#[must_use]
pub const fn operator_glyph(token: i32) -> Option<&'static str> {
    match token {
        OP_ADD => Some("+"),
        OP_SUB => Some("-"),
        OP_MUL => Some("\u{00d7}"),
        OP_DIV => Some("\u{00f7}"),
        _ => None,
    }
}

/// Face text for a token: the operator glyph or the numeral itself.
#[must_use]
pub fn display(token: i32) -> String {
    match operator_glyph(token) {
        Some(glyph) => glyph.to_string(),
        None => token.to_string(),
    }
}

/// Roman numeral badge for a duplicate count.
///
/// The duplicate badge renders counts 1 through 7; larger groups cannot
/// occur in a capacity-bounded hand of distinct cards.
#[must_use]
pub const fn roman_badge(count: u32) -> Option<&'static str> {
    match count {
        1 => Some("I"),
        2 => Some("II"),
        3 => Some("III"),
        4 => Some("IV"),
        5 => Some("V"),
        6 => Some("VI"),
        7 => Some("VII"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_numerals() {
        assert_eq!(classify(0), TokenKind::SingleDigit);
        assert_eq!(classify(9), TokenKind::SingleDigit);
        assert_eq!(classify(-9), TokenKind::SingleDigit);
        assert_eq!(classify(10), TokenKind::DoubleDigit);
        assert_eq!(classify(-10), TokenKind::DoubleDigit);
        assert_eq!(classify(99), TokenKind::DoubleDigit);
        assert_eq!(classify(-99), TokenKind::DoubleDigit);
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify(100), TokenKind::IllegalToken);
        assert_eq!(classify(-100), TokenKind::IllegalToken);
        assert_eq!(classify(105), TokenKind::IllegalToken);
        assert_eq!(classify(i32::MAX), TokenKind::IllegalToken);
    }

    #[test]
    fn test_only_operator_codes_are_symbols() {
        for token in -200..=200 {
            let is_symbol = classify(token) == TokenKind::Symbol;
            assert_eq!(is_symbol, (101..=104).contains(&token), "token {}", token);
        }
    }

    #[test]
    fn test_operator_weights() {
        assert_eq!(weight(OP_ADD), 6);
        assert_eq!(weight(OP_SUB), 4);
        assert_eq!(weight(OP_MUL), 8);
        assert_eq!(weight(OP_DIV), 8);
    }

    #[test]
    fn test_numeral_weights() {
        for v in NUMERAL_MIN..=NUMERAL_MAX {
            let expected = if v == 0 { 7 } else { v.unsigned_abs() };
            assert_eq!(weight(v), expected, "numeral {}", v);
            assert!(weight(v) > 0);
        }
    }

    #[test]
    fn test_kind_order_is_canonical() {
        assert!(TokenKind::SingleDigit < TokenKind::DoubleDigit);
        assert!(TokenKind::DoubleDigit < TokenKind::Symbol);
        assert!(TokenKind::Symbol < TokenKind::ManyDigits);
    }

    #[test]
    fn test_display() {
        assert_eq!(display(OP_ADD), "+");
        assert_eq!(display(OP_SUB), "-");
        assert_eq!(display(OP_MUL), "\u{00d7}");
        assert_eq!(display(OP_DIV), "\u{00f7}");
        assert_eq!(display(42), "42");
        assert_eq!(display(-7), "-7");
    }

    #[test]
    fn test_roman_badge() {
        assert_eq!(roman_badge(1), Some("I"));
        assert_eq!(roman_badge(4), Some("IV"));
        assert_eq!(roman_badge(7), Some("VII"));
        assert_eq!(roman_badge(0), None);
        assert_eq!(roman_badge(8), None);
    }

    #[test]
    fn test_kind_serde() {
        let kind = TokenKind::Symbol;
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: TokenKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }
}
