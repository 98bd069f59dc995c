//! Character classification and the block color table
//!
//! Every character falls into exactly one [`CharacterClass`], and every class
//! (every letter, for [`CharacterClass::Letter`]) owns one fixed [`Rgb`] color.
//! The lookup is total: anything that is not a letter, bracket, operator,
//! digit or whitespace lands in [`CharacterClass::Other`].

use ratatui::style::Color;
use std::fmt;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// A 24-bit fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub const BRACKETS: &str = "(){}[]";
pub const OPERATORS: &str = "+-*/=><|&%";

/// Fill colors for `a` through `z`, in order
pub const LETTER_COLORS: [Rgb; 26] = [
    Rgb::from_hex(0xFF6B6B), // a
    Rgb::from_hex(0x4ECDC4),
    Rgb::from_hex(0x45B7D1),
    Rgb::from_hex(0x96CEB4),
    Rgb::from_hex(0xFFEEAD),
    Rgb::from_hex(0xD4A5A5),
    Rgb::from_hex(0x9B59B6),
    Rgb::from_hex(0x3498DB),
    Rgb::from_hex(0xF1C40F),
    Rgb::from_hex(0xE74C3C),
    Rgb::from_hex(0x2ECC71),
    Rgb::from_hex(0xE67E22),
    Rgb::from_hex(0x1ABC9C), // m
    Rgb::from_hex(0xCC66FF),
    Rgb::from_hex(0xFF99CC),
    Rgb::from_hex(0x99CC33),
    Rgb::from_hex(0xFF9966),
    Rgb::from_hex(0x66CCFF),
    Rgb::from_hex(0xFF99FF),
    Rgb::from_hex(0x99CCFF),
    Rgb::from_hex(0xFFCC99),
    Rgb::from_hex(0x99FFCC),
    Rgb::from_hex(0xFF99CC), // w (same value as o)
    Rgb::from_hex(0xCC99FF),
    Rgb::from_hex(0xFFCC66),
    Rgb::from_hex(0x66FFCC), // z
];

pub const BRACKET_COLOR: Rgb = Rgb::from_hex(0xF08D49);
pub const OPERATOR_COLOR: Rgb = Rgb::from_hex(0xCC99CD);
pub const DIGIT_COLOR: Rgb = Rgb::from_hex(0xF8C555);
pub const WHITESPACE_COLOR: Rgb = Rgb::from_hex(0x4A4A4A);
pub const SPECIAL_COLOR: Rgb = Rgb::from_hex(0xFC929E);

/// One of the 26 letters `a` through `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsciiLetter(u8);

impl AsciiLetter {
    /// The letter whose lowercase form is a single `a..=z` char, if any
    pub fn new(c: char) -> Option<Self> {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.is_ascii_lowercase() => Some(AsciiLetter(l as u8 - b'a')),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    pub fn color(self) -> Rgb {
        LETTER_COLORS[self.0 as usize]
    }
}

/// Decimal digit in any script (general category Nd)
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && c.general_category() == GeneralCategory::DecimalNumber)
}

/// The category that decides a block's color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Letter(AsciiLetter),
    Bracket,
    Operator,
    Digit,
    Whitespace,
    Other,
}

impl CharacterClass {
    /// Classify a single character.
    ///
    /// Checks run in a fixed order (letter, bracket, operator, digit,
    /// whitespace) so the classes never overlap.
    pub fn of(c: char) -> Self {
        if let Some(letter) = AsciiLetter::new(c) {
            CharacterClass::Letter(letter)
        } else if BRACKETS.contains(c) {
            CharacterClass::Bracket
        } else if OPERATORS.contains(c) {
            CharacterClass::Operator
        } else if is_decimal_digit(c) {
            CharacterClass::Digit
        } else if c.is_whitespace() {
            CharacterClass::Whitespace
        } else {
            CharacterClass::Other
        }
    }

    /// Look up the fill color for this class
    pub fn color(self) -> Rgb {
        match self {
            CharacterClass::Letter(letter) => letter.color(),
            CharacterClass::Bracket => BRACKET_COLOR,
            CharacterClass::Operator => OPERATOR_COLOR,
            CharacterClass::Digit => DIGIT_COLOR,
            CharacterClass::Whitespace => WHITESPACE_COLOR,
            CharacterClass::Other => SPECIAL_COLOR,
        }
    }

    /// The lowercase letter, for letter classes
    pub fn letter(self) -> Option<char> {
        match self {
            CharacterClass::Letter(letter) => Some(letter.as_char()),
            _ => None,
        }
    }
}

/// Fill color for one character
pub fn classify(c: char) -> Rgb {
    CharacterClass::of(c).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_ignore_case() {
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            assert_eq!(classify(lower), classify(upper), "letter {}", lower);
            assert_eq!(CharacterClass::of(upper).letter(), Some(lower));
        }
    }

    #[test]
    fn test_letter_table_order() {
        assert_eq!(classify('a'), Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(classify('z'), Rgb(0x66, 0xFF, 0xCC));
        assert_eq!(classify('o'), classify('w'));
    }

    #[test]
    fn test_symbol_classes() {
        for c in BRACKETS.chars() {
            assert_eq!(CharacterClass::of(c), CharacterClass::Bracket);
            assert_eq!(classify(c), BRACKET_COLOR);
        }
        for c in OPERATORS.chars() {
            assert_eq!(CharacterClass::of(c), CharacterClass::Operator);
            assert_eq!(classify(c), OPERATOR_COLOR);
        }
        for c in '0'..='9' {
            assert_eq!(classify(c), DIGIT_COLOR);
        }
        for c in [' ', '\t', '\n', '\u{3000}'] {
            assert_eq!(classify(c), WHITESPACE_COLOR);
        }
    }

    #[test]
    fn test_special_fallback() {
        for c in ['.', '!', '\'', '"', ';', '_', '@', '#', '~', 'é', 'λ', '🦀'] {
            assert_eq!(CharacterClass::of(c), CharacterClass::Other, "char {:?}", c);
            assert_eq!(classify(c), SPECIAL_COLOR);
        }
    }

    #[test]
    fn test_lowercase_form_decides_letters() {
        // KELVIN SIGN lowercases to a plain 'k'
        assert_eq!(CharacterClass::of('\u{212A}').letter(), Some('k'));
        assert_eq!(classify('\u{212A}'), classify('k'));
        // Dotted capital I lowercases to two chars, so it is no letter
        assert_eq!(CharacterClass::of('\u{0130}'), CharacterClass::Other);
        assert_eq!(AsciiLetter::new('é'), None);
        assert_eq!(AsciiLetter::new('Q').map(AsciiLetter::as_char), Some('q'));
    }

    #[test]
    fn test_only_decimal_digits_are_digits() {
        for c in ['٣', '७', '๕', '０', '９', '\u{1D7CE}'] {
            assert_eq!(classify(c), DIGIT_COLOR, "char {:?}", c);
        }
        // Fractions, letter numbers and other numerics fall back to special
        for c in ['½', '¾', 'Ⅻ', 'ⅰ', '〇', '²', '①', '\u{10107}'] {
            assert_eq!(classify(c), SPECIAL_COLOR, "char {:?}", c);
        }
    }

    #[test]
    fn test_non_ascii_partition() {
        for code in 0x80u32..0x3_0000 {
            let Some(c) = char::from_u32(code) else {
                continue;
            };
            let class = CharacterClass::of(c);

            assert_eq!(
                class.letter().is_some(),
                c == '\u{212A}',
                "letter class for {:?}",
                c
            );
            assert_ne!(class, CharacterClass::Bracket, "char {:?}", c);
            assert_ne!(class, CharacterClass::Operator, "char {:?}", c);
            assert_eq!(
                class == CharacterClass::Whitespace,
                c.is_whitespace(),
                "whitespace class for {:?}",
                c
            );
            if class == CharacterClass::Digit {
                assert!(c.is_numeric() && !c.is_alphabetic(), "digit class for {:?}", c);
                assert_eq!(classify(c), DIGIT_COLOR);
            }
            if (0x2150..=0x218B).contains(&code) || (0x2460..=0x24FF).contains(&code) {
                // Number Forms and Enclosed Alphanumerics hold no decimal digits
                assert_ne!(class, CharacterClass::Digit, "char {:?}", c);
            }
        }
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(BRACKET_COLOR.to_string(), "#F08D49");
        assert_eq!(Color::from(DIGIT_COLOR), Color::Rgb(0xF8, 0xC5, 0x55));
    }
}
