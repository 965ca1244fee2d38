use unicode_general_category::{GeneralCategory, get_general_category};

/// Coarse class of a codepoint, used to find word and subword boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    NonWord,
}

impl CharClass {
    #[inline]
    pub fn is_word(self) -> bool {
        self != CharClass::NonWord
    }
}

/// Classify a single codepoint by its Unicode general category: `Ll` is
/// lower, `Lu` upper, `Nd` a digit. Everything else (punctuation, symbols,
/// titlecase and modifier letters, fractions, superscripts, scripts without
/// case) is [`CharClass::NonWord`].
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        return match c {
            'a'..='z' => CharClass::Lower,
            'A'..='Z' => CharClass::Upper,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::NonWord,
        };
    }

    match get_general_category(c) {
        GeneralCategory::LowercaseLetter => CharClass::Lower,
        GeneralCategory::UppercaseLetter => CharClass::Upper,
        GeneralCategory::DecimalNumber => CharClass::Digit,
        _ => CharClass::NonWord,
    }
}
