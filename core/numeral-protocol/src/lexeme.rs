#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Category assigned to every token by the lexeme classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum LexemeClass {
    /// 0-19 (cardinal and ordinal) plus singular-article words
    Unit = 0,
    /// Multiples of ten from 20 to 90
    Ten = 1,
    /// Scale words: hundred, thousand, million ...
    Magnitude = 2,
    /// The per-language "point" word
    Decimal = 3,
    /// Conjunctions skipped inside a numeral phrase ("and", "en", "und")
    Joiner = 4,
    Punctuation = 5,
    Whitespace = 6,
    /// Anything else. Breaks a region.
    Plain = 7,
}

impl LexemeClass {
    /// Unit, ten and magnitude words. Decimal markers are not counted.
    pub fn is_numeral(self) -> bool {
        matches!(self, LexemeClass::Unit | LexemeClass::Ten | LexemeClass::Magnitude)
    }

    /// Whether `next` may directly follow `self` inside one numeral phrase.
    /// "five five", "five fifty" and "fifty fifty" are two phrases each;
    /// two units are fine once a decimal marker has been seen ("five point five five").
    pub fn can_precede(self, next: LexemeClass, after_decimal: bool) -> bool {
        match (self, next) {
            (LexemeClass::Unit, LexemeClass::Unit) => after_decimal,
            (LexemeClass::Unit, LexemeClass::Ten) | (LexemeClass::Ten, LexemeClass::Ten) => false,
            _ => true,
        }
    }

    pub fn flag(self) -> NumeralFlags {
        match self {
            LexemeClass::Unit => NumeralFlags::UNIT,
            LexemeClass::Ten => NumeralFlags::TEN,
            LexemeClass::Magnitude => NumeralFlags::MAGNITUDE,
            LexemeClass::Decimal => NumeralFlags::DECIMAL,
            _ => NumeralFlags::empty(),
        }
    }
}

bitflags! {
    /// Sets of numeral classes, for rules that apply to several classes at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct NumeralFlags: u8 {
        const UNIT = 1;
        const TEN = 2;
        const MAGNITUDE = 4;
        const DECIMAL = 8;
    }
}

/// Kind of a subregion: the place-value group it evaluates as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SubRegionKind {
    Unit,
    Ten,
    Magnitude,
    Decimal,
}

impl SubRegionKind {
    /// The kind a lone token of `class` opens. Only numeral and decimal
    /// classes ever reach a subregion.
    pub fn of(class: LexemeClass) -> Option<Self> {
        match class {
            LexemeClass::Unit => Some(SubRegionKind::Unit),
            LexemeClass::Ten => Some(SubRegionKind::Ten),
            LexemeClass::Magnitude => Some(SubRegionKind::Magnitude),
            LexemeClass::Decimal => Some(SubRegionKind::Decimal),
            _ => None,
        }
    }
}
