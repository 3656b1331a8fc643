use numeral_protocol::{Language, Result};
use phf::phf_map;

use crate::compound::{self, Split};
use crate::{Locale, Vocabulary};

static UNITS: Vocabulary = phf_map! {
    "zero" => 0,
    "a" => 1,
    "one" => 1,
    "first" => 1,
    "two" => 2,
    "second" => 2,
    "three" => 3,
    "third" => 3,
    "four" => 4,
    "fourth" => 4,
    "five" => 5,
    "fifth" => 5,
    "six" => 6,
    "sixth" => 6,
    "seven" => 7,
    "seventh" => 7,
    "eight" => 8,
    "eighth" => 8,
    "nine" => 9,
    "ninth" => 9,
    "ten" => 10,
    "tenth" => 10,
    "eleven" => 11,
    "eleventh" => 11,
    "twelve" => 12,
    "twelfth" => 12,
    "thirteen" => 13,
    "thirteenth" => 13,
    "fourteen" => 14,
    "fourteenth" => 14,
    "fifteen" => 15,
    "fifteenth" => 15,
    "sixteen" => 16,
    "sixteenth" => 16,
    "seventeen" => 17,
    "seventeenth" => 17,
    "eighteen" => 18,
    "eighteenth" => 18,
    "nineteen" => 19,
    "nineteenth" => 19,
};

static TENS: Vocabulary = phf_map! {
    "twenty" => 20,
    "twentieth" => 20,
    "thirty" => 30,
    "thirtieth" => 30,
    "forty" => 40,
    "fortieth" => 40,
    "fifty" => 50,
    "fiftieth" => 50,
    "sixty" => 60,
    "sixtieth" => 60,
    "seventy" => 70,
    "seventieth" => 70,
    "eighty" => 80,
    "eightieth" => 80,
    "ninety" => 90,
    "ninetieth" => 90,
};

static MAGNITUDES: Vocabulary = phf_map! {
    "hundred" => 100,
    "hundredth" => 100,
    "thousand" => 1_000,
    "million" => 1_000_000,
    "billion" => 1_000_000_000,
    "trillion" => 1_000_000_000_000,
    "quadrillion" => 1_000_000_000_000_000,
    "quintillion" => 1_000_000_000_000_000_000,
    "sextillion" => 1_000_000_000_000_000_000_000,
    "septillion" => 1_000_000_000_000_000_000_000_000,
    "octillion" => 1_000_000_000_000_000_000_000_000_000,
    "nonillion" => 1_000_000_000_000_000_000_000_000_000_000,
    "decillion" => 1_000_000_000_000_000_000_000_000_000_000_000,
};

/// Infixes allowed between the two halves of a compound ("twenty-five").
const INFIXES: &[&str] = &["-"];

/// English. Compounds are at most two words, glued ("nineteenhundred") or
/// hyphenated ("ninety-nine").
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Locale for English {
    fn language(&self) -> Language {
        Language::EnUs
    }

    fn units(&self) -> &'static Vocabulary {
        &UNITS
    }

    fn tens(&self) -> &'static Vocabulary {
        &TENS
    }

    fn magnitudes(&self) -> &'static Vocabulary {
        &MAGNITUDES
    }

    fn decimal_markers(&self) -> &'static [&'static str] {
        &["point", "dot"]
    }

    fn joiners(&self) -> &'static [&'static str] {
        &["and"]
    }

    fn singular_articles(&self) -> &'static [&'static str] {
        &["a"]
    }

    fn split(&self, chunk: &str) -> Result<Split> {
        compound::split_edges(self, chunk, INFIXES)
    }
}
