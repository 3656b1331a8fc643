use numeral_protocol::{Language, Result};
use phf::phf_map;

use crate::compound::{self, Split};
use crate::{Locale, Vocabulary};

static UNITS: Vocabulary = phf_map! {
    "nul" => 0,
    "een" => 1,
    "één" => 1,
    "eerste" => 1,
    "twee" => 2,
    "tweede" => 2,
    "drie" => 3,
    "derde" => 3,
    "vier" => 4,
    "vierde" => 4,
    "vijf" => 5,
    "vijfde" => 5,
    "zes" => 6,
    "zesde" => 6,
    "zeven" => 7,
    "zevende" => 7,
    "acht" => 8,
    "achtste" => 8,
    "negen" => 9,
    "negende" => 9,
    "tien" => 10,
    "tiende" => 10,
    "elf" => 11,
    "elfde" => 11,
    "twaalf" => 12,
    "twaalfde" => 12,
    "dertien" => 13,
    "dertiende" => 13,
    "veertien" => 14,
    "veertiende" => 14,
    "vijftien" => 15,
    "vijftiende" => 15,
    "zestien" => 16,
    "zestiende" => 16,
    "zeventien" => 17,
    "zeventiende" => 17,
    "achttien" => 18,
    "achttiende" => 18,
    "negentien" => 19,
    "negentiende" => 19,
};

static TENS: Vocabulary = phf_map! {
    "twintig" => 20,
    "twintigste" => 20,
    "dertig" => 30,
    "dertigste" => 30,
    "veertig" => 40,
    "veertigste" => 40,
    "vijftig" => 50,
    "vijftigste" => 50,
    "zestig" => 60,
    "zestigste" => 60,
    "zeventig" => 70,
    "zeventigste" => 70,
    "tachtig" => 80,
    "tachtigste" => 80,
    "negentig" => 90,
    "negentigste" => 90,
};

static MAGNITUDES: Vocabulary = phf_map! {
    "honderd" => 100,
    "honderdste" => 100,
    "duizend" => 1_000,
    "duizendste" => 1_000,
    "miljoen" => 1_000_000,
    "miljard" => 1_000_000_000,
    "biljoen" => 1_000_000_000_000,
    "biljard" => 1_000_000_000_000_000,
    "triljoen" => 1_000_000_000_000_000_000,
    "triljard" => 1_000_000_000_000_000_000_000,
    "quadriljoen" => 1_000_000_000_000_000_000_000_000,
    "quadriljard" => 1_000_000_000_000_000_000_000_000_000,
    "quintiljoen" => 1_000_000_000_000_000_000_000_000_000_000,
    "quintiljard" => 1_000_000_000_000_000_000_000_000_000_000_000,
};

/// Dutch. Any number of numerals fuse into one word, with the unit ahead of
/// the ten: "tweehonderdvijfentwintig".
#[derive(Debug, Clone, Copy, Default)]
pub struct Dutch;

impl Locale for Dutch {
    fn language(&self) -> Language {
        Language::NlNl
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
        &["komma", "punt"]
    }

    fn joiners(&self) -> &'static [&'static str] {
        &["en"]
    }

    fn singular_articles(&self) -> &'static [&'static str] {
        &["een"]
    }

    fn split(&self, chunk: &str) -> Result<Split> {
        Ok(compound::split_fused(self, chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(chunk: &str) -> Split {
        Dutch.split(chunk).unwrap()
    }

    fn parts(words: &[&'static str]) -> Split {
        Split::Parts(words.to_vec())
    }

    #[test]
    fn test_unit_before_ten_is_swapped() {
        assert_eq!(split("drieëndertig"), parts(&["dertig", "drie"]));
        assert_eq!(split("vierenveertig"), parts(&["veertig", "vier"]));
        assert_eq!(split("zevenenzestig"), parts(&["zestig", "zeven"]));
        assert_eq!(split("achtentachtig"), parts(&["tachtig", "acht"]));
        assert_eq!(split("negenennegentig"), parts(&["negentig", "negen"]));
    }

    #[test]
    fn test_magnitude_order_is_kept() {
        assert_eq!(
            split("tweehonderdduizendvierendertig"),
            parts(&["twee", "honderd", "duizend", "dertig", "vier"])
        );
        assert_eq!(
            split("tweehonderddrieëndertig"),
            parts(&["twee", "honderd", "dertig", "drie"])
        );
        assert_eq!(split("negentienhonderd"), parts(&["negentien", "honderd"]));
        assert_eq!(split("driehonderdvijftien"), parts(&["drie", "honderd", "vijftien"]));
    }

    #[test]
    fn test_hundred_before_a_vowel() {
        assert_eq!(split("honderdeen"), parts(&["honderd", "een"]));
        assert_eq!(split("tweehonderdelf"), parts(&["twee", "honderd", "elf"]));
        assert_eq!(
            split("honderdeenentwintig"),
            parts(&["honderd", "twintig", "een"])
        );
        assert_eq!(
            split("duizendhonderdeen"),
            parts(&["duizend", "honderd", "een"])
        );
    }

    #[test]
    fn test_ordinal_wins_over_cardinal() {
        assert_eq!(split("tweeëntwintigste"), parts(&["twintigste", "twee"]));
        assert_eq!(split("vijfhonderdste"), parts(&["vijf", "honderdste"]));
    }

    #[test]
    fn test_words_that_stay_whole() {
        assert_eq!(split("vijftien"), Split::Whole);
        assert_eq!(split("Eén"), Split::Whole);
        assert_eq!(split("geen"), Split::Whole);
        assert_eq!(split("creeert"), Split::Whole);
        assert_eq!(split("regio"), Split::Whole);
        // Two units in a row never make one number
        assert_eq!(split("tweedrie"), Split::Whole);
    }
}
