use numeral_protocol::{Language, Result};
use phf::phf_map;

use crate::compound::{self, Split};
use crate::{Locale, Vocabulary};

static UNITS: Vocabulary = phf_map! {
    "null" => 0,
    "ein" => 1,
    "eine" => 1,
    "eins" => 1,
    "erste" => 1,
    "erster" => 1,
    "zwei" => 2,
    "zwo" => 2,
    "zweite" => 2,
    "zweiter" => 2,
    "drei" => 3,
    "dritte" => 3,
    "dritter" => 3,
    "vier" => 4,
    "vierte" => 4,
    "vierter" => 4,
    "fünf" => 5,
    "fünfte" => 5,
    "fünfter" => 5,
    "sechs" => 6,
    "sechste" => 6,
    "sechster" => 6,
    "sieben" => 7,
    "siebte" => 7,
    "siebter" => 7,
    "acht" => 8,
    "achte" => 8,
    "achter" => 8,
    "neun" => 9,
    "neunte" => 9,
    "neunter" => 9,
    "zehn" => 10,
    "zehnte" => 10,
    "zehnter" => 10,
    "elf" => 11,
    "elfte" => 11,
    "elfter" => 11,
    "zwölf" => 12,
    "zwölfte" => 12,
    "zwölfter" => 12,
    "dreizehn" => 13,
    "dreizehnte" => 13,
    "dreizehnter" => 13,
    "vierzehn" => 14,
    "vierzehnte" => 14,
    "vierzehnter" => 14,
    "fünfzehn" => 15,
    "fünfzehnte" => 15,
    "fünfzehnter" => 15,
    "sechzehn" => 16,
    "sechzehnte" => 16,
    "sechzehnter" => 16,
    "siebzehn" => 17,
    "siebzehnte" => 17,
    "siebzehnter" => 17,
    "achtzehn" => 18,
    "achtzehnte" => 18,
    "achtzehnter" => 18,
    "neunzehn" => 19,
    "neunzehnte" => 19,
    "neunzehnter" => 19,
};

static TENS: Vocabulary = phf_map! {
    "zwanzig" => 20,
    "zwanzigste" => 20,
    "zwanzigster" => 20,
    "dreißig" => 30,
    "dreissig" => 30,
    "dreißigste" => 30,
    "dreißigster" => 30,
    "vierzig" => 40,
    "vierzigste" => 40,
    "vierzigster" => 40,
    "fünfzig" => 50,
    "fünfzigste" => 50,
    "fünfzigster" => 50,
    "sechzig" => 60,
    "sechzigste" => 60,
    "sechzigster" => 60,
    "siebzig" => 70,
    "siebzigste" => 70,
    "siebzigster" => 70,
    "achtzig" => 80,
    "achtzigste" => 80,
    "achtzigster" => 80,
    "neunzig" => 90,
    "neunzigste" => 90,
    "neunzigster" => 90,
};

static MAGNITUDES: Vocabulary = phf_map! {
    "hundert" => 100,
    "hundertste" => 100,
    "tausend" => 1_000,
    "tausendste" => 1_000,
    "million" => 1_000_000,
    "millionen" => 1_000_000,
    "milliarde" => 1_000_000_000,
    "milliarden" => 1_000_000_000,
    "billion" => 1_000_000_000_000,
    "billionen" => 1_000_000_000_000,
    "billiarde" => 1_000_000_000_000_000,
    "billiarden" => 1_000_000_000_000_000,
    "trillion" => 1_000_000_000_000_000_000,
    "trillionen" => 1_000_000_000_000_000_000,
};

/// German. Fuses like Dutch, joining unit and ten with "und":
/// "dreihunderteinundzwanzig".
#[derive(Debug, Clone, Copy, Default)]
pub struct German;

impl Locale for German {
    fn language(&self) -> Language {
        Language::DeDe
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
        &["komma"]
    }

    fn joiners(&self) -> &'static [&'static str] {
        &["und"]
    }

    fn singular_articles(&self) -> &'static [&'static str] {
        &["ein", "eine"]
    }

    fn split(&self, chunk: &str) -> Result<Split> {
        Ok(compound::split_fused(self, chunk))
    }
}
