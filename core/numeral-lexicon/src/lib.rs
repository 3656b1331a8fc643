//! Per-language numeral vocabularies and compound splitting.
//!
//! Every supported language is a unit struct implementing [`Locale`]; the
//! tables behind it are compile-time `phf` maps, shared by all callers.

pub mod compound;
pub mod dutch;
pub mod english;
pub mod german;

pub use compound::{Candidate, Split};
pub use dutch::Dutch;
pub use english::English;
pub use german::German;

use numeral_protocol::{Language, LexemeClass, Result};

/// Word → value table.
pub type Vocabulary = phf::Map<&'static str, u128>;

/// Everything the pipeline needs to know about one language.
pub trait Locale: Sync {
    fn language(&self) -> Language;

    fn units(&self) -> &'static Vocabulary;
    fn tens(&self) -> &'static Vocabulary;
    fn magnitudes(&self) -> &'static Vocabulary;

    fn decimal_markers(&self) -> &'static [&'static str];
    fn joiners(&self) -> &'static [&'static str];

    /// Words meaning "one" that are far more often plain articles.
    fn singular_articles(&self) -> &'static [&'static str];

    /// Breaks one delimiter-free chunk into elementary vocabulary words.
    fn split(&self, chunk: &str) -> Result<Split>;

    /// Case-insensitive classification of a single word.
    fn classify(&self, word: &str) -> LexemeClass {
        let lowered = word.to_lowercase();
        let word = lowered.as_str();

        if self.units().contains_key(word) {
            LexemeClass::Unit
        } else if self.tens().contains_key(word) {
            LexemeClass::Ten
        } else if self.magnitudes().contains_key(word) {
            LexemeClass::Magnitude
        } else if self.decimal_markers().iter().any(|m| *m == word) {
            LexemeClass::Decimal
        } else if self.joiners().iter().any(|j| *j == word) {
            LexemeClass::Joiner
        } else {
            LexemeClass::Plain
        }
    }

    /// Value of a unit, ten or magnitude word in this language.
    fn value(&self, word: &str) -> Option<u128> {
        let lowered = word.to_lowercase();
        let word = lowered.as_str();

        self.units()
            .get(word)
            .or_else(|| self.tens().get(word))
            .or_else(|| self.magnitudes().get(word))
            .copied()
    }

    fn is_singular_article(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.singular_articles().iter().any(|a| *a == lowered)
    }

    /// Exact unit/ten/magnitude word. Expects lower-cased input.
    fn is_component(&self, lowered: &str) -> bool {
        self.units().contains_key(lowered)
            || self.tens().contains_key(lowered)
            || self.magnitudes().contains_key(lowered)
    }
}

static ENGLISH: English = English;
static DUTCH: Dutch = Dutch;
static GERMAN: German = German;

/// The locale implementing `language`.
pub fn locale(language: Language) -> &'static dyn Locale {
    match language {
        Language::EnUs => &ENGLISH,
        Language::NlNl => &DUTCH,
        Language::DeDe => &GERMAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_locale_lookup() {
        for language in Language::ALL {
            assert_eq!(locale(language).language(), language);
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let en = locale(Language::EnUs);
        assert_eq!(en.classify("Twenty"), LexemeClass::Ten);
        assert_eq!(en.classify("HUNDRED"), LexemeClass::Magnitude);
        assert_eq!(en.classify("Point"), LexemeClass::Decimal);
        assert_eq!(en.classify("and"), LexemeClass::Joiner);
        assert_eq!(en.classify("may"), LexemeClass::Plain);

        let de = locale(Language::DeDe);
        assert_eq!(de.classify("Millionen"), LexemeClass::Magnitude);
        assert_eq!(de.classify("Komma"), LexemeClass::Decimal);
        assert_eq!(de.classify("und"), LexemeClass::Joiner);
    }

    #[test]
    fn test_values_are_scoped_to_language() {
        let en = locale(Language::EnUs);
        let nl = locale(Language::NlNl);

        assert_eq!(en.value("decillion"), Some(10u128.pow(33)));
        assert_eq!(nl.value("quintiljard"), Some(10u128.pow(33)));
        // Dutch "elf" is 11, but not an English word
        assert_eq!(nl.value("elf"), Some(11));
        assert_eq!(en.value("elf"), None);
        assert_eq!(en.classify("een"), LexemeClass::Plain);
        assert_eq!(nl.classify("een"), LexemeClass::Unit);
    }

    #[test]
    fn test_singular_articles() {
        assert!(locale(Language::EnUs).is_singular_article("A"));
        assert!(locale(Language::NlNl).is_singular_article("een"));
        assert!(locale(Language::DeDe).is_singular_article("Eine"));
        assert!(!locale(Language::DeDe).is_singular_article("eins"));
    }

    proptest! {
        #[test]
        fn test_every_vocabulary_word_is_whole(index in 0usize..1000) {
            for language in Language::ALL {
                let locale = locale(language);
                let words: Vec<&str> = locale
                    .units()
                    .keys()
                    .chain(locale.tens().keys())
                    .chain(locale.magnitudes().keys())
                    .copied()
                    .collect();
                let word = words[index % words.len()];

                prop_assert_eq!(locale.split(word), Ok(Split::Whole));
                prop_assert!(locale.classify(word).is_numeral());
                prop_assert!(locale.value(word).is_some());
            }
        }

        #[test]
        fn test_words_without_letters_are_plain(word in "[0-9'-]{1,12}") {
            for language in Language::ALL {
                let locale = locale(language);
                prop_assert_eq!(locale.split(&word), Ok(Split::Whole));
                prop_assert_eq!(locale.classify(&word), LexemeClass::Plain);
            }
        }
    }
}
