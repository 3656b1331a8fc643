pub mod region;
pub mod scan;

pub use region::match_regions;

use numeral_lexicon::{Locale, Split};
use numeral_protocol::{LexemeClass, Result, Span, Token};
use tracing::trace;

use crate::scan::{scan, Chunk};

pub struct Lexer {
    locale: &'static dyn Locale,
}

impl Lexer {
    pub fn new(locale: &'static dyn Locale) -> Self {
        Self { locale }
    }

    /// Primary entry point: Text -> classified tokens.
    ///
    /// Fused numerals come back as several tokens sharing their chunk's span.
    pub fn tokenize<'a>(&self, input: &'a str) -> Result<Vec<Token<'a>>> {
        let mut tokens = Vec::new();

        for (span, chunk) in scan(input) {
            let text = &input[span.start..span.end];

            match chunk {
                Chunk::Space(_) => tokens.push(delimiter(span, text, LexemeClass::Whitespace)),
                Chunk::Punct(_) => tokens.push(delimiter(span, text, LexemeClass::Punctuation)),
                // A hyphen only joins inside a word; on its own it is a dash
                Chunk::Word(word) if word.chars().all(|c| c == '-') => {
                    tokens.push(delimiter(span, text, LexemeClass::Punctuation))
                }
                Chunk::Word(word) => match self.locale.split(word)? {
                    Split::Whole => tokens.push(self.word(span, word)),
                    Split::Parts(parts) => {
                        trace!(chunk = word, ?parts, "split compound");
                        tokens.extend(parts.into_iter().map(|part| self.word(span, part)));
                    }
                },
            }
        }

        Ok(tokens)
    }

    fn word<'a>(&self, span: Span, text: &'a str) -> Token<'a> {
        Token {
            span,
            text,
            normalized: text.to_lowercase(),
            class: self.locale.classify(text),
            value: self.locale.value(text),
        }
    }
}

fn delimiter(span: Span, text: &str, class: LexemeClass) -> Token<'_> {
    Token {
        span,
        text,
        normalized: text.to_string(),
        class,
        value: None,
    }
}
