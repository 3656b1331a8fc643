#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

use crate::lexeme::{LexemeClass, SubRegionKind};

/// Half-open byte range into the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Token<'a> {
    /// Chunk this token came from. Parts of one split compound share it.
    pub span: Span,
    /// Surface text: the chunk itself, or the vocabulary word it was split into
    pub text: &'a str,
    pub normalized: String,
    pub class: LexemeClass,
    /// Numeric value from the active locale (units, tens and magnitudes only)
    pub value: Option<u128>,
}

/// A place-value cluster inside a region, evaluated as one sum-or-product.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct SubRegion<'a> {
    pub kind: SubRegionKind,
    pub tokens: Vec<Token<'a>>,
}

impl<'a> SubRegion<'a> {
    pub fn new(kind: SubRegionKind, token: Token<'a>) -> Self {
        Self {
            kind,
            tokens: vec![token],
        }
    }

    /// The leftmost token placed so far (segmentation runs right to left).
    pub fn placed(&self) -> Option<&Token<'a>> {
        self.tokens.first()
    }
}

/// One numeral phrase: a maximal run of tokens that evaluates to one number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Region<'a> {
    pub span: Span,
    pub tokens: Vec<Token<'a>>,
    pub has_decimal: bool,
    /// Filled in by the segmenter; empty straight out of the matcher
    pub sub_regions: Vec<SubRegion<'a>>,
}

impl<'a> Region<'a> {
    pub fn start(token: Token<'a>) -> Self {
        Self {
            span: token.span,
            has_decimal: token.class == LexemeClass::Decimal,
            tokens: vec![token],
            sub_regions: Vec::new(),
        }
    }

    pub fn push(&mut self, token: Token<'a>) {
        self.span = self.span.cover(token.span);
        if token.class == LexemeClass::Decimal {
            self.has_decimal = true;
        }
        self.tokens.push(token);
    }

    pub fn last(&self) -> Option<&Token<'a>> {
        self.tokens.last()
    }
}
