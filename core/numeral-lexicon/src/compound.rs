use numeral_protocol::{LexemeClass, NumeralError, NumeralFlags, Result};

use crate::Locale;

/// Outcome of running a chunk through a compound splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    /// Keep the chunk as one token
    Whole,
    /// Elementary vocabulary words, in the order the evaluator expects
    Parts(Vec<&'static str>),
}

/// A vocabulary word found inside a chunk. Byte offsets, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub start: usize,
    pub end: usize,
    pub class: LexemeClass,
    pub word: &'static str,
}

impl Candidate {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn covers(&self, other: &Candidate) -> bool {
        self.start <= other.start && self.end >= other.end
    }
}

/// Every occurrence of `needle` in `haystack`, overlapping ones included.
fn occurrences<'h>(haystack: &'h str, needle: &'h str) -> impl Iterator<Item = usize> + 'h {
    let mut from = 0;
    std::iter::from_fn(move || {
        let at = from + haystack.get(from..)?.find(needle)?;
        // Resume one character later so "eeen" yields both "een"s
        let step = haystack[at..].chars().next().map_or(1, char::len_utf8);
        from = at + step;
        Some(at)
    })
}

/// Collects all unit/ten/magnitude words of `locale` occurring in `lowered`.
pub fn candidates(locale: &dyn Locale, lowered: &str, with_articles: bool) -> Vec<Candidate> {
    let tables = [
        (LexemeClass::Unit, locale.units()),
        (LexemeClass::Ten, locale.tens()),
        (LexemeClass::Magnitude, locale.magnitudes()),
    ];

    let mut found = Vec::new();
    for (class, table) in tables {
        for word in table.keys().copied() {
            if !with_articles && locale.singular_articles().contains(&word) {
                continue;
            }
            for start in occurrences(lowered, word) {
                found.push(Candidate {
                    start,
                    end: start + word.len(),
                    class,
                    word,
                });
            }
        }
    }
    found
}

/// A split is only worth making if its parts read as one numeral phrase.
/// "tenten" or "eineinhalb" would otherwise open two regions over one chunk.
fn forms_one_phrase(parts: &[Candidate]) -> bool {
    parts
        .windows(2)
        .all(|pair| pair[0].class.can_precede(pair[1].class, false))
}

/// Splitter for languages that glue at most two numerals per word, either
/// directly ("nineteenhundred") or through an infix ("twenty-five").
///
/// Takes the longest numeral anchored at the start of the chunk and the
/// longest one anchored at its end.
pub fn split_edges(locale: &dyn Locale, chunk: &str, infixes: &[&str]) -> Result<Split> {
    let lowered = chunk.to_lowercase();
    if locale.is_component(&lowered) {
        return Ok(Split::Whole);
    }

    let found = candidates(locale, &lowered, false);
    if found.len() < 2 {
        return Ok(Split::Whole);
    }

    let head = found.iter().filter(|c| c.start == 0).max_by_key(|c| c.len());
    let tail = found
        .iter()
        .filter(|c| c.end == lowered.len())
        .max_by_key(|c| c.len());
    let (Some(head), Some(tail)) = (head, tail) else {
        return Ok(Split::Whole);
    };

    if head.end == tail.start {
        let pair = [*head, *tail];
        return Ok(if forms_one_phrase(&pair) {
            Split::Parts(vec![head.word, tail.word])
        } else {
            Split::Whole
        });
    }

    let joined = infixes.iter().any(|infix| {
        lowered
            .get(head.end..)
            .and_then(|rest| rest.find(infix))
            .map(|offset| head.end + offset)
            .is_some_and(|at| at + infix.len() <= tail.start)
    });
    if !joined {
        return Err(NumeralError::UnparseableCompound {
            chunk: chunk.to_string(),
            head: head.word.to_string(),
            tail: tail.word.to_string(),
        });
    }

    match (head.class, tail.class) {
        (LexemeClass::Ten, LexemeClass::Unit) | (LexemeClass::Unit, LexemeClass::Magnitude) => {
            Ok(Split::Parts(vec![head.word, tail.word]))
        }
        // "one-on-one": joined, but not a number
        _ => Ok(Split::Whole),
    }
}

/// Whether `candidate` hides inside a better match and must be dropped.
fn shadowed(candidate: &Candidate, all: &[Candidate]) -> bool {
    if (NumeralFlags::UNIT | NumeralFlags::MAGNITUDE).contains(candidate.class.flag()) {
        // "vijf" and "tien" inside "vijftien", "honderd" inside "honderdste"
        all.iter()
            .any(|other| other.word != candidate.word && other.covers(candidate))
    } else {
        // "twintigste" wins over "twintig"
        all.iter().any(|other| {
            other.start == candidate.start
                && other.end > candidate.end
                && other.word.contains(candidate.word)
        })
    }
}

/// Left-to-right, non-overlapping pick of candidates, longest first at each
/// offset. Drops matches straddling two real words, like the "derde" that
/// "honderdeen" hides across "honderd" and "een".
fn tile(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| (c.start, std::cmp::Reverse(c.end)));

    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if kept.last().map_or(true, |last| candidate.start >= last.end) {
            kept.push(candidate);
        }
    }
    kept
}

/// Splitter for languages that fuse any number of numerals into one word and
/// put the unit before the ten ("tweehonderdvijfentwintig", "dreiundzwanzig").
///
/// The parts come back in the order the evaluator reads: a unit followed by a
/// ten is swapped, so "vijfentwintig" yields `["twintig", "vijf"]`.
pub fn split_fused(locale: &dyn Locale, chunk: &str) -> Split {
    let lowered = chunk.to_lowercase();
    if locale.is_component(&lowered) {
        return Split::Whole;
    }

    let found = candidates(locale, &lowered, true);
    let kept = tile(
        found
            .iter()
            .filter(|candidate| !shadowed(candidate, &found))
            .copied()
            .collect(),
    );
    if kept.len() < 2 {
        return Split::Whole;
    }

    let mut ordered = kept.clone();
    let mut i = 0;
    while i + 1 < kept.len() {
        if kept[i].class == LexemeClass::Unit && kept[i + 1].class == LexemeClass::Ten {
            ordered.swap(i, i + 1);
            i += 2;
        } else {
            i += 1;
        }
    }

    if !forms_one_phrase(&ordered) {
        return Split::Whole;
    }
    Split::Parts(ordered.iter().map(|c| c.word).collect())
}
