use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{one_of, satisfy},
    combinator::map,
    IResult,
};
use numeral_protocol::Span;

/// Characters that always stand alone. The hyphen and apostrophe are not
/// here: "twenty-five" and "don't" stay single chunks.
pub const PUNCTUATION: &str = ".,;:!?()[]{}\"\\/#$%^&*=_`~";

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !PUNCTUATION.contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    Word(&'a str),
    Space(char),
    Punct(char),
}

fn chunk(input: &str) -> IResult<&str, Chunk<'_>> {
    alt((
        map(take_while1(is_word_char), Chunk::Word),
        map(satisfy(char::is_whitespace), Chunk::Space),
        map(one_of(PUNCTUATION), Chunk::Punct),
    ))(input)
}

/// Cuts `original` into word runs and single delimiter characters, each with
/// its byte span. Concatenating the spans gives back the whole input.
pub fn scan(original: &str) -> Vec<(Span, Chunk<'_>)> {
    let mut input = original;
    let mut result = Vec::new();

    while !input.is_empty() {
        let start = original.len() - input.len();

        match chunk(input) {
            Ok((rest, chunk)) => {
                let end = original.len() - rest.len();
                result.push((Span::new(start, end), chunk));
                input = rest;
            }
            Err(_) => {
                // Every char is one of the three kinds; skip one if that ever changes
                let Some(c) = input.chars().next() else {
                    break;
                };
                input = &input[c.len_utf8()..];
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_words_and_delimiters() {
        let chunks = scan("twenty-five, ok");
        assert_eq!(
            chunks,
            vec![
                (Span::new(0, 11), Chunk::Word("twenty-five")),
                (Span::new(11, 12), Chunk::Punct(',')),
                (Span::new(12, 13), Chunk::Space(' ')),
                (Span::new(13, 15), Chunk::Word("ok")),
            ]
        );
    }

    #[test]
    fn test_scan_multibyte_spans() {
        let input = "drieëndertig  één";
        let chunks = scan(input);
        assert_eq!(chunks.len(), 4);
        assert_eq!(&input[chunks[0].0.start..chunks[0].0.end], "drieëndertig");
        assert_eq!(chunks[1].1, Chunk::Space(' '));
        assert_eq!(chunks[2].1, Chunk::Space(' '));
        assert_eq!(chunks[3], (Span::new(15, 20), Chunk::Word("één")));
    }

    #[test]
    fn test_scan_covers_input() {
        let input = "(five) point\tsix?! don't @home";
        let chunks = scan(input);
        let rebuilt: String = chunks
            .iter()
            .map(|(span, _)| &input[span.start..span.end])
            .collect();
        assert_eq!(rebuilt, input);
        assert!(chunks.contains(&(Span::new(19, 24), Chunk::Word("don't"))));
        assert!(chunks.contains(&(Span::new(25, 30), Chunk::Word("@home"))));
    }

    #[test]
    fn test_scan_empty() {
        assert!(scan("").is_empty());
    }
}
