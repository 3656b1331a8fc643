use numeral_protocol::{Region, Result};
use serde::Serialize;

use crate::eval::{evaluate, leading_number};
use crate::options::Options;

/// Result of one conversion. Serializes as a bare JSON string, number or array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Conversion {
    /// The input with every numeral phrase replaced by its value
    Text(String),
    Number(f64),
    Numbers(Vec<f64>),
}

impl Conversion {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Conversion::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Conversion::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Turns segmented regions into the output the options ask for.
pub fn compile(regions: &[Region<'_>], text: &str, options: &Options) -> Result<Conversion> {
    let values = regions
        .iter()
        .map(|region| evaluate(&region.sub_regions))
        .collect::<Result<Vec<f64>>>()?;

    if options.numbers_only {
        return Ok(Conversion::Numbers(values));
    }

    if options.one_number {
        if values.is_empty() {
            return Ok(Conversion::Text(text.to_string()));
        }
        let digits: String = values.iter().map(f64::to_string).collect();
        return Ok(Conversion::Number(leading_number(&digits)));
    }

    if let (Some(first), Some(&value)) = (regions.first(), values.first()) {
        if first.span.len() == text.len() {
            return Ok(Conversion::Number(value));
        }
    }

    Ok(Conversion::Text(replace_regions(text, regions, &values)))
}

/// Splices each value over its region, left to right. `drift` is how far the
/// output has shifted against the original offsets so far.
fn replace_regions(text: &str, regions: &[Region<'_>], values: &[f64]) -> String {
    let mut replaced = text.to_string();
    let mut drift: isize = 0;

    for (region, value) in regions.iter().zip(values) {
        let rendered = value.to_string();
        let start = (region.span.start as isize + drift) as usize;
        let end = start + region.span.len();

        replaced.replace_range(start..end, &rendered);
        drift += rendered.len() as isize - region.span.len() as isize;
    }

    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_protocol::{LexemeClass, Span, SubRegion, SubRegionKind, Token};

    /// A one-word region over `text[start..end]` worth `value`.
    fn region(text: &'static str, start: usize, end: usize, value: u128) -> Region<'static> {
        let token = Token {
            span: Span::new(start, end),
            text: &text[start..end],
            normalized: text[start..end].to_lowercase(),
            class: LexemeClass::Unit,
            value: Some(value),
        };
        let mut region = Region::start(token.clone());
        region.sub_regions = vec![SubRegion::new(SubRegionKind::Unit, token)];
        region
    }

    #[test]
    fn test_replacement_tracks_drift() {
        let text = "seven dwarves and nine lives";
        let regions = vec![region(text, 0, 5, 7), region(text, 18, 22, 9)];

        let result = compile(&regions, text, &Options::default()).unwrap();
        assert_eq!(result, Conversion::Text("7 dwarves and 9 lives".to_string()));
    }

    #[test]
    fn test_whole_input_region_is_a_number() {
        let text = "seven";
        let regions = vec![region(text, 0, 5, 7)];
        assert_eq!(
            compile(&regions, text, &Options::default()).unwrap().as_number(),
            Some(7.0)
        );
    }

    #[test]
    fn test_output_modes() {
        let text = "nineteen, ninety";
        let regions = vec![region(text, 0, 8, 19), region(text, 10, 16, 90)];

        let options = Options {
            numbers_only: true,
            one_number: true,
            ..Options::default()
        };
        assert_eq!(
            compile(&regions, text, &options).unwrap(),
            Conversion::Numbers(vec![19.0, 90.0])
        );

        let options = Options {
            one_number: true,
            ..Options::default()
        };
        assert_eq!(
            compile(&regions, text, &options).unwrap(),
            Conversion::Number(1990.0)
        );
    }

    #[test]
    fn test_no_regions() {
        let text = "nothing here";
        let one_number = Options {
            one_number: true,
            ..Options::default()
        };
        assert_eq!(
            compile(&[], text, &one_number).unwrap().as_text(),
            Some("nothing here")
        );
        assert_eq!(
            compile(&[], text, &Options::default()).unwrap().as_text(),
            Some("nothing here")
        );
    }

    #[test]
    fn test_untagged_json() {
        assert_eq!(serde_json::to_string(&Conversion::Number(5.67)).unwrap(), "5.67");
        assert_eq!(
            serde_json::to_string(&Conversion::Numbers(vec![1.0, 2.5])).unwrap(),
            "[1.0,2.5]"
        );
        assert_eq!(
            serde_json::to_string(&Conversion::Text("22 mei".to_string())).unwrap(),
            "\"22 mei\""
        );
    }
}
