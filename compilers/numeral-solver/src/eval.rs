use numeral_protocol::{LexemeClass, NumeralError, Result, SubRegion, SubRegionKind};

/// Sum of one subregion. Unit and ten groups are single words; a magnitude
/// group adds units and tens and multiplies by magnitudes, left to right.
///
/// Saturates instead of overflowing on absurd magnitude chains.
pub fn sub_region_sum(sub: &SubRegion<'_>) -> Result<u128> {
    match sub.kind {
        SubRegionKind::Decimal => Ok(0),
        SubRegionKind::Unit | SubRegionKind::Ten => match sub.tokens.as_slice() {
            [only] => Ok(only.value.unwrap_or(0)),
            tokens => Err(NumeralError::MalformedSubRegion {
                kind: sub.kind,
                found: tokens.len(),
            }),
        },
        SubRegionKind::Magnitude => Ok(sub.tokens.iter().fold(0u128, |sum, token| {
            let value = token.value.unwrap_or(0);
            match token.class {
                // "hundred" on its own is 100, not 0
                LexemeClass::Magnitude => sum.max(1).saturating_mul(value),
                LexemeClass::Unit | LexemeClass::Ten => sum.saturating_add(value),
                _ => sum,
            }
        })),
    }
}

/// Value of a segmented region.
///
/// Groups after the decimal marker form the fraction as a digit string:
/// "five point twenty one" is 5.21 and "five point five hundred twenty one"
/// is 5.521.
pub fn evaluate(sub_regions: &[SubRegion<'_>]) -> Result<f64> {
    let mut integer = 0u128;
    let mut fraction = 0u128;
    let mut past_point = false;

    for sub in sub_regions {
        if sub.kind == SubRegionKind::Decimal {
            past_point = true;
        }
        let sum = sub_region_sum(sub)?;
        if past_point {
            fraction = fraction.saturating_add(sum);
        } else {
            integer = integer.saturating_add(sum);
        }
    }

    Ok(leading_number(&format!("{integer}.{fraction}")))
}

/// Parses the longest numeric prefix of `text` ("5.23.1" reads as 5.23).
/// NaN when there is none.
pub(crate) fn leading_number(text: &str) -> f64 {
    let mut seen_point = false;
    let end = text
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' && !seen_point {
                seen_point = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map_or(text.len(), |(at, _)| at);

    text[..end].parse().unwrap_or(f64::NAN)
}
