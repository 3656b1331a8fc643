use numeral_lexicon::Locale;
use numeral_protocol::{LexemeClass, Region, Token};

/// Groups tokens into numeral phrases, left to right.
///
/// Delimiters and joiners are stepped over without closing the open region,
/// so "three hundred and twenty one" stays one phrase. A plain word, or a
/// second decimal marker, closes it.
pub fn match_regions<'a>(tokens: Vec<Token<'a>>, locale: &dyn Locale) -> Vec<Region<'a>> {
    // A lone "a" is an article, not a number
    if let [only] = tokens.as_slice() {
        if locale.is_singular_article(&only.normalized) {
            return Vec::new();
        }
    }

    let mut regions = Vec::new();
    let mut open: Option<Region<'a>> = None;

    for token in tokens {
        let class = token.class;

        match class {
            LexemeClass::Punctuation | LexemeClass::Whitespace | LexemeClass::Joiner => {}
            LexemeClass::Decimal => match open.as_mut() {
                None => open = Some(Region::start(token)),
                Some(region) if !region.has_decimal => region.push(token),
                Some(_) => regions.extend(open.take()),
            },
            LexemeClass::Unit | LexemeClass::Ten | LexemeClass::Magnitude => match open.as_mut() {
                Some(region) if continues(region, class) => region.push(token),
                _ => {
                    regions.extend(open.take());
                    open = Some(Region::start(token));
                }
            },
            LexemeClass::Plain => regions.extend(open.take()),
        }
    }

    regions.extend(open);
    regions
}

fn continues(region: &Region<'_>, next: LexemeClass) -> bool {
    region
        .last()
        .is_some_and(|last| last.class.can_precede(next, region.has_decimal))
}
