use numeral_protocol::{LexemeClass, Result, SubRegion, SubRegionKind, Token};

use crate::eval::sub_region_sum;

/// Kind of the group `class` lands in. Anything joining a magnitude group
/// keeps it a magnitude group.
fn kind_for(class: LexemeClass, open: Option<SubRegionKind>) -> Option<SubRegionKind> {
    match (class, open) {
        (LexemeClass::Decimal, _) => Some(SubRegionKind::Decimal),
        (_, Some(SubRegionKind::Magnitude)) => Some(SubRegionKind::Magnitude),
        _ => SubRegionKind::of(class),
    }
}

/// Whether the open group takes `token` as its new leftmost token.
///
/// A magnitude only scopes over smaller or equal magnitudes before it:
/// "honderdduizend" is one group, "duizendhonderd" is two.
fn absorbs(open: &SubRegion<'_>, token: &Token<'_>) -> bool {
    let Some(placed) = open.placed() else {
        return true;
    };

    match (placed.class, token.class) {
        (LexemeClass::Decimal, _) => false,
        (LexemeClass::Magnitude, LexemeClass::Unit | LexemeClass::Ten) => true,
        (LexemeClass::Magnitude, LexemeClass::Magnitude) => token.value <= placed.value,
        (LexemeClass::Ten, LexemeClass::Unit) => true,
        (LexemeClass::Unit, LexemeClass::Ten) => open.kind == SubRegionKind::Magnitude,
        _ => false,
    }
}

/// Splits a region's tokens into place-value groups.
///
/// Runs right to left: a magnitude word scopes over the words before it, so
/// "two hundred thousand" is one group and "six hundred twenty two thousand"
/// starts as two ("six hundred", "twenty two thousand") until merged.
pub fn segment<'a>(tokens: &[Token<'a>]) -> Result<Vec<SubRegion<'a>>> {
    let mut groups: Vec<SubRegion<'a>> = Vec::new();

    for token in tokens.iter().rev() {
        let class = token.class;
        let open_kind = groups.last().map(|open| open.kind);

        match groups.last_mut() {
            Some(open) if absorbs(open, token) => {
                if let Some(kind) = kind_for(class, open_kind) {
                    open.kind = kind;
                }
                open.tokens.insert(0, token.clone());
            }
            _ => {
                let Some(kind) = kind_for(class, open_kind) else {
                    continue;
                };
                groups.push(SubRegion::new(kind, token.clone()));
            }
        }
    }

    groups.reverse();
    merge(groups)
}

/// One left-to-right sweep joining a magnitude group with a larger group to
/// its right. A merged group is not compared again with its new neighbour.
fn merge(mut groups: Vec<SubRegion<'_>>) -> Result<Vec<SubRegion<'_>>> {
    let mut i = 1;
    while i < groups.len() {
        let left = &groups[i - 1];
        if left.kind == SubRegionKind::Magnitude && sub_region_sum(left)? < sub_region_sum(&groups[i])? {
            let right = groups.remove(i);
            let left = &mut groups[i - 1];
            left.tokens.extend(right.tokens);
            left.kind = right.kind;
        }
        i += 1;
    }
    Ok(groups)
}
