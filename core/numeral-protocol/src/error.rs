use thiserror::Error;

use crate::lexeme::SubRegionKind;

/// Fatal errors. Each one aborts the conversion call that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// A unit or ten subregion holds zero or several tokens.
    /// Points at a segmentation defect, never at bad input.
    #[error("{kind:?} subregion must hold exactly one token, found {found}")]
    MalformedSubRegion { kind: SubRegionKind, found: usize },

    /// A chunk holds numerals at both edges but no joining infix between them.
    #[error("cannot split compound '{chunk}': no joining infix between '{head}' and '{tail}'")]
    UnparseableCompound {
        chunk: String,
        head: String,
        tail: String,
    },

    #[error("unsupported language tag '{0}'")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, NumeralError>;
