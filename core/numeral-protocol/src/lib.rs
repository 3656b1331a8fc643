pub mod error;
pub mod language;
pub mod lexeme;

// Re-export core types for convenience
pub use error::{NumeralError, Result};
pub use language::Language;
pub use lexeme::{LexemeClass, NumeralFlags, SubRegionKind};

pub mod model;
pub use model::*;
