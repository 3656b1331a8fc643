pub mod compile;
pub mod eval;
pub mod options;
pub mod segment;

pub use compile::{compile, Conversion};
pub use options::Options;
pub use segment::segment;

use numeral_lexicon::locale;
use numeral_parser::{match_regions, Lexer};
use numeral_protocol::Result;
use tracing::{debug, warn};

/// Converts the written-out numbers in `text`.
///
/// ```
/// use numeral_solver::{convert, Conversion, Options};
///
/// let result = convert("two hundred thousand", &Options::default()).unwrap();
/// assert_eq!(result, Conversion::Number(200000.0));
/// ```
pub fn convert(text: &str, options: &Options) -> Result<Conversion> {
    let locale = locale(options.language);

    let tokens = Lexer::new(locale).tokenize(text)?;
    let mut regions = match_regions(tokens, locale);
    for region in &mut regions {
        region.sub_regions = segment(&region.tokens)?;
    }

    debug!(
        language = %options.language,
        regions = regions.len(),
        sub_regions = regions.iter().map(|r| r.sub_regions.len()).sum::<usize>(),
        "segmented"
    );

    if options.debug {
        match serde_json::to_string(&regions) {
            Ok(json) => debug!(target: "numeral::regions", %json, "region structure"),
            Err(err) => warn!(%err, "could not serialize regions"),
        }
    }

    compile(&regions, text, options)
}
