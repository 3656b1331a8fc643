use anyhow::Context;
use clap::Parser;
use numeral_protocol::Language;
use numeral_solver::{convert, Conversion, Options};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Replaces written-out numbers with digits")]
struct Cli {
    /// Text to convert. Read from stdin when absent
    text: Option<String>,

    /// Locale tag: en-us, nl-nl or de-de
    #[arg(short, long, value_name = "TAG")]
    language: Option<Language>,

    /// Print only the numbers found, one per line
    #[arg(long)]
    numbers_only: bool,

    /// Glue every number found into a single one
    #[arg(long)]
    one_number: bool,

    /// Log the region structure to stderr
    #[arg(long)]
    debug: bool,

    /// JSON options file; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// File options first, command line flags on top.
    fn options(&self) -> anyhow::Result<Options> {
        let mut options = match &self.options {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading options from {}", path.display()))?;
                Options::from_json(&json).map_err(anyhow::Error::msg)?
            }
            None => Options::default(),
        };

        if let Some(language) = self.language {
            options.language = language;
        }
        options.numbers_only |= self.numbers_only;
        options.one_number |= self.one_number;
        options.debug |= self.debug;
        Ok(options)
    }

    fn text(&self) -> anyhow::Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("reading text from stdin")?;
                Ok(text.trim_end_matches(['\r', '\n']).to_string())
            }
        }
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(conversion: &Conversion) -> String {
    match conversion {
        Conversion::Text(text) => text.clone(),
        Conversion::Number(value) => value.to_string(),
        Conversion::Numbers(values) => values
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.options()?;
    init_logging(options.debug);

    let text = cli.text()?;
    debug!(language = %options.language, bytes = text.len(), "converting");

    let conversion = convert(&text, &options)
        .with_context(|| format!("converting {:?} as {}", text, options.language))?;

    if cli.json {
        println!("{}", serde_json::to_string(&conversion)?);
    } else {
        let rendered = render(&conversion);
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }
    Ok(())
}
