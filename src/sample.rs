//! The `sample` command: build a generator from CLI arguments and print
//! its samples as JSON lines.

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use fuzz_core::{FuzzConfig, Thunk};
use fuzz_generator::generators::{array, boolean, date, logic, number, string, unicode};
use fuzz_generator::{Fuzzer, Uniform, UniformBigInt};
use serde_json::Value as JsonValue;
use std::io::Write;
use std::path::PathBuf;

/// What to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Integer in `[min, max)`
    Int,
    /// Real number in `[min, max)`
    Real,
    /// `true` or `false`
    Bool,
    /// RFC 3339 date in `[from, to)`
    Date,
    /// String of decimal digits
    Digits,
    /// String of lowercase ASCII letters
    Word,
    /// String of characters from one Unicode block
    Unicode,
    /// Random subset of the integers in `[min, max)`
    Subset,
}

/// Arguments of the `sample` command.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Kind of value to generate
    #[arg(value_enum)]
    pub kind: SampleKind,

    /// Number of samples to print
    #[arg(long, default_value = "10")]
    pub count: u64,

    /// Seed for reproducible output (overrides the config file)
    #[arg(long, env = "FUZZCOMB_SEED")]
    pub seed: Option<u64>,

    /// YAML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Unicode block for the `unicode` kind
    #[arg(long, default_value = "Basic Latin")]
    pub block: String,

    /// Lower bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Upper bound (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Earliest date for `date`: RFC 3339, YYYY-MM-DD or epoch milliseconds
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<String>,

    /// End date (exclusive) for `date`, "now" when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<String>,

    /// Longest string for the string kinds
    #[arg(long, default_value = "12")]
    pub max_len: usize,
}

impl SampleArgs {
    /// Load the config file, if any, and apply the seed override.
    pub fn load_config(&self) -> anyhow::Result<FuzzConfig> {
        let config = match &self.config {
            Some(path) => FuzzConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {path:?}"))?,
            None => FuzzConfig::default(),
        };

        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

/// Largest item count the `subset` kind accepts; the index space is `2^n`.
pub const MAX_SUBSET_ITEMS: i64 = 52;

/// Parse a date bound given as epoch milliseconds or a date string.
pub fn parse_date_bound(text: &str) -> anyhow::Result<i64> {
    if let Ok(millis) = text.parse::<i64>() {
        return Ok(millis);
    }

    date::parse_millis(text).with_context(|| {
        format!("Invalid date {text:?}: expected RFC 3339, YYYY-MM-DD or epoch milliseconds")
    })
}

fn string_length(max_len: usize) -> Thunk<usize> {
    number::uniform(1usize, max_len.saturating_add(1))
}

/// Build the generator for `args.kind`, with samples converted to JSON.
pub fn build_generator(args: &SampleArgs) -> anyhow::Result<Thunk<JsonValue>> {
    let min = args.min.unwrap_or(0);

    let generator = match args.kind {
        SampleKind::Int => {
            let max = args.max.unwrap_or(100);
            logic::mapped(JsonValue::from, number::uniform(min, max))
        }
        SampleKind::Real => {
            let max = args.max.unwrap_or(1);
            logic::mapped(
                JsonValue::from,
                number::uniform_continuous(min as f64, max as f64),
            )
        }
        SampleKind::Bool => logic::mapped(JsonValue::from, boolean::one_of(Uniform)),
        SampleKind::Date => {
            let from = match &args.from {
                Some(text) => parse_date_bound(text)?,
                None => 0,
            };
            let dates = match &args.to {
                Some(text) => date::uniform(from, parse_date_bound(text)?),
                None => date::past_uniform(from),
            };
            logic::mapped(|dt: DateTime<Utc>| JsonValue::from(dt.to_rfc3339()), dates)
        }
        SampleKind::Digits => logic::mapped(
            JsonValue::from,
            string::from(string::digit(Uniform), string_length(args.max_len)),
        ),
        SampleKind::Word => logic::mapped(
            JsonValue::from,
            string::from(string::lowercase_letter(Uniform), string_length(args.max_len)),
        ),
        SampleKind::Unicode => {
            let chars = unicode::block(Uniform, &args.block)
                .with_context(|| format!("Cannot sample from block {:?}", args.block))?;
            logic::mapped(
                JsonValue::from,
                string::from(chars, string_length(args.max_len)),
            )
        }
        SampleKind::Subset => {
            let max = args.max.unwrap_or(8);
            let span = max
                .checked_sub(min)
                .with_context(|| format!("Subset range [{min}, {max}) overflows"))?;
            if span > MAX_SUBSET_ITEMS {
                bail!(
                    "Subset range [{min}, {max}) has {span} items, at most {MAX_SUBSET_ITEMS} are supported"
                );
            }
            let items: Vec<i64> = (min..max).collect();
            logic::mapped(JsonValue::from, array::choose(items, UniformBigInt))
        }
    };

    Ok(generator)
}

/// Run the `sample` command, writing one JSON value per line to `out`.
pub fn run_sample<W: Write>(args: &SampleArgs, out: &mut W) -> anyhow::Result<()> {
    let config = args.load_config()?;
    let generator = build_generator(args)?;

    tracing::info!("Sampling {} x {:?}", args.count, args.kind);
    if let Some(seed) = config.seed {
        tracing::info!("Seed: {seed}");
    }

    let mut fuzzer = Fuzzer::from_config(config);
    for (idx, sample) in fuzzer.samples(&generator, args.count).enumerate() {
        let value = sample.with_context(|| format!("Failed to generate sample {idx}"))?;
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    }

    Ok(())
}
