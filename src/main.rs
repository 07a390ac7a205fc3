//! Toolbelt - CLI Entry Point
//!
//! Commands:
//! - `toolbelt encode <N>...` - Integers to balanced quinary
//! - `toolbelt decode <NUMERAL>...` - Balanced quinary to integers
//! - `toolbelt negate <NUMERAL>...` - Digit-wise negation
//! - `toolbelt sum <FILE>` - Sum one numeral per line
//! - `toolbelt merge <FILE>` - Merge `lower upper` intervals, one per line

use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};
use serde::Serialize;
use toolbelt::{Interval, Numeral};
use toolbelt::quinary;

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(version)]
#[command(about = "Balanced quinary conversion and interval merging")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode integers as balanced quinary numerals
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode balanced quinary numerals into integers
    Decode {
        #[arg(required = true, allow_hyphen_values = true)]
        numerals: Vec<String>,
    },
    /// Negate balanced quinary numerals digit by digit
    Negate {
        #[arg(required = true, allow_hyphen_values = true)]
        numerals: Vec<String>,
    },
    /// Sum a file of balanced quinary numerals, one per line
    Sum {
        file: PathBuf,
    },
    /// Merge overlapping half-open intervals, one `lower upper` pair per line
    Merge {
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct Conversion {
    value: Option<i64>,
    numeral: String,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    match cli.command {
        Commands::Encode { values } => encode_values(&values, cli.json),
        Commands::Decode { numerals } => decode_numerals(&numerals, cli.json),
        Commands::Negate { numerals } => negate_numerals(&numerals, cli.json),
        Commands::Sum { file } => sum_file(&file, cli.json),
        Commands::Merge { file } => merge_file(&file, cli.json),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
    use tracing_subscriber::filter::LevelFilter;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(LevelFilter::DEBUG)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => fail(e),
    }
}

fn print_conversions(conversions: &[Conversion], json: bool) {
    if json {
        print_json(&conversions);
        return;
    }
    for c in conversions {
        match c.value {
            Some(value) => println!("{}\t{}", value, c.numeral),
            None => println!("(out of i64 range)\t{}", c.numeral),
        }
    }
}

fn encode_values(values: &[i64], json: bool) {
    let conversions: Vec<Conversion> = values
        .iter()
        .map(|&value| Conversion { value: Some(value), numeral: quinary::encode(value) })
        .collect();
    print_conversions(&conversions, json);
}

fn decode_numerals(numerals: &[String], json: bool) {
    let conversions: Vec<Conversion> = numerals
        .iter()
        .map(|numeral| match quinary::decode(numeral) {
            Ok(value) => Conversion { value: Some(value), numeral: numeral.clone() },
            Err(e) => fail(format!("{}: {}", numeral, e)),
        })
        .collect();
    print_conversions(&conversions, json);
}

fn negate_numerals(numerals: &[String], json: bool) {
    // negate() panics on bad digits, so command-line input is checked first
    let conversions: Vec<Conversion> = numerals
        .iter()
        .map(|numeral| match numeral.parse::<Numeral>() {
            Ok(parsed) => Conversion {
                value: (-parsed).to_i64().ok(),
                numeral: quinary::negate(numeral),
            },
            Err(e) => fail(format!("{}: {}", numeral, e)),
        })
        .collect();
    print_conversions(&conversions, json);
}

fn sum_file(path: &Path, json: bool) {
    let lines = toolbelt::lines::read_lines(path).unwrap_or_else(|e| fail(e));

    let mut numerals = Vec::with_capacity(lines.len());
    for (line_num, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<Numeral>() {
            Ok(n) => numerals.push(n),
            Err(e) => fail(format!("{}:{}: {}", path.display(), line_num + 1, e)),
        }
    }
    tracing::debug!(count = numerals.len(), "summing numerals");

    let total: Numeral = numerals.iter().sum();
    print_conversions(
        &[Conversion { value: total.to_i64().ok(), numeral: total.to_string() }],
        json,
    );
}

fn parse_interval(line: &str) -> Result<Interval, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(format!("expected `lower upper`, found {} fields", fields.len()));
    }
    let bounds = toolbelt::convert::parse_i64s(fields.as_slice()).map_err(|e| e.to_string())?;
    Ok(Interval::new(bounds[0], bounds[1]))
}

fn merge_file(path: &Path, json: bool) {
    let lines = toolbelt::lines::read_lines(path).unwrap_or_else(|e| fail(e));

    let mut intervals = Vec::with_capacity(lines.len());
    for (line_num, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_interval(line) {
            Ok(interval) => intervals.push(interval),
            Err(e) => fail(format!("{}:{}: {}", path.display(), line_num + 1, e)),
        }
    }

    let merged = toolbelt::interval::merge(intervals);
    if json {
        print_json(&merged);
        return;
    }
    for interval in &merged {
        println!("{} {}", interval.lower, interval.upper);
    }
    let covered: u64 = merged.iter().map(Interval::len).sum();
    eprintln!("{} interval(s), {} integer(s) covered", merged.len(), covered);
}
