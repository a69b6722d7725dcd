//! `cartridge`: relative dates, own-path checks and multiplication from the shell.
//!
//! Usage:
//!   cartridge relative 2026-10-18T16:30:00Z 2026-10-19T09:00:00Z
//!   cartridge relative 1792427400000 2026-10-19T09:00:00Z --locale fr-CH --tz Europe/Zurich
//!   cartridge has-path '{"a":{"b":2}}' a.b
//!   echo '[1,2,3]' | cartridge has-path - 2
//!   cartridge multiply 6 4
//!
//! Logging goes to stderr; `--verbose` or `RUST_LOG=debug` shows token selection.

use std::io::{self, Read};

use anyhow::{anyhow, bail, Context, Result};
use chrono::DateTime;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use object_path::{has_path, MULTIPLY};
use relative_date::locale::{available, by_code};
use relative_date::{describe_relative_args, DateValue, FormatOptions};

#[derive(Parser, Debug)]
#[command(name = "cartridge", version)]
#[command(about = "Relative date phrasing, own-path checks and multiplication")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Phrase DATE relative to BASE ("yesterday at 4:30 PM")
    Relative {
        /// DATE then BASE, each RFC 3339 or epoch milliseconds
        #[arg(allow_negative_numbers = true)]
        dates: Vec<String>,

        /// Locale code
        #[arg(short, long, default_value = "en-US")]
        locale: String,

        /// IANA timezone whose calendar and clock are used
        #[arg(long, default_value = "UTC")]
        tz: String,

        /// First day of the week, 0 (Sunday) to 6 (Saturday)
        #[arg(long, default_value_t = 0)]
        week_starts_on: u8,

        /// Print token, pattern and result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether PATH is an own-property path of a JSON document
    HasPath {
        /// JSON document, or `-` to read stdin
        document: String,

        /// Path such as `a.b`, `a[0].b` or `a["b.c"]`
        path: String,
    },

    /// Multiply two values, coercing them to numbers
    Multiply {
        multiplier: String,
        multiplicand: String,
    },

    /// List built-in locales
    Locales,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let output = match cli.command {
        Command::Relative {
            dates,
            locale,
            tz,
            week_starts_on,
            json,
        } => relative(&dates, &locale, &tz, week_starts_on, json)?,
        Command::HasPath { document, path } => has_path_command(&document, &path)?,
        Command::Multiply {
            multiplier,
            multiplicand,
        } => multiply_command(&multiplier, &multiplicand),
        Command::Locales => available().join("\n"),
    };

    println!("{output}");
    Ok(())
}

fn relative(dates: &[String], locale: &str, tz: &str, week_starts_on: u8, json: bool) -> Result<String> {
    let locale = by_code(locale).with_context(|| {
        format!(
            "unknown locale '{locale}' (available: {})",
            available().join(", ")
        )
    })?;
    let timezone: Tz = tz
        .parse()
        .map_err(|_| anyhow!("invalid timezone '{tz}'"))?;

    let dates = dates
        .iter()
        .map(|s| parse_date(s))
        .collect::<Result<Vec<_>>>()?;

    let options = FormatOptions::default()
        .with_locale(locale)
        .with_timezone(timezone)
        .with_week_starts_on(week_starts_on);

    tracing::debug!(locale = locale.code(), %timezone, "formatting relative date");
    let description = describe_relative_args(&dates, &options)?;

    if json {
        Ok(serde_json::to_string(&description)?)
    } else {
        Ok(description.formatted)
    }
}

/// RFC 3339, integer milliseconds, or any float (including `NaN`).
fn parse_date(s: &str) -> Result<DateValue> {
    let s = s.trim();
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(DateValue::Millis(ms));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(DateValue::from(dt));
    }
    if let Ok(ms) = s.parse::<f64>() {
        return Ok(DateValue::FloatMillis(ms));
    }
    bail!("invalid date '{s}': expected RFC 3339 or epoch milliseconds")
}

fn has_path_command(document: &str, path: &str) -> Result<String> {
    let text = if document == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        document.to_string()
    };
    let value: Value = serde_json::from_str(&text).context("invalid JSON document")?;
    Ok(has_path(&value, path).to_string())
}

fn multiply_command(multiplier: &str, multiplicand: &str) -> String {
    let product = MULTIPLY.apply_values(Some(&operand(multiplier)), Some(&operand(multiplicand)));
    format_number(product)
}

/// JSON when it parses (`6`, `true`, `null`), otherwise a string.
fn operand(s: &str) -> Value {
    serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_string()))
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(parse_date("0").unwrap(), DateValue::Millis(0));
        assert!(matches!(
            parse_date("2026-10-19T09:00:00+02:00").unwrap(),
            DateValue::Instant(_)
        ));
        assert!(matches!(parse_date("NaN").unwrap(), DateValue::FloatMillis(n) if n.is_nan()));
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(24.0), "24");
        assert_eq!(format_number(-6.0), "-6");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_operand_falls_back_to_string() {
        assert_eq!(operand("6"), Value::from(6));
        assert_eq!(operand("six"), Value::String("six".to_string()));
    }

    #[test]
    fn test_negative_millis_are_dates_not_flags() {
        let cli = Cli::try_parse_from(["cartridge", "relative", "-5000", "0"]).unwrap();
        match cli.command {
            Command::Relative { dates, .. } => assert_eq!(dates, ["-5000", "0"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
