//! numconv - Inspect integer and float wire bytes
//!
//! Thin command-line front end over numcodec: encode a number to bytes,
//! decode bytes back to a number, or re-render a byte sequence.

mod commands;
mod config;

use crate::commands::Kind;
use crate::config::OutputFormat;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use numcodec::Endianness;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "numconv")]
#[command(about = "numconv - inspect integer and float wire bytes")]
#[command(long_about = "numconv - inspect integer and float wire bytes

Commands:
  encode      Encode a number to bytes
  decode      Decode hex bytes to a number
  render      Re-render hex bytes as hex and/or bit groups

Byte order rules:
  i16         big-endian only
  i32, i64    big-endian (exact width) or little-endian (zero-extended)
  f32, f64    little-endian only (raw IEEE-754 bits)
  The configured default order applies to i32/i64 only.

Examples:
  numconv encode i32 1                  # 00000001
  numconv encode i32 1 --endian le      # 01000000
  numconv encode f32 0x7FC00001         # NaN with payload, by bit pattern
  numconv decode i32 FF -e le           # 255 (no sign extension)
  numconv render 0AFF --format bits     # 00001010 11111111")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a number to bytes
    Encode {
        /// Numeric kind
        kind: Kind,

        /// Decimal value, or 0x-prefixed raw bit pattern
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Byte order: be/le (i32/i64 default from config; i16 is always be, floats le)
        #[arg(short, long, value_parser = parse_endian)]
        endian: Option<Endianness>,

        /// Text rendering (default from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Decode hex bytes to a number
    Decode {
        /// Numeric kind
        kind: Kind,

        /// Byte sequence as hex, e.g. 0AFF or "0a ff"
        bytes: String,

        /// Byte order: be/le (i32/i64 default from config; i16 is always be, floats le)
        #[arg(short, long, value_parser = parse_endian)]
        endian: Option<Endianness>,

        /// Require exactly 2 bytes (i16 only; rejected for other kinds)
        #[arg(long)]
        exact: bool,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Re-render hex bytes
    Render {
        /// Byte sequence as hex
        bytes: String,

        /// Text rendering (default from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

fn parse_endian(s: &str) -> std::result::Result<Endianness, String> {
    Endianness::parse(s).ok_or_else(|| format!("unknown byte order '{}' (use be or le)", s))
}

fn init_logging(verbose: bool, configured: &str) {
    let level = if verbose { "debug" } else { configured };
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.log_level);
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Encode {
            kind,
            value,
            endian,
            format,
            json,
        } => commands::encode(
            kind,
            &value,
            endian,
            config.endian,
            format.unwrap_or(config.format),
            json,
        ),
        Commands::Decode {
            kind,
            bytes,
            endian,
            exact,
            json,
        } => commands::decode(kind, &bytes, endian, config.endian, exact, json),
        Commands::Render { bytes, format } => {
            let bytes = commands::parse_hex(&bytes)?;
            Ok(commands::render(&bytes, format.unwrap_or(config.format)))
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode_with_negative_value() {
        let cli =
            Cli::try_parse_from(["numconv", "encode", "i32", "-1", "--endian", "le"]).unwrap();
        match cli.command {
            Commands::Encode {
                kind,
                value,
                endian,
                format,
                json,
            } => {
                assert_eq!(kind, Kind::I32);
                assert_eq!(value, "-1");
                assert_eq!(endian, Some(Endianness::LittleEndian));
                assert_eq!(format, None);
                assert!(!json);
            },
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_parse_decode_flags() {
        let cli = Cli::try_parse_from([
            "numconv", "decode", "i16", "00FF", "--exact", "--json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Decode {
                kind: Kind::I16,
                exact: true,
                json: true,
                endian: None,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["numconv", "encode", "i32", "1", "-e", "cdab"]).is_err());
    }

    #[test]
    fn test_parse_render_format() {
        let cli = Cli::try_parse_from(["numconv", "render", "0AFF", "-f", "both"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Render {
                format: Some(OutputFormat::Both),
                ..
            }
        ));
    }
}
