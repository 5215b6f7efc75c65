//! Command line argument parsing for the prefix-shingle CLI using clap.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::ShingleConfig;
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// prefix-shingle - Emit prefixed shingles for text
#[derive(Parser, Debug, Clone)]
#[command(name = "prefix-shingle")]
#[command(about = "Emit prefixed shingles: the first word joined to n-grams of the rest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShingleCliArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShingleCliArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text into prefixed shingles
    Shingle(ShingleArgs),

    /// Validate a JSON shingle configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Arguments for shingling text
#[derive(Parser, Debug, Clone)]
pub struct ShingleArgs {
    /// Text to analyze; each line of stdin is analyzed separately when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// JSON configuration file; flags below override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Minimum shingle size
    #[arg(long)]
    pub min_size: Option<usize>,

    /// Maximum shingle size
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Do not emit single-word tokens
    #[arg(long)]
    pub no_unigrams: bool,

    /// Emit single-word tokens when the text is too short for any shingle
    #[arg(long)]
    pub unigrams_if_no_shingles: bool,

    /// Separator between words
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Concatenate words without a separator
    #[arg(long, conflicts_with = "separator")]
    pub no_separator: bool,

    /// Tokenizer used to split the input
    #[arg(short, long, default_value = "whitespace")]
    pub tokenizer: TokenizerKind,
}

impl ShingleArgs {
    /// Build the effective configuration: config file (or defaults), then
    /// flags. Only the merged result is validated.
    pub fn shingle_config(&self) -> Result<ShingleConfig> {
        let mut config = match &self.config {
            Some(path) => ShingleConfig::read_file(path)?,
            None => ShingleConfig::default(),
        };

        if let Some(min) = self.min_size {
            config.min_shingle_size = min;
        }
        if let Some(max) = self.max_size {
            config.max_shingle_size = max;
        }
        if self.no_unigrams {
            config.output_unigrams = false;
        }
        if self.unigrams_if_no_shingles {
            config.output_unigrams_if_no_shingles = true;
        }
        if self.no_separator {
            config.token_separator = None;
        } else if let Some(separator) = &self.separator {
            config.token_separator = Some(separator.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for validating a configuration file
#[derive(Parser, Debug, Clone)]
pub struct ValidateConfigArgs {
    /// Path to the JSON configuration file
    #[arg(value_name = "CONFIG_FILE")]
    pub config: PathBuf,
}

/// Tokenizers available from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    /// Split on whitespace
    Whitespace,
    /// Split on Unicode word boundaries, dropping punctuation
    UnicodeWord,
}

impl TokenizerKind {
    /// Instantiate the tokenizer.
    pub fn build(&self) -> Arc<dyn Tokenizer> {
        match self {
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output, one document per analyzed text
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shingle_command() {
        let args = ShingleCliArgs::try_parse_from([
            "prefix-shingle",
            "shingle",
            "--max-size",
            "3",
            "--no-unigrams",
            "-t",
            "unicode-word",
            "prefix please divide",
        ])
        .unwrap();

        let Command::Shingle(shingle) = &args.command else {
            panic!("expected shingle command");
        };
        assert_eq!(shingle.text.as_deref(), Some("prefix please divide"));
        assert_eq!(shingle.tokenizer, TokenizerKind::UnicodeWord);

        let config = shingle.shingle_config().unwrap();
        assert_eq!(config.max_shingle_size, 3);
        assert!(!config.output_unigrams);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_separator_flags_conflict() {
        let result = ShingleCliArgs::try_parse_from([
            "prefix-shingle",
            "shingle",
            "--separator",
            "+",
            "--no-separator",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let args = ShingleCliArgs::try_parse_from([
            "prefix-shingle",
            "shingle",
            "--min-size",
            "4",
            "--max-size",
            "3",
        ])
        .unwrap();
        let Command::Shingle(shingle) = &args.command else {
            panic!("expected shingle command");
        };
        assert!(shingle.shingle_config().is_err());
    }

    #[test]
    fn test_flags_complete_partial_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shingle.json");
        std::fs::write(&path, r#"{"min_shingle_size": 3}"#).unwrap();
        assert!(ShingleConfig::from_file(&path).is_err());

        let args = ShingleCliArgs::try_parse_from([
            "prefix-shingle",
            "shingle",
            "--config",
            path.to_str().unwrap(),
            "--max-size",
            "4",
        ])
        .unwrap();
        let Command::Shingle(shingle) = &args.command else {
            panic!("expected shingle command");
        };
        let config = shingle.shingle_config().unwrap();
        assert_eq!(config.min_shingle_size, 3);
        assert_eq!(config.max_shingle_size, 4);

        let args = ShingleCliArgs::try_parse_from([
            "prefix-shingle",
            "shingle",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let Command::Shingle(shingle) = &args.command else {
            panic!("expected shingle command");
        };
        assert!(matches!(
            shingle.shingle_config(),
            Err(crate::error::ShingleError::Config(_))
        ));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            ShingleCliArgs::try_parse_from(["prefix-shingle", "-vv", "-q", "validate-config", "x.json"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
