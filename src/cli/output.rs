//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_filter::ShingleConfig;
use crate::cli::args::{OutputFormat, ShingleCliArgs};
use crate::error::Result;

/// Result structure for one analyzed text.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input: String,
    pub prefix: Option<String>,
    pub tokens: Vec<Token>,
}

/// Result structure for config validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigValidationResult {
    pub path: String,
    pub config: ShingleConfig,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    /// Render for a terminal.
    fn render_human(&self) -> String;
}

impl HumanOutput for AnalysisResult {
    fn render_human(&self) -> String {
        let mut out = format!(
            "{} (prefix: {})\n",
            self.input,
            self.prefix.as_deref().unwrap_or("-")
        );
        if self.tokens.is_empty() {
            out.push_str("  no tokens\n");
            return out;
        }

        let width = self
            .tokens
            .iter()
            .map(|t| t.text.chars().count())
            .max()
            .unwrap_or(0)
            .max(4);
        out.push_str(&format!(
            "  {:<width$}  {:>5}  {:>5}  {:>7}  {}\n",
            "text", "start", "end", "pos_inc", "type"
        ));
        for token in &self.tokens {
            out.push_str(&format!(
                "  {:<width$}  {:>5}  {:>5}  {:>7}  {}\n",
                token.text,
                token.start_offset,
                token.end_offset,
                token.position_increment,
                token.token_type
            ));
        }
        out
    }
}

impl HumanOutput for ConfigValidationResult {
    fn render_human(&self) -> String {
        let separator = match &self.config.token_separator {
            Some(separator) => format!("{separator:?}"),
            None => "none".to_string(),
        };
        format!(
            "{}: ok\n  shingle sizes: {}..={}\n  unigrams: {}\n  unigrams if no shingles: {}\n  separator: {}\n",
            self.path,
            self.config.min_shingle_size,
            self.config.max_shingle_size,
            self.config.output_unigrams,
            self.config.output_unigrams_if_no_shingles,
            separator
        )
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(out: &mut W, result: &T, args: &ShingleCliArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => output_human(out, result),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput, W: Write>(out: &mut W, result: &T) -> Result<()> {
    write!(out, "{}", result.render_human())?;
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(out: &mut W, result: &T, args: &ShingleCliArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
