//! Command implementations for the prefix-shingle CLI.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::analysis::analyzer::ShingleAnalyzer;
use crate::analysis::token_filter::ShingleConfig;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: ShingleCliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Shingle(shingle_args) => {
            let stdin = io::stdin();
            run_shingle(shingle_args, &args, stdin.lock(), &mut out)
        }
        Command::ValidateConfig(validate_args) => validate_config(validate_args, &args, &mut out),
    }
}

/// Shingle the TEXT argument, or every line of `input` when it is absent.
pub fn run_shingle<R, W>(
    args: &ShingleArgs,
    cli_args: &ShingleCliArgs,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let config = args.shingle_config()?;
    info!(
        "Shingle sizes {}..={}, unigrams: {}, tokenizer: {:?}",
        config.min_shingle_size, config.max_shingle_size, config.output_unigrams, args.tokenizer
    );

    let mut analyzer = ShingleAnalyzer::new(args.tokenizer.build(), config)?;

    match &args.text {
        Some(text) => analyze_text(&mut analyzer, text, cli_args, out),
        None => analyze_lines(&mut analyzer, input, cli_args, out),
    }
}

/// Analyze each line of `input` as an independent token stream.
fn analyze_lines<R, W>(
    analyzer: &mut ShingleAnalyzer,
    input: R,
    cli_args: &ShingleCliArgs,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        analyze_text(analyzer, &line, cli_args, out)?;
        lines += 1;
    }
    info!("Analyzed {lines} line(s)");
    Ok(())
}

fn analyze_text<W: Write>(
    analyzer: &mut ShingleAnalyzer,
    text: &str,
    cli_args: &ShingleCliArgs,
    out: &mut W,
) -> Result<()> {
    let tokens = analyzer.analyze(text)?;
    debug!("{:?} -> {} token(s)", text, tokens.len());

    let result = AnalysisResult {
        input: text.to_string(),
        prefix: analyzer.prefix().map(str::to_string),
        tokens,
    };
    output_result(out, &result, cli_args)
}

/// Load and validate a configuration file.
pub fn validate_config<W: Write>(
    args: &ValidateConfigArgs,
    cli_args: &ShingleCliArgs,
    out: &mut W,
) -> Result<()> {
    info!("Validating config: {}", args.config.display());

    let config = ShingleConfig::from_file(&args.config)?;
    let result = ConfigValidationResult {
        path: args.config.display().to_string(),
        config,
    };
    output_result(out, &result, cli_args)
}
