//! Example demonstrating prefixed shingles over whitespace-tokenized text.

use std::sync::Arc;

use prefix_shingle::analysis::analyzer::ShingleAnalyzer;
use prefix_shingle::prelude::*;

fn main() -> Result<()> {
    println!("=== Prefixed Shingle Examples ===\n");

    // Example 1: Default bigrams with unigrams
    println!("1. Default configuration:");
    let text = "user42 red running shoes";
    print_tokens(text, ShingleConfig::default())?;

    // Example 2: Shingles only, up to three words
    println!("\n2. Trigrams without unigrams:");
    print_tokens(
        text,
        ShingleConfig::with_max_size(3).with_output_unigrams(false),
    )?;

    // Example 3: Custom separator
    println!("\n3. Custom separator:");
    print_tokens(
        text,
        ShingleConfig::default().with_token_separator(Some("+")),
    )?;

    // Example 4: Too short for any shingle
    println!("\n4. Unigram fallback:");
    print_tokens(
        "user42 shoes",
        ShingleConfig::default()
            .with_output_unigrams(false)
            .with_output_unigrams_if_no_shingles(true),
    )?;

    // Example 5: A position removed upstream
    println!("\n5. Filler for a removed word:");
    let tokens = vec![
        Token::with_offsets("user42", 0, 6),
        Token::with_offsets("red", 7, 10),
        Token::with_offsets("shoes", 18, 23).with_position_increment(2),
    ];
    let stream = PrefixedShingleFilter::new().stream(VecTokenSource::new(tokens))?;
    for token in stream {
        print_token(&token?);
    }

    Ok(())
}

fn print_tokens(text: &str, config: ShingleConfig) -> Result<()> {
    let mut analyzer = ShingleAnalyzer::new(Arc::new(WhitespaceTokenizer::new()), config)?;
    println!("  Input: {text:?}");
    for token in analyzer.analyze(text)? {
        print_token(&token);
    }
    Ok(())
}

fn print_token(token: &Token) {
    println!(
        "  {:<28} [{}..{}] pos_inc={} {}",
        token.text, token.start_offset, token.end_offset, token.position_increment, token.token_type
    );
}
