//! Text analysis module.
//!
//! Tokenizers turn text into tokens, token sources feed them one at a time,
//! and filters transform the resulting streams. The centerpiece is the
//! [`PrefixedShingleFilter`](token_filter::PrefixedShingleFilter).

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod token_source;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use token_source::*;
pub use tokenizer::*;
