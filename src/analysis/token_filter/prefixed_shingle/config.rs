//! Configuration for the prefixed shingle filter.
//!
//! # Examples
//!
//! ```
//! use prefix_shingle::analysis::token_filter::prefixed_shingle::ShingleConfig;
//!
//! let config = ShingleConfig::default()
//!     .with_max_shingle_size(3)
//!     .with_output_unigrams(false);
//! assert!(config.validate().is_ok());
//!
//! let config = ShingleConfig::default().with_min_shingle_size(4);
//! assert!(config.validate().is_err());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShingleError};

/// Default and minimum value for `min_shingle_size`.
pub const DEFAULT_MIN_SHINGLE_SIZE: usize = 2;

/// Default value for `max_shingle_size`.
pub const DEFAULT_MAX_SHINGLE_SIZE: usize = 2;

/// Default separator placed between the prefix and each word.
pub const DEFAULT_TOKEN_SEPARATOR: &str = " ";

/// Placeholder word for a position left empty by an upstream filter.
pub const FILLER_TOKEN: &str = "_";

/// Settings of a prefixed shingle filter.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs to list what it changes. A `null` separator means no separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShingleConfig {
    /// Smallest n-gram size emitted as a shingle (>= 2).
    pub min_shingle_size: usize,
    /// Largest n-gram size emitted as a shingle (>= `min_shingle_size`).
    pub max_shingle_size: usize,
    /// Emit single-word tokens (prefix + one word).
    pub output_unigrams: bool,
    /// Emit single-word tokens anyway when the stream is too short to
    /// produce any shingle. Only matters when `output_unigrams` is false.
    pub output_unigrams_if_no_shingles: bool,
    /// Separator between the prefix and each word; `None` concatenates.
    pub token_separator: Option<String>,
}

impl Default for ShingleConfig {
    fn default() -> Self {
        Self {
            min_shingle_size: DEFAULT_MIN_SHINGLE_SIZE,
            max_shingle_size: DEFAULT_MAX_SHINGLE_SIZE,
            output_unigrams: true,
            output_unigrams_if_no_shingles: false,
            token_separator: Some(DEFAULT_TOKEN_SEPARATOR.to_string()),
        }
    }
}

impl ShingleConfig {
    /// Configuration with shingles from 2 up to `max_shingle_size` words.
    pub fn with_max_size(max_shingle_size: usize) -> Self {
        Self::default().with_max_shingle_size(max_shingle_size)
    }

    /// Configuration with shingles from `min_shingle_size` up to `max_shingle_size` words.
    pub fn with_sizes(min_shingle_size: usize, max_shingle_size: usize) -> Self {
        Self::default()
            .with_min_shingle_size(min_shingle_size)
            .with_max_shingle_size(max_shingle_size)
    }

    /// Set the minimum shingle size.
    pub fn with_min_shingle_size(mut self, size: usize) -> Self {
        self.min_shingle_size = size;
        self
    }

    /// Set the maximum shingle size.
    pub fn with_max_shingle_size(mut self, size: usize) -> Self {
        self.max_shingle_size = size;
        self
    }

    /// Set whether unigrams are emitted.
    pub fn with_output_unigrams(mut self, output_unigrams: bool) -> Self {
        self.output_unigrams = output_unigrams;
        self
    }

    /// Set whether unigrams are emitted when no shingle can be produced.
    pub fn with_output_unigrams_if_no_shingles(mut self, enabled: bool) -> Self {
        self.output_unigrams_if_no_shingles = enabled;
        self
    }

    /// Set the token separator. `None` and `Some("")` behave the same.
    pub fn with_token_separator<S: Into<String>>(mut self, separator: Option<S>) -> Self {
        self.token_separator = separator.map(Into::into);
        self
    }

    /// The effective separator.
    pub fn separator(&self) -> &str {
        self.token_separator.as_deref().unwrap_or("")
    }

    /// Check the size bounds.
    pub fn validate(&self) -> Result<()> {
        if self.min_shingle_size < DEFAULT_MIN_SHINGLE_SIZE {
            return Err(ShingleError::config(format!(
                "min_shingle_size must be >= {DEFAULT_MIN_SHINGLE_SIZE}, got {}",
                self.min_shingle_size
            )));
        }
        if self.max_shingle_size < DEFAULT_MIN_SHINGLE_SIZE {
            return Err(ShingleError::config(format!(
                "max_shingle_size must be >= {DEFAULT_MIN_SHINGLE_SIZE}, got {}",
                self.max_shingle_size
            )));
        }
        if self.min_shingle_size > self.max_shingle_size {
            return Err(ShingleError::config(format!(
                "min_shingle_size ({}) must be <= max_shingle_size ({})",
                self.min_shingle_size, self.max_shingle_size
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShingleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file without validating it, for callers
    /// that adjust the values before calling [`validate`](Self::validate).
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
