//! Configuration for the normalization pipeline.
//!
//! This module handles loading and validating pipeline settings from
//! environment variables, with sensible defaults when a variable is unset.

use crate::domain::{TagOverflow, DEFAULT_MAX_TAGS};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default country code prefix applied to normalized phone numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "+57";

/// Settings consumed by the create and update pipelines.
///
/// Both pipelines share one configuration: the same country code and tag cap
/// apply whether a record is being created or patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Country code prefix for normalized phone numbers, in `+NN` form
    /// (default: "+57")
    pub country_code: String,

    /// Maximum number of tags kept on a record (default: 5)
    pub max_tags: usize,

    /// What to do when the deduplicated tag set exceeds `max_tags`
    /// (default: truncate)
    pub tag_overflow: TagOverflow,
}

impl PipelineConfig {
    /// Build a configuration with an explicit country code, validating it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the country code is not a '+'
    /// followed by 1-3 digits.
    pub fn with_country_code(country_code: impl Into<String>) -> ConfigResult<Self> {
        let country_code = country_code.into();
        Self::validate_country_code("country_code", &country_code)?;

        Ok(PipelineConfig {
            country_code,
            ..Self::default()
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_COUNTRY_CODE`: phone prefix in `+NN` form (default: "+57")
    /// - `CONTACT_MAX_TAGS`: tag cap, must be positive (default: 5)
    /// - `CONTACT_TAG_OVERFLOW`: "truncate" or "reject" (default: "truncate")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let country_code = env::var("CONTACT_COUNTRY_CODE")
            .unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.to_string());
        Self::validate_country_code("CONTACT_COUNTRY_CODE", &country_code)?;

        let max_tags = Self::parse_env_usize("CONTACT_MAX_TAGS", DEFAULT_MAX_TAGS)?;
        if max_tags == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_MAX_TAGS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let tag_overflow = match env::var("CONTACT_TAG_OVERFLOW") {
            Ok(val) => val
                .parse::<TagOverflow>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "CONTACT_TAG_OVERFLOW".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => TagOverflow::default(),
        };

        Ok(PipelineConfig {
            country_code,
            max_tags,
            tag_overflow,
        })
    }

    /// Validate that a country code is '+' followed by 1-3 digits.
    fn validate_country_code(var: &str, code: &str) -> ConfigResult<()> {
        let valid = code
            .strip_prefix('+')
            .map(|digits| {
                (1..=3).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
            })
            .unwrap_or(false);

        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: format!("Must be '+' followed by 1-3 digits, got: {}", code),
            })
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            max_tags: DEFAULT_MAX_TAGS,
            tag_overflow: TagOverflow::default(),
        }
    }
}
