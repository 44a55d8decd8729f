//! Rejection reasons and configuration errors.
//!
//! Rejections are not failures: the committed pair stays intact and the
//! caller reverts the visible draft. `ConfigError` is the only error type
//! that propagates, and only from loading/validating configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::thumb::Thumb;

/// Why a candidate value was not committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Value lies outside `[min, max]`. `value` is `None` when the typed
    /// digits do not even fit in an `i64`.
    #[error("value {} outside domain [{min}, {max}]", display_value(.value))]
    OutOfDomain {
        value: Option<i64>,
        min: i64,
        max: i64,
    },

    /// Committing would bring the thumbs closer than the minimum separation.
    #[error("{thumb} thumb value {value} violates separation (limit {limit})")]
    SeparationViolation { thumb: Thumb, value: i64, limit: i64 },

    /// Draft text contains something other than ASCII digits.
    #[error("malformed input: {0:?}")]
    MalformedInput(String),

    /// Draft was empty; the field reverts to the committed value.
    #[error("empty draft")]
    EmptyDraft,
}

fn display_value(value: &Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "overflow".to_string(),
    }
}

/// Errors from loading or validating slider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("slider {id:?}: min ({min}) must be below max ({max})")]
    EmptyDomain { id: String, min: i64, max: i64 },

    #[error("slider {id:?}: domain [{min}, {max}] is too wide to measure")]
    DomainTooWide { id: String, min: i64, max: i64 },

    #[error("slider {id:?}: min_range must be non-negative, got {min_range}")]
    NegativeMinRange { id: String, min_range: i64 },

    #[error("slider {id:?}: domain width {width} is narrower than min_range {min_range}")]
    DomainTooNarrow { id: String, width: i64, min_range: i64 },

    #[error("duplicate slider id {0:?}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_domain_message_handles_overflow() {
        let r = Rejection::OutOfDomain {
            value: None,
            min: 0,
            max: 10,
        };
        assert_eq!(r.to_string(), "value overflow outside domain [0, 10]");

        let r = Rejection::OutOfDomain {
            value: Some(200),
            min: 0,
            max: 100,
        };
        assert_eq!(r.to_string(), "value 200 outside domain [0, 100]");
    }

    #[test]
    fn separation_message_names_thumb() {
        let r = Rejection::SeparationViolation {
            thumb: Thumb::Low,
            value: 60,
            limit: 49,
        };
        assert_eq!(r.to_string(), "low thumb value 60 violates separation (limit 49)");
    }
}
