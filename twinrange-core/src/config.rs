//! Slider configuration — construction parameters and TOML slider sets.
//!
//! A slider set is stored as a TOML file with one `[[slider]]` table per
//! widget:
//!
//! ```toml
//! [[slider]]
//! id = "height"
//! min = 25
//! max = 150
//! low_value = 55
//! high_value = 100
//! unit = "cm"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;

fn default_min_range() -> i64 {
    1
}

/// Construction parameters for one slider.
///
/// `min < max` is a precondition of [`crate::RangeState::new`]; loaders call
/// [`SliderConfig::validate`] before handing a config to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub id: String,
    pub min: i64,
    pub max: i64,
    pub low_value: i64,
    pub high_value: i64,
    #[serde(default = "default_min_range")]
    pub min_range: i64,
    #[serde(default)]
    pub unit: String,
}

impl SliderConfig {
    pub fn new(id: impl Into<String>, min: i64, max: i64, low_value: i64, high_value: i64) -> Self {
        Self {
            id: id.into(),
            min,
            max,
            low_value,
            high_value,
            min_range: default_min_range(),
            unit: String::new(),
        }
    }

    pub fn with_min_range(mut self, min_range: i64) -> Self {
        self.min_range = min_range;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Check the domain and separation preconditions.
    ///
    /// Initial values are not checked here: construction re-validates them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::EmptyDomain {
                id: self.id.clone(),
                min: self.min,
                max: self.max,
            });
        }
        if self.min_range < 0 {
            return Err(ConfigError::NegativeMinRange {
                id: self.id.clone(),
                min_range: self.min_range,
            });
        }
        let Some(width) = self.max.checked_sub(self.min) else {
            return Err(ConfigError::DomainTooWide {
                id: self.id.clone(),
                min: self.min,
                max: self.max,
            });
        };
        if width < self.min_range {
            return Err(ConfigError::DomainTooNarrow {
                id: self.id.clone(),
                width,
                min_range: self.min_range,
            });
        }
        Ok(())
    }
}

/// An ordered collection of slider configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSet {
    #[serde(default)]
    pub slider: Vec<SliderConfig>,
}

impl SliderSet {
    /// Load and validate a slider set from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a slider set from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let set: SliderSet = toml::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for config in &self.slider {
            config.validate()?;
            if !seen.insert(config.id.as_str()) {
                return Err(ConfigError::DuplicateId(config.id.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&SliderConfig> {
        self.slider.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.slider.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slider.is_empty()
    }

    /// The three demo sliders: plain, minimum range, and with a unit.
    pub fn samples() -> Self {
        Self {
            slider: vec![
                SliderConfig::new("sample", 0, 80, 25, 50),
                SliderConfig::new("sampleMin", 10, 50, 15, 40).with_min_range(5),
                SliderConfig::new("sampleUnit", 25, 150, 55, 100).with_unit("cm"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_i64_domain_is_rejected_not_panicking() {
        let err = SliderConfig::new("wide", i64::MIN, i64::MAX, 0, 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DomainTooWide { .. }), "{err}");

        let err = SliderSet::from_toml(
            r#"
            [[slider]]
            id = "wide"
            min = -9223372036854775808
            max = 9223372036854775807
            low_value = 0
            high_value = 1
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("too wide"), "{err}");
    }

    #[test]
    fn widest_representable_domain_is_accepted() {
        let config = SliderConfig::new("edge", i64::MIN, -1, -10, -5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let set = SliderSet::from_toml(
            r#"
            [[slider]]
            id = "a"
            min = 0
            max = 10
            low_value = 2
            high_value = 8
            "#,
        )
        .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.slider[0].min_range, 1);
        assert_eq!(set.slider[0].unit, "");
    }

    #[test]
    fn empty_domain_rejected() {
        let err = SliderConfig::new("x", 5, 5, 5, 5).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDomain { .. }));
    }

    #[test]
    fn negative_min_range_rejected() {
        let err = SliderConfig::new("x", 0, 10, 1, 5)
            .with_min_range(-1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeMinRange { min_range: -1, .. }));
    }

    #[test]
    fn narrow_domain_rejected() {
        let err = SliderConfig::new("x", 0, 3, 0, 3)
            .with_min_range(5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DomainTooNarrow { width: 3, .. }));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut set = SliderSet::samples();
        set.slider.push(SliderConfig::new("sample", 0, 10, 1, 2));
        assert!(matches!(set.validate(), Err(ConfigError::DuplicateId(id)) if id == "sample"));
    }

    #[test]
    fn samples_are_valid() {
        let set = SliderSet::samples();
        assert!(set.validate().is_ok());
        assert_eq!(set.get("sampleUnit").map(|c| c.unit.as_str()), Some("cm"));
        assert_eq!(set.get("sampleMin").map(|c| c.min_range), Some(5));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = SliderSet::from_toml("[[slider]]\nid = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
