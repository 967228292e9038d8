//! Mining configuration
//!
//! Thresholds, the support scaling rule and execution switches. Loadable
//! from TOML; the command line overrides individual fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ap::CancelToken;
use crate::error::{AprioriError, Result};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How the minimum support is turned into an absolute record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdScale {
    /// `min_support × number of items in the universe`
    #[default]
    ItemCount,
    /// `min_support × number of records`, the usual fractional support
    RecordCount,
    /// `min_support` is already a record count
    Absolute,
}

impl ThresholdScale {
    pub fn absolute(self, min_support: f64, num_items: usize, num_records: usize) -> f64 {
        match self {
            ThresholdScale::ItemCount => min_support * num_items as f64,
            ThresholdScale::RecordCount => min_support * num_records as f64,
            ThresholdScale::Absolute => min_support,
        }
    }
}

/// Validated thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    min_support: f64,
    min_confidence: f64,
    scale: ThresholdScale,
}

impl Thresholds {
    pub fn new(min_support: f64, min_confidence: f64, scale: ThresholdScale) -> Result<Self> {
        if !min_support.is_finite() || min_support < 0.0 {
            return Err(AprioriError::InvalidSupport(min_support));
        }
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(AprioriError::InvalidConfidence(min_confidence));
        }
        Ok(Self {
            min_support,
            min_confidence,
            scale,
        })
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn scale(&self) -> ThresholdScale {
        self.scale
    }

    pub fn support_threshold(&self, num_items: usize, num_records: usize) -> f64 {
        self.scale.absolute(self.min_support, num_items, num_records)
    }
}

/// Execution switches that never change the mined output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineOptions {
    pub parallel: bool,
    pub prune_subsets: bool,
}

impl Default for MineOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            prune_subsets: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Unset until given by a file, a flag or a prompt
    #[serde(default)]
    pub min_support: Option<f64>,

    #[serde(default)]
    pub min_confidence: Option<f64>,

    #[serde(default)]
    pub scale: ThresholdScale,

    /// Count candidate supports on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Drop candidates with an infrequent subset before counting
    #[serde(default = "default_true")]
    pub prune_subsets: bool,

    /// Abort the run after this many milliseconds
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: None,
            min_confidence: None,
            scale: ThresholdScale::default(),
            parallel: true,
            prune_subsets: true,
            deadline_ms: None,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support: Some(min_support),
            min_confidence: Some(min_confidence),
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: ThresholdScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn thresholds(&self) -> Result<Thresholds> {
        let min_support = self
            .min_support
            .ok_or(AprioriError::MissingThreshold("min_support"))?;
        let min_confidence = self
            .min_confidence
            .ok_or(AprioriError::MissingThreshold("min_confidence"))?;
        Thresholds::new(min_support, min_confidence, self.scale)
    }

    /// Asks `ask` for every threshold that is still unset.
    pub fn fill_thresholds<E>(
        &mut self,
        mut ask: impl FnMut(&str) -> std::result::Result<f64, E>,
    ) -> std::result::Result<(), E> {
        if self.min_support.is_none() {
            self.min_support = Some(ask("Minimum support")?);
        }
        if self.min_confidence.is_none() {
            self.min_confidence = Some(ask("Minimum confidence")?);
        }
        Ok(())
    }

    pub fn options(&self) -> MineOptions {
        MineOptions {
            parallel: self.parallel,
            prune_subsets: self.prune_subsets,
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        match self.deadline_ms {
            Some(ms) => CancelToken::with_timeout(Duration::from_millis(ms)),
            None => CancelToken::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MiningConfig::default();
        assert_eq!(config.min_support, None);
        assert_eq!(config.min_confidence, None);
        assert_eq!(config.scale, ThresholdScale::ItemCount);
        assert!(config.parallel);
        assert!(config.prune_subsets);
        assert_eq!(config.deadline_ms, None);
    }

    #[test]
    fn test_scales() {
        assert_eq!(ThresholdScale::ItemCount.absolute(0.5, 4, 10), 2.0);
        assert_eq!(ThresholdScale::RecordCount.absolute(0.5, 4, 10), 5.0);
        assert_eq!(ThresholdScale::Absolute.absolute(3.0, 4, 10), 3.0);
    }

    #[test]
    fn test_invalid_thresholds() {
        assert_eq!(
            MiningConfig::new(-0.1, 0.5).thresholds(),
            Err(AprioriError::InvalidSupport(-0.1))
        );
        assert!(matches!(
            MiningConfig::new(f64::NAN, 0.5).thresholds(),
            Err(AprioriError::InvalidSupport(_))
        ));
        assert_eq!(
            MiningConfig::new(0.1, 1.5).thresholds(),
            Err(AprioriError::InvalidConfidence(1.5))
        );
        assert_eq!(
            MiningConfig::new(0.1, -0.2).thresholds(),
            Err(AprioriError::InvalidConfidence(-0.2))
        );
        assert!(MiningConfig::new(0.0, 1.0).thresholds().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = MiningConfig::from_toml_str(
            r#"
            min_support = 0.25
            min_confidence = 0.8
            scale = "record_count"
            parallel = false
            deadline_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.min_support, Some(0.25));
        assert_eq!(config.min_confidence, Some(0.8));
        assert_eq!(config.scale, ThresholdScale::RecordCount);
        assert!(!config.parallel);
        assert!(config.prune_subsets);
        assert_eq!(config.deadline_ms, Some(500));
    }

    #[test]
    fn test_thresholds_left_out_of_file() {
        let mut config = MiningConfig::from_toml_str("scale = \"absolute\"").unwrap();
        assert_eq!(config.min_support, None);
        assert_eq!(
            config.thresholds(),
            Err(AprioriError::MissingThreshold("min_support"))
        );

        let mut asked = Vec::new();
        config
            .fill_thresholds(|label| {
                asked.push(label.to_string());
                Ok::<_, ()>(if label == "Minimum support" { 2.0 } else { 0.5 })
            })
            .unwrap();

        assert_eq!(asked, vec!["Minimum support", "Minimum confidence"]);
        let thresholds = config.thresholds().unwrap();
        assert_eq!(thresholds.min_support(), 2.0);
        assert_eq!(thresholds.min_confidence(), 0.5);
        assert_eq!(thresholds.scale(), ThresholdScale::Absolute);
    }

    #[test]
    fn test_fill_keeps_thresholds_from_file() {
        let mut config = MiningConfig::from_toml_str("min_support = 0.1").unwrap();
        let mut asked = Vec::new();
        config
            .fill_thresholds(|label| {
                asked.push(label.to_string());
                Ok::<_, ()>(0.9)
            })
            .unwrap();

        assert_eq!(asked, vec!["Minimum confidence"]);
        assert_eq!(config.min_support, Some(0.1));
        assert_eq!(config.min_confidence, Some(0.9));
    }

    #[test]
    fn test_unknown_scale_rejected() {
        assert!(matches!(
            MiningConfig::from_toml_str("scale = \"per_item\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = MiningConfig::new(0.3, 0.6).with_scale(ThresholdScale::Absolute);
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: MiningConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
