//! Presentation knobs shared by the web app and the CLI.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_generation_latency_ms() -> u64 {
    1500
}

fn default_list_min_rows() -> usize {
    8
}

fn default_status_max_chars() -> usize {
    15
}

fn default_status_keep_chars() -> usize {
    12
}

fn default_kanban_card_fields() -> usize {
    3
}

fn default_detail_field_limit() -> usize {
    5
}

fn default_catalog_visible_fields() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Pause between submitting a brief and showing the simulation.
    #[cfg_attr(feature = "serde", serde(default = "default_generation_latency_ms"))]
    pub generation_latency_ms: u64,
    /// List view pads with placeholder rows up to this count.
    #[cfg_attr(feature = "serde", serde(default = "default_list_min_rows"))]
    pub list_min_rows: usize,
    /// Statuses longer than this are cut to `status_keep_chars` plus "...".
    #[cfg_attr(feature = "serde", serde(default = "default_status_max_chars"))]
    pub status_max_chars: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_status_keep_chars"))]
    pub status_keep_chars: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_kanban_card_fields"))]
    pub kanban_card_fields: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_detail_field_limit"))]
    pub detail_field_limit: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_catalog_visible_fields"))]
    pub catalog_visible_fields: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            generation_latency_ms: default_generation_latency_ms(),
            list_min_rows: default_list_min_rows(),
            status_max_chars: default_status_max_chars(),
            status_keep_chars: default_status_keep_chars(),
            kanban_card_fields: default_kanban_card_fields(),
            detail_field_limit: default_detail_field_limit(),
            catalog_visible_fields: default_catalog_visible_fields(),
        }
    }
}

impl UiConfig {
    pub fn generation_latency(&self) -> Duration {
        Duration::from_millis(self.generation_latency_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.list_min_rows == 0 {
            return Err(Error::Config("list_min_rows must be at least 1".into()));
        }
        if self.status_keep_chars > self.status_max_chars {
            return Err(Error::Config(format!(
                "status_keep_chars ({}) exceeds status_max_chars ({})",
                self.status_keep_chars, self.status_max_chars
            )));
        }
        Ok(())
    }

    /// Parses and validates. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = UiConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.generation_latency(), Duration::from_millis(1500));
        assert_eq!(cfg.list_min_rows, 8);
    }

    #[test]
    fn rejects_zero_min_rows() {
        let cfg = UiConfig {
            list_min_rows: 0,
            ..UiConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_keep_longer_than_max() {
        let cfg = UiConfig {
            status_keep_chars: 20,
            ..UiConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg = UiConfig::from_json_str(r#"{ "list_min_rows": 4 }"#).unwrap();
        assert_eq!(cfg.list_min_rows, 4);
        assert_eq!(cfg.status_max_chars, 15);
        assert_eq!(cfg.generation_latency_ms, 1500);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bad_json_and_bad_values_are_errors() {
        assert!(matches!(UiConfig::from_json_str("{"), Err(Error::Json(_))));
        assert!(matches!(
            UiConfig::from_json_str(r#"{ "list_min_rows": 0 }"#),
            Err(Error::Config(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_file_reports_path() {
        let err = UiConfig::load("/definitely/not/here/luklak.json").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("luklak.json"));
    }
}
