//! Grid configuration.
//!
//! The defaults match the on-screen keyboard's expanded view: four rows of
//! ten cells, with a 120px column on the right for the functional keys.
//!
//! # Example
//!
//! ```rust
//! use inputview_core::GridConfig;
//!
//! let config = GridConfig::from_toml_str("rows = 5").unwrap();
//! assert_eq!(config.rows, 5);
//! assert_eq!(config.cells_per_row, 10);
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::keys::FunctionalKey;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of candidate rows (one functional key per row, so at least
    /// as many rows as there are keys)
    pub rows: usize,

    /// Cells each row is divided into
    pub cells_per_row: usize,

    /// Width in pixels reserved on the right for the functional keys
    pub reserved_key_width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cells_per_row: 10,
            reserved_key_width: 120,
        }
    }
}

impl GridConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read grid config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("invalid grid config {}", path.display()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("failed to write grid config {}", path.display()))?;
        Ok(())
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject grids that cannot hold a single candidate or that leave a
    /// functional key without a row.
    pub fn validate(&self) -> Result<()> {
        let min_rows = FunctionalKey::ALL.len();
        if self.rows < min_rows {
            bail!("rows must be at least {} (one per functional key), got {}", min_rows, self.rows);
        }
        if self.cells_per_row == 0 {
            bail!("cells_per_row must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cells_per_row, 10);
        assert_eq!(config.reserved_key_width, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GridConfig::from_toml_str("cells_per_row = 8\n").unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cells_per_row, 8);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(GridConfig::from_toml_str("rows = 0").is_err());
        assert!(GridConfig::from_toml_str("cells_per_row = 0").is_err());
    }

    #[test]
    fn test_rejects_rows_hiding_keys() {
        let err = GridConfig::from_toml_str("rows = 3").unwrap_err();
        assert!(format!("{:#}", err).contains("at least 4"));
        assert!(GridConfig::from_toml_str("rows = 4").is_ok());
        assert!(GridConfig::from_toml_str("rows = 6").is_ok());
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("inputview_grid_{}.toml", std::process::id()));
        let config = GridConfig {
            rows: 5,
            cells_per_row: 12,
            reserved_key_width: 96,
        };
        config.save_toml(&path).unwrap();
        let loaded = GridConfig::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
