use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CafeError, Result};
use crate::menu::constants::{DEFAULT_SHOP_NAME, DEFAULT_TAX_RATE};

/// Shop settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub name: String,
    pub tax_rate: f64,
    pub open_on_start: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SHOP_NAME.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            open_on_start: true,
        }
    }
}

impl ShopConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(CafeError::InvalidInput(format!(
                "tax rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        Ok(())
    }
}

/// Load shop settings from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ShopConfig> {
    let content = fs::read_to_string(path)?;
    let config: ShopConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "Night Owl"}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.name, "Night Owl");
        assert_eq!(config.tax_rate, DEFAULT_TAX_RATE);
        assert!(config.open_on_start);
    }

    #[test]
    fn test_invalid_tax_rate() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"tax_rate": 1.5}"#).unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(CafeError::InvalidInput(_))
        ));
    }
}
