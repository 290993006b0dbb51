use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CafeError;

/// Cup size tier. Ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::ExtraLarge];

    /// Human-readable name, as printed on menus and receipts.
    pub fn name(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::ExtraLarge => "Extra Large",
        }
    }

    /// Parse a size name, falling back to medium for anything unrecognized.
    pub fn from_name_or_default(name: &str) -> Size {
        name.parse().unwrap_or_default()
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::Medium
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Size {
    type Err = CafeError;

    /// Case-insensitive; accepts spaces, dashes or underscores in "extra large".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "small" | "s" => Ok(Size::Small),
            "medium" | "m" => Ok(Size::Medium),
            "large" | "l" => Ok(Size::Large),
            "extralarge" | "xl" => Ok(Size::ExtraLarge),
            _ => Err(CafeError::InvalidInput(format!("unknown size '{}'", s))),
        }
    }
}
