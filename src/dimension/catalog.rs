use std::{fmt, str::FromStr};

use crate::foundation::error::WrapError;

/// Named product sizes. Dimensions are the inner (purchasable) area in inches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ProductSize {
    #[default]
    In8x10,
    In9x9,
    In12x12,
    In10x16,
    In14x14,
    In16x20,
    In18x18,
    In20x20,
}

impl ProductSize {
    pub const ALL: [ProductSize; 8] = [
        ProductSize::In8x10,
        ProductSize::In9x9,
        ProductSize::In12x12,
        ProductSize::In10x16,
        ProductSize::In14x14,
        ProductSize::In16x20,
        ProductSize::In18x18,
        ProductSize::In20x20,
    ];

    /// Catalog key, e.g. `"8x10"`.
    pub fn key(self) -> &'static str {
        match self {
            ProductSize::In8x10 => "8x10",
            ProductSize::In9x9 => "9x9",
            ProductSize::In12x12 => "12x12",
            ProductSize::In10x16 => "10x16",
            ProductSize::In14x14 => "14x14",
            ProductSize::In16x20 => "16x20",
            ProductSize::In18x18 => "18x18",
            ProductSize::In20x20 => "20x20",
        }
    }

    /// `(width, height)` of the inner area in inches.
    pub fn inches(self) -> (f64, f64) {
        match self {
            ProductSize::In8x10 => (8.0, 10.0),
            ProductSize::In9x9 => (9.0, 9.0),
            ProductSize::In12x12 => (12.0, 12.0),
            ProductSize::In10x16 => (10.0, 16.0),
            ProductSize::In14x14 => (14.0, 14.0),
            ProductSize::In16x20 => (16.0, 20.0),
            ProductSize::In18x18 => (18.0, 18.0),
            ProductSize::In20x20 => (20.0, 20.0),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase().replace(['×', ' '], "x");
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for ProductSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for ProductSize {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .ok_or_else(|| WrapError::configuration(format!("unknown product size \"{s}\"")))
    }
}

impl serde::Serialize for ProductSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> serde::Deserialize<'de> for ProductSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dimension/catalog.rs"]
mod tests;
