use serde::{Deserialize, Serialize};

use super::SkipId;

/// Largest size (in yards) that still counts as a compact skip
pub const COMPACT_MAX_YARDS: u32 = 8;
/// Largest size (in yards) that still counts as a medium skip
pub const MEDIUM_MAX_YARDS: u32 = 14;

/// A hireable skip as returned by the catalog service.
///
/// Fields the service sends that are not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOption {
    pub id: SkipId,
    /// Capacity in cubic yards
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    /// VAT rate as a percentage (20.0 = 20%)
    pub vat: f64,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub postcode: String,
}

impl SkipOption {
    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_yards(self.size)
    }

    /// Total price including VAT, rounded to whole pounds
    pub fn total_price(&self) -> i64 {
        crate::pricing::total_price(self.price_before_vat, self.vat)
    }
}

/// Coarse size bucket used for card icons and the "Compact" badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Compact,
    Medium,
    Large,
}

impl SizeClass {
    pub fn from_yards(size: u32) -> Self {
        if size <= COMPACT_MAX_YARDS {
            SizeClass::Compact
        } else if size <= MEDIUM_MAX_YARDS {
            SizeClass::Medium
        } else {
            SizeClass::Large
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SizeClass::Compact => "Compact",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        }
    }
}

/// Postcode and area that scope a catalog request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.postcode, self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_boundaries() {
        assert_eq!(SizeClass::from_yards(4), SizeClass::Compact);
        assert_eq!(SizeClass::from_yards(8), SizeClass::Compact);
        assert_eq!(SizeClass::from_yards(10), SizeClass::Medium);
        assert_eq!(SizeClass::from_yards(14), SizeClass::Medium);
        assert_eq!(SizeClass::from_yards(16), SizeClass::Large);
    }
}
