//! Behavioural tests for the booking core
//!
//! Tests are organized by topic:
//! - `pagination` - Page derivation, clamping, and the pager cursor
//! - `selection` - Selection and overlay transitions, proceed signal
//! - `fetch` - Fetch lifecycle and stale response handling
//! - `catalog` - Parsing of catalog response bodies

mod fetch;
mod pagination;

use crate::model::{SkipId, SkipOption};

/// A skip with a recognisable id and size; other fields are typical values
pub(crate) fn skip(id: u64, size: u32) -> SkipOption {
    SkipOption {
        id: SkipId(id),
        size,
        hire_period_days: 14,
        price_before_vat: 200.0 + f64::from(size) * 10.0,
        vat: 20.0,
        allowed_on_road: size <= 8,
        allows_heavy_waste: size >= 10,
        postcode: "NR32".to_string(),
    }
}

/// `count` skips with ids 1..=count
pub(crate) fn skips(count: usize) -> Vec<SkipOption> {
    (1..=count as u64).map(|id| skip(id, 4 + id as u32)).collect()
}
