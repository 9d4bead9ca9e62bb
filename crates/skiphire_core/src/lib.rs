//! Booking logic for the skip hire flow
//!
//! This crate holds everything about the "Select Skip" step that does not
//! depend on a terminal or a network stack:
//! - VAT-inclusive pricing and optional extras
//! - Client-side pagination of the fetched catalog
//! - The selection / detail-overlay state machine
//! - The catalog fetch lifecycle with stale-response protection
//! - Catalog response parsing

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod pricing;
pub mod selection;
pub mod steps;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::FetchError;
pub use fetch::{CatalogFetch, FetchState, RequestTicket, Resolution};
pub use model::{Location, SizeClass, SkipId, SkipKey, SkipOption};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, Pager, paginate};
pub use pricing::{Extra, Extras, grand_total, total_price};
pub use selection::{Proceed, Selection, SelectionPhase};
pub use steps::{BookingProgress, BookingStep, StepStatus};
