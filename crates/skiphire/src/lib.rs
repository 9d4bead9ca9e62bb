//! Terminal front end for booking a waste skip.
//!
//! The crate drives the "Select Skip" step of the booking flow: it fetches
//! the skips available at a location on a background worker, shows them as
//! a paginated card grid and opens a detail panel for the chosen skip.
//! Booking logic itself lives in `skiphire_core`.

// ============================================================================
// Application
// ============================================================================

pub mod app;
pub mod components;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

// ============================================================================
// Services
// ============================================================================

pub mod catalog;
pub mod config;
pub mod logging;
pub mod worker;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use catalog::{CatalogEndpoint, CatalogSource, HttpCatalog};
pub use config::{AppConfig, ConfigOverrides};
pub use logging::{init_logging, log_session_start};
pub use worker::{CatalogWorker, FetchWorker};
