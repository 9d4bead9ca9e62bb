//! Lifecycle of the catalog fetch.
//!
//! Each call to [`CatalogFetch::begin`] issues a new generation and moves the
//! state back to `Loading`. Results are applied only when they carry the
//! latest generation, so a slow response to an earlier attempt can never
//! overwrite the outcome of a retry.

use crate::error::FetchError;
use crate::model::SkipOption;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Failed { message: String },
    Loaded { items: Vec<SkipOption> },
}

/// Handle for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuild a ticket from a generation carried across a channel
    pub fn from_generation(generation: u64) -> Self {
        Self { generation }
    }
}

/// Outcome of offering a result to [`CatalogFetch::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The result belonged to a superseded request and was dropped
    Stale,
}

#[derive(Debug, Clone)]
pub struct CatalogFetch {
    state: FetchState,
    generation: u64,
}

impl Default for CatalogFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFetch {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Generation of the most recently issued request (0 before the first)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn items(&self) -> &[SkipOption] {
        match &self.state {
            FetchState::Loaded { items } => items,
            _ => &[],
        }
    }

    /// Start a new attempt: reset to `Loading` and supersede any in-flight one.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Apply the result of the request identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<SkipOption>, FetchError>,
    ) -> Resolution {
        if ticket.generation != self.generation {
            return Resolution::Stale;
        }

        self.state = match result {
            Ok(items) => FetchState::Loaded { items },
            Err(err) => FetchState::Failed {
                message: err.user_message().to_string(),
            },
        };
        Resolution::Applied
    }
}
