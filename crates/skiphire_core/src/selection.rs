//! Selection and detail-overlay state for the skip grid.
//!
//! ```text
//!   Idle ──select──▶ Selected+Visible ──close/confirm──▶ Selected+Hidden
//!                        ▲                                    │
//!                        └──────────────select────────────────┘
//! ```
//!
//! Nothing returns the machine to `Idle`: once a skip is chosen the user can
//! only switch to another one.

use crate::model::{SkipKey, SkipOption};
use crate::pricing::{Extra, Extras};

/// Coarse phase of the selection machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    SelectedHidden,
    SelectedVisible,
}

/// Signal handed to the rest of the booking flow when a skip is confirmed
#[derive(Debug, Clone, PartialEq)]
pub struct Proceed {
    pub key: SkipKey,
    pub skip: SkipOption,
    pub extras: Extras,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<(SkipKey, SkipOption)>,
    overlay_visible: bool,
    extras: Extras,
}

impl Selection {
    pub fn phase(&self) -> SelectionPhase {
        match (&self.selected, self.overlay_visible) {
            (None, _) => SelectionPhase::Idle,
            (Some(_), false) => SelectionPhase::SelectedHidden,
            (Some(_), true) => SelectionPhase::SelectedVisible,
        }
    }

    pub fn selected(&self) -> Option<&SkipOption> {
        self.selected.as_ref().map(|(_, skip)| skip)
    }

    pub fn selected_key(&self) -> Option<SkipKey> {
        self.selected.as_ref().map(|(key, _)| *key)
    }

    /// Whether the entry at `index` of the fetched list is the chosen one
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_key().is_some_and(|key| key.index == index)
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Choose `skip` and open the overlay. Extras survive only when the same
    /// entry is chosen again.
    pub fn select(&mut self, key: SkipKey, skip: SkipOption) {
        if self.selected_key() != Some(key) {
            self.extras = Extras::default();
        }
        self.selected = Some((key, skip));
        self.overlay_visible = true;
    }

    /// Hide the overlay, keeping the selection. No-op unless the overlay is open.
    pub fn close_overlay(&mut self) -> bool {
        if self.phase() != SelectionPhase::SelectedVisible {
            return false;
        }
        self.overlay_visible = false;
        true
    }

    /// Toggle an extra for the current selection. Ignored when the overlay is
    /// closed or the extra is not offered for the selected skip.
    pub fn toggle_extra(&mut self, extra: Extra) -> bool {
        match (&self.selected, self.overlay_visible) {
            (Some((_, skip)), true) if extra.is_offered_for(skip) => {
                self.extras.toggle(extra);
                true
            }
            _ => false,
        }
    }

    /// Hide the overlay and emit the proceed signal for the current selection.
    ///
    /// Returns `None` (and changes nothing) unless the overlay is open.
    pub fn confirm(&mut self) -> Option<Proceed> {
        if self.phase() != SelectionPhase::SelectedVisible {
            return None;
        }
        self.overlay_visible = false;
        self.selected.as_ref().map(|(key, skip)| Proceed {
            key: *key,
            skip: skip.clone(),
            extras: self.extras,
        })
    }
}
