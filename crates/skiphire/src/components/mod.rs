pub mod progress_steps;
pub mod skip_card;
pub mod status_bar;
pub mod summary_bar;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use skiphire_core::Proceed;
use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// The selection was confirmed; carries the proceed signal
    Proceed(Proceed),
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState);
}
