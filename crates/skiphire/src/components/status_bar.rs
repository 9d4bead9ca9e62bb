use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::HELP_COLOR;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skiphire_core::FetchState;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn help_text(state: &AppState) -> &'static str {
        match state.fetch.state() {
            FetchState::Loading => "q: quit",
            FetchState::Failed { .. } => "r: try again | q: quit",
            FetchState::Loaded { .. } if state.selection.overlay_visible() => {
                "1-3: toggle extras | Enter/c: continue | Esc/b: back to selection | q: quit"
            }
            FetchState::Loaded { .. } => {
                "←→↑↓/hjkl: move | Enter: select | n/p: next/prev page | g/G: first/last | q: quit"
            }
        }
    }

    fn updated_text(state: &AppState) -> String {
        match &state.last_updated {
            Some(when) => format!("{} · updated {}", state.location, when.strftime("%H:%M:%S")),
            None => state.location.to_string(),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(40)])
            .split(inner);

        let help = Paragraph::new(Line::from(Span::styled(
            Self::help_text(state),
            Style::default().fg(HELP_COLOR),
        )));
        frame.render_widget(help, chunks[0]);

        let updated = Paragraph::new(Line::from(Span::styled(
            Self::updated_text(state),
            Style::default().fg(HELP_COLOR),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(updated, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_help_text_follows_fetch_state() {
        let state = AppState::new(&AppConfig::default());
        assert_eq!(StatusBar::help_text(&state), "q: quit");
    }

    #[test]
    fn test_updated_text_without_load_shows_location() {
        let state = AppState::new(&AppConfig::default());
        assert_eq!(StatusBar::updated_text(&state), "NR32 (Lowestoft)");
    }
}
