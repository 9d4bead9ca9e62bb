//! Bottom bar summarising the current selection.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skiphire_core::{Extras, SkipOption, grand_total};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_days, format_pounds};
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, price_style};

/// Height of the bar when a selection exists
pub const SUMMARY_BAR_HEIGHT: u16 = 3;

pub struct SummaryBar;

impl SummaryBar {
    pub fn new() -> Self {
        Self
    }

    pub fn line(skip: &SkipOption, extras: &Extras) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                format!("{} Yard Skip", skip.size),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} hire  ", format_days(skip.hire_period_days))),
            Span::styled(format_pounds(grand_total(skip, extras)), price_style()),
        ];

        let extras_total = extras.total_for(skip);
        if extras_total > 0 {
            spans.push(Span::styled(
                format!(" (incl. {} extras)", format_pounds(extras_total)),
                Style::default().fg(HELP_COLOR),
            ));
        }

        spans.push(Span::styled(
            "   Enter on the card to review and continue",
            Style::default().fg(HELP_COLOR),
        ));
        Line::from(spans)
    }
}

impl Default for SummaryBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(skip) = state.selection.selected() else {
            return;
        };

        let paragraph = Paragraph::new(Self::line(skip, state.selection.extras())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT_COLOR))
                .title(Span::styled(" Your selection ", Style::default().fg(Color::White))),
        );
        frame.render_widget(paragraph, area);
    }
}
