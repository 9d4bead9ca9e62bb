//! Booking progress stepper shown above the screen content.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skiphire_core::{BookingProgress, BookingStep, StepStatus};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::ACCENT_COLOR;

pub struct ProgressSteps;

impl ProgressSteps {
    pub fn new() -> Self {
        Self
    }

    fn marker(status: StepStatus) -> &'static str {
        match status {
            StepStatus::Completed => "✓",
            StepStatus::Active => "●",
            StepStatus::Pending => "○",
        }
    }

    fn step_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Completed => Style::default().fg(ACCENT_COLOR),
            StepStatus::Active => Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
            StepStatus::Pending => Style::default().fg(Color::DarkGray),
        }
    }

    /// One line with every step; the connector before a step is lit once
    /// that step has been reached.
    pub fn line(progress: &BookingProgress) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, step) in BookingStep::ALL.iter().enumerate() {
            let status = progress.status(*step);
            if i > 0 {
                let connector = if status == StepStatus::Pending {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(ACCENT_COLOR)
                };
                spans.push(Span::styled(" ── ", connector));
            }
            spans.push(Span::styled(
                format!("{} {}", Self::marker(status), step.name()),
                Self::step_style(status),
            ));
        }
        Line::from(spans)
    }
}

impl Default for ProgressSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProgressSteps {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph = Paragraph::new(Self::line(&state.progress))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }
}
