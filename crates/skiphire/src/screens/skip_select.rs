use crate::components::skip_card::render_skip_card;
use crate::components::{Component, EventResult};
use crate::modals::{HelpText, centered_rect};
use crate::state::{AppState, CursorMove};
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, NEGATIVE_COLOR};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use skiphire_core::{FetchState, Page, SkipOption};

use super::Screen;

/// Tallest card body plus borders
const CARD_HEIGHT: u16 = 11;

pub const EMPTY_MESSAGE: &str = "No skips available for this location";

pub struct SkipSelectScreen;

impl SkipSelectScreen {
    pub fn new() -> Self {
        Self
    }

    /// "Page 2 of 3 · items 7–12 of 14", or `None` when one page holds everything
    pub fn page_label(page: &Page<'_, SkipOption>, item_count: usize) -> Option<String> {
        if !page.needs_controls() {
            return None;
        }
        Some(format!(
            "Page {} of {} · items {}–{} of {}",
            page.current_page,
            page.total_pages,
            page.first_index + 1,
            page.last_index,
            item_count
        ))
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let area = centered_rect(40, 3, area);
        let paragraph = Paragraph::new(vec![
            Line::styled(
                "Loading available skips...",
                Style::default().fg(ACCENT_COLOR),
            ),
            Line::from(""),
            Line::styled("Please wait", Style::default().fg(HELP_COLOR)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let area = centered_rect(50, 7, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Spacing
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Retry hint
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Oops! Something went wrong",
                Style::default()
                    .fg(NEGATIVE_COLOR)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
        frame.render_widget(
            HelpText::new()
                .key("[r]", Color::Yellow, "Try Again")
                .build_centered(),
            chunks[3],
        );
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let area = centered_rect(50, 1, area);
        frame.render_widget(
            Paragraph::new(Line::styled(EMPTY_MESSAGE, Style::default().fg(HELP_COLOR)))
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let page = state.page();
        if page.is_empty() {
            self.render_empty(frame, area);
            return;
        }

        let label = Self::page_label(&page, state.items().len());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(if label.is_some() { 1 } else { 0 }),
            ])
            .split(area);

        let columns = state.grid_columns();
        let row_count = page.visible.len().div_ceil(columns);
        let mut row_constraints = vec![Constraint::Max(CARD_HEIGHT); row_count];
        row_constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(chunks[0]);

        let col_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
        for (row_idx, row_cards) in page.visible.chunks(columns).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(col_constraints.clone())
                .split(rows[row_idx]);

            for (col_idx, skip) in row_cards.iter().enumerate() {
                let offset = row_idx * columns + col_idx;
                render_skip_card(
                    frame,
                    cells[col_idx],
                    skip,
                    state.selection.is_selected(page.first_index + offset),
                    offset == state.cursor,
                );
            }
        }

        if let Some(label) = label {
            let nav = Line::from(vec![
                Span::styled("← [p] ", Style::default().fg(dim_unless(page.has_prev))),
                Span::raw(label),
                Span::styled(" [n] →", Style::default().fg(dim_unless(page.has_next))),
            ]);
            frame.render_widget(
                Paragraph::new(nav).alignment(Alignment::Center),
                chunks[1],
            );
        }
    }
}

fn dim_unless(active: bool) -> Color {
    if active { Color::Yellow } else { HELP_COLOR }
}

impl Default for SkipSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SkipSelectScreen {
    fn title(&self) -> &str {
        "Choose Your Skip Size"
    }
}

impl Component for SkipSelectScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.fetch.is_loading() {
            return EventResult::NotHandled;
        }
        if state.is_failed() {
            return match key.code {
                KeyCode::Char('r') => {
                    state.request_retry();
                    EventResult::Handled
                }
                _ => EventResult::NotHandled,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => state.move_cursor(CursorMove::Left),
            KeyCode::Right | KeyCode::Char('l') => state.move_cursor(CursorMove::Right),
            KeyCode::Up | KeyCode::Char('k') => state.move_cursor(CursorMove::Up),
            KeyCode::Down | KeyCode::Char('j') => state.move_cursor(CursorMove::Down),
            KeyCode::Char('n') | KeyCode::PageDown => {
                state.next_page();
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                state.prev_page();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                state.first_page();
            }
            KeyCode::End | KeyCode::Char('G') => {
                state.last_page();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.select_at_cursor();
            }
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title()))
            .title_bottom(
                Line::styled(
                    " Select the skip size that best suits your needs ",
                    Style::default().fg(HELP_COLOR),
                )
                .alignment(Alignment::Center),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match state.fetch.state() {
            FetchState::Loading => self.render_loading(frame, inner),
            FetchState::Failed { message } => self.render_error(frame, inner, message),
            FetchState::Loaded { .. } => self.render_grid(frame, inner, state),
        }
    }
}
