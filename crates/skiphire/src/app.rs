use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult,
    progress_steps::ProgressSteps,
    status_bar::StatusBar,
    summary_bar::{SUMMARY_BAR_HEIGHT, SummaryBar},
};
use crate::config::AppConfig;
use crate::modals::{
    ModalResult, handle_modal_key, handle_overlay_key, render_modal, render_skip_overlay,
};
use crate::screens::skip_select::SkipSelectScreen;
use crate::state::{AppState, ModalState};
use crate::worker::FetchWorker;

/// How long to wait for input before checking the worker again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    worker: Box<dyn FetchWorker>,
    progress_steps: ProgressSteps,
    skip_select_screen: SkipSelectScreen,
    summary_bar: SummaryBar,
    status_bar: StatusBar,
}

impl App {
    pub fn new(config: &AppConfig, worker: Box<dyn FetchWorker>) -> Self {
        Self {
            state: AppState::new(config),
            worker,
            progress_steps: ProgressSteps::new(),
            skip_select_screen: SkipSelectScreen::new(),
            summary_bar: SummaryBar::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            self.state.pump(self.worker.as_ref());
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let summary_height = if self.state.selection.selected().is_some() {
            SUMMARY_BAR_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),              // Progress steps
                Constraint::Min(0),                 // Content
                Constraint::Length(summary_height), // Summary bar
                Constraint::Length(2),              // Status bar
            ])
            .split(frame.area());

        self.progress_steps.render(frame, chunks[0], &self.state);
        self.skip_select_screen.render(frame, chunks[1], &self.state);
        self.summary_bar.render(frame, chunks[2], &self.state);
        self.status_bar.render(frame, chunks[3], &self.state);

        if self.state.selection.overlay_visible() {
            render_skip_overlay(frame, &self.state);
        }

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            if handle_modal_key(key_event, &mut self.state) == ModalResult::Dismissed {
                self.state.dismiss_modal();
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            _ => {}
        }

        // The overlay owns the keyboard while it is open
        let result = if self.state.selection.overlay_visible() {
            handle_overlay_key(key_event, &mut self.state)
        } else {
            self.skip_select_screen
                .handle_key(key_event, &mut self.state)
        };

        match result {
            EventResult::Proceed(proceed) => {
                tracing::info!(
                    skip_id = %proceed.key.id,
                    extras = proceed.extras.applicable(&proceed.skip).count(),
                    next_step = self.state.progress.current().name(),
                    "Handing selection to the next booking step"
                );
            }
            EventResult::NotHandled => {
                tracing::trace!(code = ?key_event.code, "Unhandled key");
            }
            EventResult::Handled => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use skiphire_core::{BookingStep, FetchError, SelectionPhase, SkipId, SkipOption};

    use super::*;
    use crate::worker::{FetchRequest, FetchResponse};

    /// Serves a fixed catalog for every request
    struct StaticWorker {
        items: Vec<SkipOption>,
        pending: RefCell<Vec<u64>>,
    }

    impl FetchWorker for StaticWorker {
        fn send(&self, request: FetchRequest) -> bool {
            if let FetchRequest::Fetch { generation, .. } = request {
                self.pending.borrow_mut().push(generation);
            }
            true
        }

        fn try_recv(&self) -> Option<FetchResponse> {
            let generation = self.pending.borrow_mut().pop()?;
            Some(FetchResponse {
                generation,
                result: Ok::<_, FetchError>(self.items.clone()),
            })
        }
    }

    fn app_with(count: u64) -> App {
        let items = (1..=count)
            .map(|id| SkipOption {
                id: SkipId(id),
                size: 4 + 2 * id as u32,
                hire_period_days: 14,
                price_before_vat: 250.0,
                vat: 20.0,
                allowed_on_road: true,
                allows_heavy_waste: false,
                postcode: "NR32".into(),
            })
            .collect();
        let config = AppConfig {
            base_url: Some("https://catalog.example".into()),
            ..Default::default()
        };
        let mut app = App::new(
            &config,
            Box::new(StaticWorker {
                items,
                pending: RefCell::new(Vec::new()),
            }),
        );
        app.state.pump(app.worker.as_ref());
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_full_selection_flow() {
        let mut app = app_with(4);
        assert_eq!(app.state().items().len(), 4);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.state().selection.phase(),
            SelectionPhase::SelectedVisible
        );

        // Grid keys are swallowed by the overlay
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state().progress.current(), BookingStep::PermitCheck);
        assert!(matches!(app.state().modal, ModalState::Message(_)));

        // The message has to be dismissed before anything else
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.state().exit);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().modal, ModalState::None);

        assert_eq!(
            app.state().selection.selected_key().map(|k| k.id),
            Some(SkipId(2))
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(1);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);

        let mut app = app_with(1);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }
}
