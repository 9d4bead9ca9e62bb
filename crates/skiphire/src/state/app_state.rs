use skiphire_core::{
    BookingProgress, CatalogFetch, Extra, FetchError, FetchState, Location, Page, Pager, Proceed,
    RequestTicket, Resolution, Selection, SkipKey, SkipOption, grand_total,
};

use crate::catalog::CatalogEndpoint;
use crate::config::AppConfig;
use crate::util::format::format_pounds;
use crate::worker::{FetchRequest, FetchResponse, FetchWorker};

use super::{MessageModal, ModalState};

/// Maximum number of cards per grid row
pub const GRID_COLUMNS: usize = 3;

/// Keyboard cursor movement inside the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// Move a cursor over `len` cards laid out in rows of `columns`.
/// Moves that would leave the page are ignored.
pub fn step_cursor(cursor: usize, len: usize, columns: usize, mv: CursorMove) -> usize {
    if len == 0 {
        return 0;
    }
    let cursor = cursor.min(len - 1);
    match mv {
        CursorMove::Left => cursor.saturating_sub(1),
        CursorMove::Right => (cursor + 1).min(len - 1),
        CursorMove::Up if cursor >= columns => cursor - columns,
        CursorMove::Down if cursor + columns < len => cursor + columns,
        CursorMove::Up | CursorMove::Down => cursor,
    }
}

/// Everything the "Select Skip" screen owns for its lifetime
#[derive(Debug)]
pub struct AppState {
    pub location: Location,
    endpoint: Result<CatalogEndpoint, FetchError>,
    pub fetch: CatalogFetch,
    pub pager: Pager,
    pub selection: Selection,
    pub progress: BookingProgress,
    /// Card under the keyboard cursor, as an index into the current page
    pub cursor: usize,
    pub modal: ModalState,
    /// When the catalog last loaded successfully
    pub last_updated: Option<jiff::Zoned>,
    /// A fetch should be issued on the next pump (mount or retry)
    fetch_requested: bool,
    pub exit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            location: config.location(),
            endpoint: config.endpoint(),
            fetch: CatalogFetch::new(),
            pager: Pager::new(config.page_size()),
            selection: Selection::default(),
            progress: BookingProgress::default(),
            cursor: 0,
            modal: ModalState::None,
            last_updated: None,
            fetch_requested: true,
            exit: false,
        }
    }

    pub fn items(&self) -> &[SkipOption] {
        self.fetch.items()
    }

    pub fn page(&self) -> Page<'_, SkipOption> {
        self.pager.page(self.fetch.items())
    }

    pub fn grid_columns(&self) -> usize {
        self.pager.page_size().get().min(GRID_COLUMNS)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.fetch.state(), FetchState::Failed { .. })
    }

    // ========== Fetch lifecycle ==========

    /// Ask for another attempt. Only honoured from the error screen.
    pub fn request_retry(&mut self) -> bool {
        if !self.is_failed() {
            return false;
        }
        tracing::info!("Retry requested");
        self.fetch_requested = true;
        true
    }

    /// Issue any pending fetch, then apply every response the worker has ready.
    pub fn pump(&mut self, worker: &dyn FetchWorker) {
        if self.fetch_requested {
            self.fetch_requested = false;
            self.start_fetch(worker);
        }
        while let Some(response) = worker.try_recv() {
            self.apply_response(response);
        }
    }

    fn start_fetch(&mut self, worker: &dyn FetchWorker) {
        let ticket = self.fetch.begin();

        let url = match &self.endpoint {
            Ok(endpoint) => endpoint.url_for(&self.location),
            Err(e) => Err(e.clone()),
        };

        let url = match url {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(error = %e, "Catalog endpoint unavailable, no request sent");
                self.fetch.resolve(ticket, Err(e));
                return;
            }
        };

        let request = FetchRequest::Fetch {
            generation: ticket.generation(),
            url,
        };
        if !worker.send(request) {
            tracing::error!("Catalog worker is not running");
            self.fetch.resolve(
                ticket,
                Err(FetchError::Network("worker unavailable".to_string())),
            );
        }
    }

    pub fn apply_response(&mut self, response: FetchResponse) {
        let FetchResponse { generation, result } = response;
        let failure = result.as_ref().err().cloned();
        let ticket = RequestTicket::from_generation(generation);

        match self.fetch.resolve(ticket, result) {
            Resolution::Stale => {
                tracing::debug!(
                    generation,
                    latest = self.fetch.generation(),
                    "Discarding stale catalog response"
                );
            }
            Resolution::Applied => {
                if let Some(e) = failure {
                    tracing::error!(generation, error = %e, "Skip catalog fetch failed");
                    return;
                }
                tracing::info!(count = self.items().len(), "Skip catalog loaded");
                self.pager.reset();
                self.cursor = 0;
                self.last_updated = Some(jiff::Zoned::now());
            }
        }
    }

    // ========== Pagination ==========

    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next(self.items().len());
        if moved {
            self.cursor = 0;
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.pager.prev(self.items().len());
        if moved {
            self.cursor = 0;
        }
        moved
    }

    pub fn first_page(&mut self) -> bool {
        let moved = self.pager.go_to(1, self.items().len());
        if moved {
            self.cursor = 0;
        }
        moved
    }

    pub fn last_page(&mut self) -> bool {
        let moved = self.pager.go_to(usize::MAX, self.items().len());
        if moved {
            self.cursor = 0;
        }
        moved
    }

    pub fn move_cursor(&mut self, mv: CursorMove) {
        let len = self.page().visible.len();
        self.cursor = step_cursor(self.cursor, len, self.grid_columns(), mv);
    }

    // ========== Selection ==========

    /// Select the card under the cursor and open the overlay
    pub fn select_at_cursor(&mut self) -> bool {
        let page = self.page();
        let Some(skip) = page.visible.get(self.cursor) else {
            return false;
        };
        let key = SkipKey::new(page.first_index + self.cursor, skip.id);
        let skip = skip.clone();

        tracing::info!(skip_id = %key.id, index = key.index, size = skip.size, "Skip selected");
        self.selection.select(key, skip);
        true
    }

    pub fn close_overlay(&mut self) -> bool {
        self.selection.close_overlay()
    }

    pub fn toggle_extra(&mut self, extra: Extra) -> bool {
        self.selection.toggle_extra(extra)
    }

    /// Confirm the selection and hand over to the next booking step.
    ///
    /// Later steps are not built yet, so the hand-over is a message.
    pub fn confirm_selection(&mut self) -> Option<Proceed> {
        let proceed = self.selection.confirm()?;
        let total = grand_total(&proceed.skip, &proceed.extras);
        tracing::info!(
            skip_id = %proceed.key.id,
            index = proceed.key.index,
            total,
            "Skip selection confirmed"
        );

        let next = self.progress.advance();
        self.modal = ModalState::Message(MessageModal::info(
            next.name(),
            &format!(
                "{} yard skip selected ({} inc. VAT). {} is not available yet.",
                proceed.skip.size,
                format_pounds(total),
                next.name()
            ),
        ));
        Some(proceed)
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = ModalState::None;
    }
}
