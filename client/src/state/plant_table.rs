//! View state for the plant table and search results.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::plant_table` owns one `RwSignal<PlantTableState>` and drives
//! it from API callbacks; the parent status section feeds search results in.
//! Everything here is synchronous so the transitions are testable without a
//! browser.
//!
//! DESIGN
//! ======
//! The row set comes from exactly one source at a time: the eager fetch of all
//! plants, or a search result supplied by the parent. Pagination is purely
//! client-side over that row set. Deletes are confirmed, then pending, and the
//! row only leaves the set once the server acknowledges it.

#[cfg(test)]
#[path = "plant_table_test.rs"]
mod plant_table_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::net::types::Plant;
use crate::state::ui::MOBILE_MAX_WIDTH;

/// Page sizes offered by the pager.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

const QR_PREFIX: &str = "<img src=\"data:image/";
const QR_BASE64_MARKER: &str = ";base64,";

/// Where the current rows came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowSource {
    #[default]
    All,
    Search,
}

/// Status of the table's own fetch-all call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready,
}

/// Card list on narrow screens, table otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableLayout {
    Cards,
    Table,
}

impl TableLayout {
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH { Self::Cards } else { Self::Table }
    }
}

/// An embedded QR image extracted from a plant's `qr` markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrImage {
    /// Image subtype, e.g. `png` or `svg+xml`.
    pub subtype: String,
    /// Base64 payload, already validated.
    pub payload: String,
}

impl QrImage {
    pub fn data_url(&self) -> String {
        format!("data:image/{};base64,{}", self.subtype, self.payload)
    }

    pub fn extension(&self) -> &str {
        match self.subtype.as_str() {
            "svg+xml" => "svg",
            "jpeg" => "jpg",
            other => other,
        }
    }

    /// File name offered by the download link.
    pub fn download_name(&self, code: &str) -> String {
        format!("PlantTracker_QR_{code}.{}", self.extension())
    }
}

/// Extract the data URL from `<img src="data:image/<type>;base64,<payload>" ...>`.
///
/// Returns `None` for anything else, including payloads that are not valid base64.
pub fn decode_qr_image(markup: &str) -> Option<QrImage> {
    let rest = markup.trim_start().strip_prefix(QR_PREFIX)?;
    let (subtype, rest) = rest.split_once(QR_BASE64_MARKER)?;
    let valid_subtype = !subtype.is_empty()
        && subtype.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_subtype {
        return None;
    }
    let payload = rest.split('"').next()?.trim();
    if payload.is_empty() || STANDARD.decode(payload).is_err() {
        return None;
    }
    Some(QrImage { subtype: subtype.to_owned(), payload: payload.to_owned() })
}

/// QR modal contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QrModal {
    #[default]
    Closed,
    Available { code: String, image: QrImage },
    Unavailable { code: String },
}

/// Table/search view state.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantTableState {
    pub rows: Vec<Plant>,
    pub source: RowSource,
    pub load: LoadState,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
    pub qr: QrModal,
    /// Row awaiting the user's delete confirmation.
    pub confirm_delete: Option<String>,
    /// Row whose delete call is in flight.
    pub pending_delete: Option<String>,
    /// Last row-action failure shown above the table.
    pub notice: Option<String>,
}

impl Default for PlantTableState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            source: RowSource::All,
            load: LoadState::Idle,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            qr: QrModal::Closed,
            confirm_delete: None,
            pending_delete: None,
            notice: None,
        }
    }
}

impl PlantTableState {
    /// Apply the parent's search result (or its absence).
    ///
    /// Returns `true` when the caller must fetch all plants.
    pub fn apply_search_result(&mut self, result: Option<Vec<Plant>>) -> bool {
        self.page = 0;
        match result {
            Some(rows) => {
                self.adopt_search_result(rows);
                false
            }
            None => {
                self.begin_fetch();
                true
            }
        }
    }

    pub fn adopt_search_result(&mut self, rows: Vec<Plant>) {
        self.rows = rows;
        self.source = RowSource::Search;
        self.load = LoadState::Ready;
        self.page = 0;
    }

    pub fn begin_fetch(&mut self) {
        self.source = RowSource::All;
        self.load = LoadState::Loading;
        self.page = 0;
    }

    /// Fetch-all completed. Ignored if a search result arrived meanwhile.
    pub fn fetch_succeeded(&mut self, rows: Vec<Plant>) {
        if self.source != RowSource::All {
            return;
        }
        self.rows = rows;
        self.load = LoadState::Ready;
        self.clamp_page();
    }

    pub fn fetch_failed(&mut self, message: String) {
        if self.source != RowSource::All {
            return;
        }
        self.load = LoadState::Failed(message);
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn fetch_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    /// Single-row results are highlighted.
    pub fn highlight_single(&self) -> bool {
        self.rows.len() == 1
    }

    /// Number of pages; an empty table still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size.max(1)).max(1)
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> &[Plant] {
        let start = (self.page * self.page_size).min(self.rows.len());
        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }

    fn clamp_page(&mut self) {
        self.set_page(self.page);
    }

    // -------------------------------------------------------------------------
    // QR
    // -------------------------------------------------------------------------

    pub fn open_qr(&mut self, code: &str) {
        let image = self
            .rows
            .iter()
            .find(|p| p.code == code)
            .and_then(|p| p.qr.as_deref())
            .and_then(decode_qr_image);
        self.qr = match image {
            Some(image) => QrModal::Available { code: code.to_owned(), image },
            None => QrModal::Unavailable { code: code.to_owned() },
        };
    }

    pub fn close_qr(&mut self) {
        self.qr = QrModal::Closed;
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    pub fn request_delete(&mut self, code: &str) {
        self.confirm_delete = Some(code.to_owned());
        self.notice = None;
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Confirm the requested delete and mark it pending.
    ///
    /// Returns the code to delete, or `None` if nothing was awaiting
    /// confirmation or another delete is still in flight.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.pending_delete.is_some() {
            return None;
        }
        let code = self.confirm_delete.take()?;
        self.pending_delete = Some(code.clone());
        Some(code)
    }

    pub fn is_pending(&self, code: &str) -> bool {
        self.pending_delete.as_deref() == Some(code)
    }

    /// Server confirmed: drop exactly the rows carrying `code`.
    pub fn delete_confirmed(&mut self, code: &str) {
        self.rows.retain(|p| p.code != code);
        if self.is_pending(code) {
            self.pending_delete = None;
        }
        self.clamp_page();
    }

    /// Server refused or the call failed: rows stay as they were.
    pub fn delete_failed(&mut self, code: &str, message: String) {
        if self.is_pending(code) {
            self.pending_delete = None;
        }
        self.notice = Some(message);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
