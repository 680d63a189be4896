//! Per-field fetch state
//!
//! Every dashboard metric (and every independently fetched list) tracks
//! its own loading and error state, so one slow or failing request never
//! blocks the rest of the screen.

use lotus_client::ClientResult;
use serde::Serialize;

/// One independently fetched value with its own loading/error flags.
///
/// Applying an error keeps the previously displayed value; only a
/// successful fetch overwrites it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataCell<T> {
    pub value: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> DataCell<T> {
    /// Mark the cell as loading for a new fetch round.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply one fetch result to this cell.
    pub fn apply(&mut self, result: ClientResult<T>) {
        self.loading = false;
        match result {
            Ok(value) => {
                self.value = value;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Loaded without error.
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
