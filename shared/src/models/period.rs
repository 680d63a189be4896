//! Reporting period

use serde::{Deserialize, Serialize};

/// Aggregation window for dashboard and customer metrics.
///
/// Serialized lowercase, matching the `period` query parameter the
/// metrics API expects. Endpoints that are not period-scoped simply take
/// no period (`Option<Period>` at the call site).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Hour,
    Day,
    Month,
    Year,
}

impl Period {
    /// All selectable periods, in display order.
    pub const ALL: [Period; 4] = [Period::Hour, Period::Day, Period::Month, Period::Year];

    /// Wire value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
