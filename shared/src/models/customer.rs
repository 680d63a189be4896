//! Customer and chat-session models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::period::Period;

/// Who is currently driving the conversation with this customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlMode {
    Bot,
    Admin,
}

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub control_mode: ControlMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllCustomersResponse {
    pub customers: Vec<Customer>,
}

/// Chat session entity. `ended_at` is absent while the session is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub started_at: String,
    pub last_active_at: String,
    #[serde(default)]
    pub ended_at: Option<String>,
}

impl Session {
    /// Session has not ended yet.
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn started(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.started_at).ok()
    }

    pub fn ended(&self) -> Option<DateTime<FixedOffset>> {
        self.ended_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSessionsResponse {
    pub customer_id: i64,
    pub sessions: Vec<Session>,
}

/// Completed-appointment count for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCountResponse {
    pub customer_id: i64,
    pub appointment_completions: u64,
}

/// Customer-scoped timing metric; same field conventions as the
/// dashboard-wide [`TimeResponse`](super::metrics::TimeResponse).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerTimeResponse {
    pub customer_id: i64,
    #[serde(default)]
    pub period: Option<Period>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_completion_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_agent_response_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_customer_response_time: Option<f64>,
}

/// Customer-scoped automation rate (0-1 fraction, absent = 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAutomationRateResponse {
    pub customer_id: i64,
    #[serde(default)]
    pub period: Option<Period>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub avg_automation_rate: f64,
}
