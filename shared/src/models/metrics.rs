//! Dashboard metric responses
//!
//! Every metrics endpoint returns the resolved reporting window alongside
//! its single typed value. Averages are absent when the window holds no
//! data; the client maps absent to zero.

use serde::{Deserialize, Serialize};

use super::period::Period;

/// Count metric (new customers, returning customers, new appointments).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub period: Option<Period>,
    pub start_date: String,
    pub end_date: String,
    pub count: u64,
}

/// Timing metric in seconds.
///
/// The server fills exactly one of the average fields depending on the
/// endpoint; the others stay absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeResponse {
    #[serde(default)]
    pub period: Option<Period>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_response_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_completion_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_customer_response_time: Option<f64>,
}

/// Automation rate as a 0-1 fraction; the client converts to percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationRateResponse {
    #[serde(default)]
    pub period: Option<Period>,
    pub start_date: String,
    pub end_date: String,
    pub avg_automation_rate: f64,
}
