//! Dashboard metrics API
//!
//! Seven aggregate metrics, each behind its own endpoint so one slow or
//! failing metric never blocks the others.

use shared::models::{AutomationRateResponse, CountResponse, Period, TimeResponse};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Customers who interacted before and came back within the period.
    pub async fn returning_customers(&self, period: Period) -> ClientResult<u64> {
        let resp: CountResponse = self
            .get_json(self.api_url(&format!("/main-dashboard/returning-customers?period={}", period)))
            .await?;
        Ok(resp.count)
    }

    /// Customers who interacted for the first time within the period.
    pub async fn new_customers(&self, period: Period) -> ClientResult<u64> {
        let resp: CountResponse = self
            .get_json(self.api_url(&format!("/main-dashboard/new-customers?period={}", period)))
            .await?;
        Ok(resp.count)
    }

    /// Appointments created within the period.
    pub async fn new_appointments(&self, period: Period) -> ClientResult<u64> {
        let resp: CountResponse = self
            .get_json(self.api_url(&format!("/main-dashboard/new-appointments?period={}", period)))
            .await?;
        Ok(resp.count)
    }

    /// Average agent response time in seconds.
    pub async fn agent_avg_response_time(&self, period: Period) -> ClientResult<f64> {
        let resp: TimeResponse = self
            .get_json(self.api_url(&format!(
                "/main-dashboard/agent-avg-response-time?period={}",
                period
            )))
            .await?;
        Ok(resp.avg_response_time.unwrap_or_default())
    }

    /// Average time from session start to appointment completion.
    pub async fn appointment_avg_completion_time(&self, period: Period) -> ClientResult<f64> {
        let resp: TimeResponse = self
            .get_json(self.api_url(&format!(
                "/main-dashboard/appointment-avg-completion-time?period={}",
                period
            )))
            .await?;
        Ok(resp.avg_completion_time.unwrap_or_default())
    }

    /// Average customer response time in seconds.
    pub async fn customer_avg_response_time(&self, period: Period) -> ClientResult<f64> {
        let resp: TimeResponse = self
            .get_json(self.api_url(&format!(
                "/main-dashboard/customer-avg-response-time?period={}",
                period
            )))
            .await?;
        Ok(resp.avg_customer_response_time.unwrap_or_default())
    }

    /// Share of replies handled by the bot, as a percentage (0-100).
    pub async fn avg_automation_rate(&self, period: Period) -> ClientResult<f64> {
        let resp: AutomationRateResponse = self
            .get_json(self.api_url(&format!(
                "/main-dashboard/avg-automation-rate?period={}",
                period
            )))
            .await?;
        // Wire value is a 0-1 fraction
        Ok(resp.avg_automation_rate * 100.0)
    }
}
