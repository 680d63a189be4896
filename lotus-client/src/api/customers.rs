//! Customer API
//!
//! Customer directory plus the per-customer variants of the dashboard
//! metrics.

use shared::models::{
    AllCustomersResponse, AppointmentCountResponse, Customer, CustomerAutomationRateResponse,
    CustomerSessionsResponse, CustomerTimeResponse, Period, Session,
};

use super::period_query;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Full customer directory.
    pub async fn all_customers(&self) -> ClientResult<Vec<Customer>> {
        let resp: AllCustomersResponse = self.get_json(self.api_url("/customer/all")).await?;
        Ok(resp.customers)
    }

    /// Chat sessions of one customer.
    pub async fn customer_sessions(&self, customer_id: i64) -> ClientResult<Vec<Session>> {
        let resp: CustomerSessionsResponse = self
            .get_json(self.api_url(&format!("/customer/{}/sessions", customer_id)))
            .await?;
        Ok(resp.sessions)
    }

    /// Number of appointments this customer completed.
    pub async fn customer_appointment_completions(&self, customer_id: i64) -> ClientResult<u64> {
        let resp: AppointmentCountResponse = self
            .get_json(self.api_url(&format!(
                "/customer/{}/appointment-completions/count",
                customer_id
            )))
            .await?;
        Ok(resp.appointment_completions)
    }

    /// Average appointment completion time for one customer, in seconds.
    pub async fn customer_avg_completion_time(
        &self,
        customer_id: i64,
        period: Option<Period>,
    ) -> ClientResult<f64> {
        let resp: CustomerTimeResponse = self
            .get_json(self.api_url(&format!(
                "/customer/{}/appointment-completion-avg-time{}",
                customer_id,
                period_query(period)
            )))
            .await?;
        Ok(resp.avg_completion_time.unwrap_or_default())
    }

    /// Average agent response time towards one customer, in seconds.
    pub async fn customer_agent_avg_response_time(
        &self,
        customer_id: i64,
        period: Option<Period>,
    ) -> ClientResult<f64> {
        let resp: CustomerTimeResponse = self
            .get_json(self.api_url(&format!(
                "/customer/{}/agent-avg-response-time{}",
                customer_id,
                period_query(period)
            )))
            .await?;
        Ok(resp.avg_agent_response_time.unwrap_or_default())
    }

    /// Average response time of one customer, in seconds.
    pub async fn customer_own_avg_response_time(
        &self,
        customer_id: i64,
        period: Option<Period>,
    ) -> ClientResult<f64> {
        let resp: CustomerTimeResponse = self
            .get_json(self.api_url(&format!(
                "/customer/{}/customer-avg-response-time{}",
                customer_id,
                period_query(period)
            )))
            .await?;
        Ok(resp.avg_customer_response_time.unwrap_or_default())
    }

    /// Automation rate for one customer, as a percentage (0-100).
    pub async fn customer_avg_automation_rate(
        &self,
        customer_id: i64,
        period: Option<Period>,
    ) -> ClientResult<f64> {
        let resp: CustomerAutomationRateResponse = self
            .get_json(self.api_url(&format!(
                "/customer/{}/avg-automation-rate{}",
                customer_id,
                period_query(period)
            )))
            .await?;
        Ok(resp.avg_automation_rate * 100.0)
    }
}
