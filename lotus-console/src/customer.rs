//! Customer detail state
//!
//! Per-customer metrics and session list, plus lazily loaded chat
//! histories keyed by session.

use std::collections::HashMap;

use lotus_client::{ClientResult, HttpClient};
use shared::models::{ChatMessage, Customer, Period, Session};

use crate::cell::DataCell;

#[derive(Debug, Clone)]
pub struct CustomerDetail {
    pub customer: Customer,
    pub appointment_count: DataCell<u64>,
    /// Seconds
    pub avg_completion_time: DataCell<f64>,
    /// Seconds
    pub agent_response_time: DataCell<f64>,
    /// Seconds
    pub customer_response_time: DataCell<f64>,
    /// Percent (0-100)
    pub automation_rate: DataCell<f64>,
    pub sessions: DataCell<Vec<Session>>,
    chat_cache: HashMap<i64, Vec<ChatMessage>>,
}

impl CustomerDetail {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            appointment_count: DataCell::default(),
            avg_completion_time: DataCell::default(),
            agent_response_time: DataCell::default(),
            customer_response_time: DataCell::default(),
            automation_rate: DataCell::default(),
            sessions: DataCell::default(),
            chat_cache: HashMap::new(),
        }
    }

    /// Fetch the session list and all five metrics concurrently.
    pub async fn load(&mut self, client: &HttpClient, period: Option<Period>) {
        let id = self.customer.id;

        self.appointment_count.begin();
        self.avg_completion_time.begin();
        self.agent_response_time.begin();
        self.customer_response_time.begin();
        self.automation_rate.begin();
        self.sessions.begin();

        let (
            appointment_count,
            avg_completion_time,
            agent_response_time,
            customer_response_time,
            automation_rate,
            sessions,
        ) = tokio::join!(
            client.customer_appointment_completions(id),
            client.customer_avg_completion_time(id, period),
            client.customer_agent_avg_response_time(id, period),
            client.customer_own_avg_response_time(id, period),
            client.customer_avg_automation_rate(id, period),
            client.customer_sessions(id),
        );

        self.appointment_count.apply(appointment_count);
        self.avg_completion_time.apply(avg_completion_time);
        self.agent_response_time.apply(agent_response_time);
        self.customer_response_time.apply(customer_response_time);
        self.automation_rate.apply(automation_rate);
        self.sessions.apply(sessions);
    }

    /// Chat history for one session, fetched once and cached.
    pub async fn chat_history(
        &mut self,
        client: &HttpClient,
        session_id: i64,
    ) -> ClientResult<&[ChatMessage]> {
        if !self.chat_cache.contains_key(&session_id) {
            let history = client.chat_history(session_id).await?;
            self.chat_cache.insert(session_id, history);
        }
        Ok(self
            .chat_cache
            .get(&session_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    /// Already-loaded history, if any.
    pub fn cached_chat(&self, session_id: i64) -> Option<&[ChatMessage]> {
        self.chat_cache.get(&session_id).map(Vec::as_slice)
    }
}
