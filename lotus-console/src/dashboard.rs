//! Dashboard state
//!
//! Seven aggregate metrics plus the customer directory, each in its own
//! [`DataCell`]. A refresh fans the fetches out concurrently and applies
//! every result to its own cell, so ordering between them is free and a
//! failure in one leaves the others (and the previously displayed value
//! of the failed one) alone.

use lotus_client::{ClientResult, HttpClient};
use serde::Serialize;
use shared::models::{Customer, Period};

use crate::cell::DataCell;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    /// Automation rate in percent (0-100)
    pub automation_rate: DataCell<f64>,
    /// Average customer response time, seconds
    pub customer_response_time: DataCell<f64>,
    /// Average agent response time, seconds
    pub agent_response_time: DataCell<f64>,
    /// Average session-start-to-appointment time, seconds
    pub order_completion_time: DataCell<f64>,
    pub new_orders: DataCell<u64>,
    pub returning_customers: DataCell<u64>,
    pub new_customers: DataCell<u64>,
    /// Customer directory, fetched independently of the metrics
    pub customers: DataCell<Vec<Customer>>,
    /// Raised when any fetch reports a 401. Suppresses further
    /// refreshes until [`DashboardState::reset_session`]; displayed
    /// values and the stored token stay untouched.
    pub session_expired: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any metric still in flight.
    pub fn loading(&self) -> bool {
        self.automation_rate.loading
            || self.customer_response_time.loading
            || self.agent_response_time.loading
            || self.order_completion_time.loading
            || self.new_orders.loading
            || self.returning_customers.loading
            || self.new_customers.loading
            || self.customers.loading
    }

    /// Fetch every metric and the customer list for the given period.
    ///
    /// No-op while the session-expired prompt is up.
    pub async fn refresh(&mut self, client: &HttpClient, period: Period) {
        if self.session_expired {
            return;
        }

        self.automation_rate.begin();
        self.customer_response_time.begin();
        self.agent_response_time.begin();
        self.order_completion_time.begin();
        self.new_orders.begin();
        self.returning_customers.begin();
        self.new_customers.begin();
        self.customers.begin();

        let (
            automation_rate,
            customer_response_time,
            agent_response_time,
            order_completion_time,
            new_orders,
            returning_customers,
            new_customers,
            customers,
        ) = tokio::join!(
            client.avg_automation_rate(period),
            client.customer_avg_response_time(period),
            client.agent_avg_response_time(period),
            client.appointment_avg_completion_time(period),
            client.new_appointments(period),
            client.returning_customers(period),
            client.new_customers(period),
            client.all_customers(),
        );

        self.flag_unauthorized(&automation_rate);
        self.flag_unauthorized(&customer_response_time);
        self.flag_unauthorized(&agent_response_time);
        self.flag_unauthorized(&order_completion_time);
        self.flag_unauthorized(&new_orders);
        self.flag_unauthorized(&returning_customers);
        self.flag_unauthorized(&new_customers);
        self.flag_unauthorized(&customers);

        self.automation_rate.apply(automation_rate);
        self.customer_response_time.apply(customer_response_time);
        self.agent_response_time.apply(agent_response_time);
        self.order_completion_time.apply(order_completion_time);
        self.new_orders.apply(new_orders);
        self.returning_customers.apply(returning_customers);
        self.new_customers.apply(new_customers);
        self.customers.apply(customers);
    }

    /// Clear the session-expired prompt after a successful re-login.
    pub fn reset_session(&mut self) {
        self.session_expired = false;
    }

    fn flag_unauthorized<T>(&mut self, result: &ClientResult<T>) {
        if let Err(e) = result {
            if e.is_unauthorized() && !self.session_expired {
                tracing::warn!("session expired, prompting for re-login");
                self.session_expired = true;
            }
        }
    }
}
