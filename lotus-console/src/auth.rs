//! Operator auth session
//!
//! The bearer token lives in the client's configuration, not in any
//! ambient storage; logging out is just clearing it there.

use lotus_client::{ClientResult, HttpClient};
use shared::models::UserInfo;

#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    user: Option<UserInfo>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in and store the returned token in the client.
    pub async fn login(
        &mut self,
        client: &mut HttpClient,
        username: &str,
        password: &str,
    ) -> ClientResult<()> {
        let resp = client.login(username, password).await?;
        client.set_token(resp.access_token);
        tracing::info!(user = username, "logged in");

        // identity lookup is best-effort, the login already succeeded
        self.user = client.validate_token().await.ok();
        Ok(())
    }

    /// Check whether the configured token is still accepted.
    ///
    /// Returns `Ok(false)` for a rejected token; transport errors still
    /// surface as `Err` so the caller can retry instead of bouncing the
    /// operator to the login screen.
    pub async fn validate(&mut self, client: &HttpClient) -> ClientResult<bool> {
        match client.validate_token().await {
            Ok(user) => {
                self.user = Some(user);
                Ok(true)
            }
            Err(e) if e.is_unauthorized() => {
                self.user = None;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Drop the token and the cached identity.
    pub fn logout(&mut self, client: &mut HttpClient) {
        client.clear_token();
        self.user = None;
        tracing::info!("logged out");
    }

    pub fn is_authenticated(&self, client: &HttpClient) -> bool {
        client.token().is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
}
