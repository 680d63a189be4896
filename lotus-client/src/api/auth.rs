//! Auth API

use shared::models::{
    LoginRequest, LoginResponse, ResetPasswordRequest, ResetPasswordResponse, UserInfo,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Login with username and password.
    ///
    /// The auth service expects a form-urlencoded body. On success the
    /// returned bearer token should be stored via
    /// [`HttpClient::set_token`]; login itself never mutates the client.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        self.post_form(self.auth_url("/auth/login"), &request).await
    }

    /// Validate the configured token, returning the identity behind it.
    pub async fn validate_token(&self) -> ClientResult<UserInfo> {
        self.get_json(self.auth_url("/auth/validate")).await
    }

    /// Reset a password by username and registered email.
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> ClientResult<ResetPasswordResponse> {
        self.post_json(self.auth_url("/auth/reset-password"), request)
            .await
    }
}
