//! HTTP login against the Kaiwa server.

use async_trait::async_trait;
use kaiwa_core::auth::{AuthError, Authenticator};
use kaiwa_core::domain::{OneTimeToken, Username};
use kaiwa_core::session::Identity;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    otp: String,
}

/// Authenticator backed by the server's `POST /login` endpoint.
///
/// A successful login returns a one-time token; the password is sent in the
/// request body and forgotten as soon as the call returns.
pub struct HttpAuthenticator {
    client: reqwest::Client,
    api_url: String,
}

impl HttpAuthenticator {
    /// Create an authenticator for the given API base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let response = self
            .client
            .post(format!("{}/login", self.api_url))
            .json(&LoginRequest {
                username: username.as_str(),
                password,
            })
            .send()
            .await
            .map_err(|e| AuthError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: LoginResponse = response.json().await.map_err(|e| AuthError::MalformedResponse {
            reason: e.to_string(),
        })?;
        let token = OneTimeToken::new(body.otp).map_err(|e| AuthError::MalformedResponse {
            reason: e.to_string(),
        })?;

        Ok(Identity::new(username.clone(), token))
    }
}
