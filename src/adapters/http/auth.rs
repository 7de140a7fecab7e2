//! HTTP implementation of the `AuthProvider` port.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Serialize;

use crate::ports::{ApiError, AuthError, AuthProvider, Credentials};

use super::client::ApiClient;
use super::payloads::LoginResponse;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `AuthProvider` backed by `POST auth/login/`.
///
/// Login is the one call made without a bearer credential; the client
/// simply has no token to attach yet.
pub struct HttpAuthProvider {
    client: Arc<ApiClient>,
}

impl HttpAuthProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn login(&self, credentials: &Credentials) -> Result<SecretString, AuthError> {
        let request = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        let response: LoginResponse = self
            .client
            .post_json("auth/login/", &request)
            .await
            .map_err(|err| match err.server_message() {
                // The backend rejects bad credentials with a
                // `non_field_errors` envelope; surface it verbatim.
                Some(message) if !matches!(err, ApiError::Network(_)) => {
                    AuthError::InvalidCredentials(message)
                }
                _ => AuthError::Api(err),
            })?;

        match response.token {
            Some(token) if !token.is_empty() => Ok(SecretString::new(token)),
            _ => Err(AuthError::Api(ApiError::Decode(
                "login response did not contain a token".to_string(),
            ))),
        }
    }
}
