//! Authenticated HTTP client - the single choke point for every
//! request leaving the console.
//!
//! Responsibilities:
//!
//! 1. Path normalization: the backend routes strictly on trailing
//!    slashes, and a missing one produces a silent 404 rather than an
//!    error. Every path is coerced to end with `/`, or to carry `/`
//!    immediately before its query string. Normalization is
//!    deterministic and idempotent.
//! 2. Credential attachment: when a session token is held it is sent
//!    as `Authorization: Token <token>` on every request.
//! 3. Global session expiry: any 401 clears the session store and
//!    forces one login redirect, then the rejection still propagates
//!    so caller-side error handling fires as well.
//!
//! No request is retried automatically.

use std::sync::Arc;

use reqwest::{header, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::ports::{ApiError, Navigator, SessionStore};

/// HTTP client wrapping every call to the analytics backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Builds a client from configuration and the injected session
    /// and navigation ports.
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    /// Coerces a request path into the backend's strict-trailing-slash
    /// form. Idempotent: normalizing an already-normalized path is a
    /// no-op.
    pub fn normalize_path(path: &str) -> String {
        if !path.contains('?') {
            if path.ends_with('/') {
                path.to_string()
            } else {
                format!("{}/", path)
            }
        } else if path.contains("/?") {
            path.to_string()
        } else {
            path.replacen('?', "/?", 1)
        }
    }

    fn url_for(&self, path: &str) -> String {
        let normalized = Self::normalize_path(path);
        format!("{}/{}", self.base_url, normalized.trim_start_matches('/'))
    }

    /// GET a path and decode its JSON payload.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url_for(path);
        let response = self.dispatch(self.http.get(&url)).await?;
        Self::decode(path, response).await
    }

    /// POST a JSON body to a path and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        let response = self.dispatch(self.http.post(&url).json(body)).await?;
        Self::decode(path, response).await
    }

    /// Attaches the bearer credential, sends, and applies the global
    /// response policy.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.header(
                header::AUTHORIZATION,
                format!("Token {}", token.expose_secret()),
            ),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.ok();
            self.handle_session_expiry();
            return Err(ApiError::Unauthorized { body });
        }
        if !status.is_success() {
            let body = response.text().await.ok();
            tracing::warn!(status = status.as_u16(), "backend request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Clears the session and redirects to login, exactly once per
    /// expiry: of several concurrent 401s, only the caller that
    /// actually emptied the store triggers the redirect.
    fn handle_session_expiry(&self) {
        if self.session.clear() {
            tracing::info!("session expired, forcing login redirect");
            self.navigator.redirect_to_login();
        }
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(path, error = %e, "malformed backend payload");
            ApiError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::navigation::RecordingNavigator;
    use crate::adapters::session::InMemorySessionStore;
    use proptest::prelude::*;
    use serde_json::Value;

    fn client_against(
        server: &mockito::ServerGuard,
        session: Arc<InMemorySessionStore>,
        navigator: Arc<RecordingNavigator>,
    ) -> ApiClient {
        let config = ApiConfig {
            base_url: server.url(),
            request_timeout_secs: 5,
        };
        ApiClient::new(&config, session, navigator).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Path normalization
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn normalize_appends_trailing_slash() {
        assert_eq!(
            ApiClient::normalize_path("analytics/streak"),
            "analytics/streak/"
        );
    }

    #[test]
    fn normalize_keeps_existing_trailing_slash() {
        assert_eq!(
            ApiClient::normalize_path("analytics/streak/"),
            "analytics/streak/"
        );
    }

    #[test]
    fn normalize_inserts_slash_before_query() {
        assert_eq!(
            ApiClient::normalize_path("analytics/revenue?period=daily"),
            "analytics/revenue/?period=daily"
        );
    }

    #[test]
    fn normalize_keeps_existing_slash_before_query() {
        assert_eq!(
            ApiClient::normalize_path("analytics/revenue/?period=daily"),
            "analytics/revenue/?period=daily"
        );
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(path in ".{0,64}") {
            let once = ApiClient::normalize_path(&path);
            let twice = ApiClient::normalize_path(&once);
            prop_assert_eq!(once, twice);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Credential attachment and response policy
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn attaches_token_header_when_session_is_held() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/analytics/storage/")
            .match_header("authorization", "Token tok-abc")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::with_token("tok-abc"));
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, session, navigator);

        let value: Value = client.get_json("analytics/storage").await.unwrap();
        assert_eq!(value["ok"], true);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sends_no_auth_header_when_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login/")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_body(r#"{"token": "tok"}"#)
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, session, navigator);

        let _: Value = client
            .post_json("auth/login/", &serde_json::json!({"email": "a", "password": "b"}))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_clears_session_redirects_once_and_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/analytics/sales/")
            .with_status(401)
            .with_body(r#"{"detail": "Invalid token."}"#)
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::with_token("stale"));
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, Arc::clone(&session), Arc::clone(&navigator));

        let result: Result<Value, ApiError> = client.get_json("analytics/sales").await;

        // Global side effects fired...
        assert!(!session.is_authenticated());
        assert_eq!(navigator.redirect_count(), 1);
        // ...and the caller still sees the rejection.
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn concurrent_unauthorized_responses_redirect_exactly_once() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/analytics/sales/")
            .with_status(401)
            .expect_at_least(2)
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::with_token("stale"));
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, Arc::clone(&session), Arc::clone(&navigator));

        let (a, b): (Result<Value, _>, Result<Value, _>) = futures::join!(
            client.get_json("analytics/sales"),
            client.get_json("analytics/sales")
        );

        assert!(a.is_err());
        assert!(b.is_err());
        assert_eq!(navigator.redirect_count(), 1);
    }

    #[tokio::test]
    async fn non_success_status_carries_body_to_caller() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/analytics/device/")
            .with_status(500)
            .with_body(r#"{"error": "upstream exploded"}"#)
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::with_token("tok"));
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, session, Arc::clone(&navigator));

        let err = client.get_json::<Value>("analytics/device").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(err.server_message().as_deref(), Some("upstream exploded"));
        // Only 401 triggers the redirect.
        assert_eq!(navigator.redirect_count(), 0);
    }

    #[tokio::test]
    async fn malformed_payload_surfaces_as_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/analytics/retention/")
            .with_body("not json at all")
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::with_token("tok"));
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, session, navigator);

        #[derive(Debug, serde::Deserialize)]
        struct Retention {
            #[allow(dead_code)]
            data: Vec<u64>,
        }
        let err = client.get_json::<Retention>("analytics/retention").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn requests_hit_the_normalized_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/analytics/revenue/?period=weekly")
            .with_body(r#"{"data": {}}"#)
            .create_async()
            .await;

        let session = Arc::new(InMemorySessionStore::with_token("tok"));
        let navigator = Arc::new(RecordingNavigator::new());
        let client = client_against(&server, session, navigator);

        let _: Value = client
            .get_json("analytics/revenue?period=weekly")
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
