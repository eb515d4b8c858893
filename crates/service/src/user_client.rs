use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

/// The single failure kind at the client boundary. Transport errors,
/// non-2xx statuses and body-read failures are indistinguishable to the
/// caller; the wrapped message is surfaced verbatim in error responses.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UserServiceError(pub String);

/// Seam over the remote user-service. One outbound HTTP call per
/// invocation, no retries, no caching.
#[async_trait]
pub trait RemoteUserClient: Send + Sync {
    /// `GET {base_url}/api/users`; the raw body is returned unmodified.
    async fn fetch_all_users(&self) -> Result<String, UserServiceError>;

    /// `GET {base_url}/api/users/{id}`. Any integer is forwarded in the
    /// path as-is; the remote side decides what to make of it.
    async fn fetch_user_by_id(&self, id: i64) -> Result<String, UserServiceError>;

    /// `POST {base_url}/api/users/{id}/deactivate?reason=...` with an empty
    /// body. `reason` is URL-encoded before it enters the query string so
    /// reserved characters round-trip intact.
    async fn deactivate_user(&self, id: i64, reason: &str) -> Result<(), UserServiceError>;
}

/// reqwest-backed client for the remote user-service.
pub struct HttpUserClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUserClient {
    /// Build a client with the given request timeout.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UserServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UserServiceError(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wrap an explicitly constructed `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    async fn get_text(&self, url: String) -> Result<String, UserServiceError> {
        info!(%url, "calling user service");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fail(&url, e))?;
        info!(status = %resp.status(), "user service response");
        let resp = resp.error_for_status().map_err(|e| fail(&url, e))?;
        resp.text().await.map_err(|e| fail(&url, e))
    }
}

fn fail(url: &str, e: reqwest::Error) -> UserServiceError {
    error!(%url, err = %e, "user service call failed");
    UserServiceError(e.to_string())
}

#[async_trait]
impl RemoteUserClient for HttpUserClient {
    async fn fetch_all_users(&self) -> Result<String, UserServiceError> {
        self.get_text(format!("{}/api/users", self.base_url)).await
    }

    async fn fetch_user_by_id(&self, id: i64) -> Result<String, UserServiceError> {
        self.get_text(format!("{}/api/users/{}", self.base_url, id)).await
    }

    async fn deactivate_user(&self, id: i64, reason: &str) -> Result<(), UserServiceError> {
        let url = format!("{}/api/users/{}/deactivate", self.base_url, id);
        info!(%url, "calling user service");
        let resp = self
            .http
            .post(&url)
            // reqwest encodes the pair, unlike naive string concatenation
            .query(&[("reason", reason)])
            .send()
            .await
            .map_err(|e| fail(&url, e))?;
        info!(status = %resp.status(), "user service response");
        resp.error_for_status().map_err(|e| fail(&url, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::Router;
    use serde::Deserialize;

    async fn spawn_upstream(router: Router) -> anyhow::Result<String> {
        let listener =
            tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("upstream error: {}", e);
            }
        });
        Ok(format!("http://{}:{}", addr.ip(), addr.port()))
    }

    fn client(base_url: &str) -> HttpUserClient {
        HttpUserClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_all_users_relays_body_verbatim() -> anyhow::Result<()> {
        let router =
            Router::new().route("/api/users", get(|| async { "[{\"id\":1}]".to_string() }));
        let base = spawn_upstream(router).await?;

        let body = client(&base).fetch_all_users().await.unwrap();
        assert_eq!(body, "[{\"id\":1}]");
        Ok(())
    }

    #[tokio::test]
    async fn fetch_user_by_id_forwards_id_in_path() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/api/users/:id",
            get(|Path(id): Path<i64>| async move { format!("user {}", id) }),
        );
        let base = spawn_upstream(router).await?;

        let c = client(&base);
        assert_eq!(c.fetch_user_by_id(7).await.unwrap(), "user 7");
        // negative ids are forwarded unvalidated
        assert_eq!(c.fetch_user_by_id(-3).await.unwrap(), "user -3");
        Ok(())
    }

    #[tokio::test]
    async fn non_2xx_status_collapses_to_failure() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/api/users",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_upstream(router).await?;

        let err = client(&base).fetch_all_users().await.unwrap_err();
        assert!(!err.0.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn connection_failure_collapses_to_failure() {
        // nothing listens here; bind-then-drop reserves a dead port
        let listener =
            tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let c = client(&format!("http://{}:{}", addr.ip(), addr.port()));
        let err = c.fetch_all_users().await.unwrap_err();
        assert!(!err.0.is_empty());
    }

    #[derive(Deserialize)]
    struct DeactivateQuery {
        reason: String,
    }

    #[tokio::test]
    async fn deactivate_reason_round_trips_through_encoding() -> anyhow::Result<()> {
        let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let router = Router::new()
            .route(
                "/api/users/:id/deactivate",
                post(
                    |State(seen): State<Arc<Mutex<Option<String>>>>,
                     Path(_id): Path<i64>,
                     Query(q): Query<DeactivateQuery>| async move {
                        *seen.lock().unwrap() = Some(q.reason);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(seen.clone());
        let base = spawn_upstream(router).await?;

        client(&base).deactivate_user(5, "a b&c").await.unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("a b&c"));

        // empty reason is forwarded, not rejected
        client(&base).deactivate_user(5, "").await.unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some(""));
        Ok(())
    }
}
