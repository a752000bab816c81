//! HTTP transport for the Admin API GraphQL endpoint.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::config::ShopifyAdminConfig;

use super::types::AdminSession;
use super::{AdminApiError, GraphQLError, GraphQLErrorLocation};

/// Shopify Admin API GraphQL client.
///
/// Cheaply cloneable; the session token is shared behind an async `RwLock`
/// so all handler tasks see the same handle.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: String,
    session: RwLock<Option<AdminSession>>,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl AdminClient {
    /// Create a new Admin API client from configuration.
    ///
    /// The endpoint is derived from the store domain and API version unless
    /// the configuration carries an explicit override.
    #[must_use]
    pub fn new(config: &ShopifyAdminConfig) -> Self {
        let endpoint = config.endpoint_override.clone().unwrap_or_else(|| {
            format!(
                "https://{}/admin/api/{}/graphql.json",
                config.store, config.api_version
            )
        });

        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                endpoint,
                session: RwLock::new(None),
            }),
        }
    }

    /// Install an authenticated session handle.
    pub async fn set_session(&self, session: AdminSession) {
        *self.inner.session.write().await = Some(session);
    }

    /// Get the current access token string.
    async fn access_token(&self) -> Result<String, AdminApiError> {
        let session = self.inner.session.read().await;
        session
            .as_ref()
            .map(|s| s.access_token.expose_secret().to_string())
            .ok_or(AdminApiError::NoSession)
    }

    /// Execute a GraphQL document with variables.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without touching the network when no session is
    /// installed, `RateLimited`/`Unauthorized` on the matching HTTP statuses,
    /// `GraphQL` when the response carries an error list, and `Http`/`Parse`
    /// on transport or decoding failures.
    #[instrument(skip(self, query, variables))]
    pub(super) async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AdminApiError> {
        let access_token = self.access_token().await?;

        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("X-Shopify-Access-Token", &access_token)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(AdminApiError::RateLimited(retry_after));
        }

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdminApiError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        // Decode in two steps so a malformed body is a Parse error, not Http
        let body_text = response.text().await?;
        let graphql_response: GraphQLResponse<T> = serde_json::from_str(&body_text)?;

        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e
                        .locations
                        .into_iter()
                        .map(|l| GraphQLErrorLocation {
                            line: l.line,
                            column: l.column,
                        })
                        .collect(),
                    path: e.path,
                })
                .collect();
            return Err(AdminApiError::GraphQL(converted_errors));
        }

        graphql_response.data.ok_or_else(|| {
            AdminApiError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }
}
