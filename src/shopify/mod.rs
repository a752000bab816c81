//! Shopify Admin API GraphQL client (HIGH PRIVILEGE).
//!
//! Every operation requires an installed [`types::AdminSession`]; the OAuth
//! handshake that produces one happens outside this app. Calls are single
//! round trips with no batching, no retry, and no caching.

mod client;
mod collections;
pub mod queries;
pub mod types;

pub use client::AdminClient;

use thiserror::Error;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminApiError {
    /// No admin session has been installed on the client.
    #[error("No admin session: complete authentication and install a token")]
    NoSession,

    /// The API rejected the session token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Delete target does not exist (or was already deleted).
    #[error("Collection not found with ID: {0}")]
    NotFound(String),

    /// Rate limited by Shopify. Surfaced, never retried here.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// User error from a mutation (e.g., duplicate title).
    #[error("User error: {0}")]
    UserError(String),
}

/// A GraphQL error returned by the Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Vec<GraphQLErrorLocation>,
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL document where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    pub line: i64,
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
