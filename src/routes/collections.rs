//! Collections page and write-action handlers.

use std::str::FromStr;

use askama::Template;
use axum::{Form, Json, extract::State, response::Html};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::shopify::types::{Collection, CollectionDraft};
use crate::state::AppState;

/// Write actions accepted by the POST endpoint.
///
/// Parsed from the `actionType` form field; adding a variant here forces the
/// dispatch match below to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    CreateCollection,
    DeleteCollection,
}

impl FromStr for ActionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createCollection" => Ok(Self::CreateCollection),
            "deleteCollection" => Ok(Self::DeleteCollection),
            other => Err(AppError::UnknownAction(other.to_string())),
        }
    }
}

/// Form input for the write endpoint.
///
/// `actionType` selects the operation; the remaining fields are read by
/// whichever operation needs them.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    #[serde(rename = "actionType")]
    pub action_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// JSON-encoded array of product GIDs.
    pub products: Option<String>,
    pub id: Option<String>,
}

/// Result envelope consumed once by the page script.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActionResult {
    Success { redirect: String, message: String },
    Failure { error: String },
}

/// Collection view for templates.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub id: String,
    /// Numeric tail of the GID, used for admin deep links.
    pub numeric_id: String,
    pub title: String,
    pub handle: String,
    pub products_count: i64,
    pub image_url: Option<String>,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        let numeric_id = collection
            .id
            .split('/')
            .next_back()
            .unwrap_or(&collection.id)
            .to_string();

        Self {
            id: collection.id.clone(),
            numeric_id,
            title: collection.title.clone(),
            handle: collection.handle.clone(),
            products_count: collection.products_count,
            image_url: collection.image.as_ref().map(|img| img.url.clone()),
        }
    }
}

/// Collections index page template.
#[derive(Template)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub store_handle: String,
    pub collections: Vec<CollectionView>,
    pub error: Option<String>,
}

/// Collections index page handler.
///
/// Every render re-fetches from the API; there is no local cache. A fetch
/// failure renders the page with an inline error instead of failing the
/// request.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let (collections, error) = match state.shopify().get_collections().await {
        Ok(collections) => (
            collections.iter().map(CollectionView::from).collect(),
            None,
        ),
        Err(e) => {
            let err = AppError::from(e);
            err.report();
            (vec![], Some(err.to_string()))
        }
    };

    let template = CollectionsIndexTemplate {
        store_handle: state.config().shopify.store_handle().to_string(),
        collections,
        error,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Write-action handler.
///
/// The request itself always completes with a JSON envelope: `{redirect,
/// message}` on success, `{error}` on any failure. Nothing is retried and
/// nothing propagates past this boundary.
#[instrument(skip(state, form), fields(action_type = %form.action_type))]
pub async fn action(
    State(state): State<AppState>,
    Form(form): Form<ActionForm>,
) -> Json<ActionResult> {
    let result = dispatch(&state, form).await;

    Json(match result {
        Ok((redirect, message)) => {
            tracing::info!(message = %message, "action completed");
            ActionResult::Success { redirect, message }
        }
        Err(e) => {
            e.report();
            ActionResult::Failure {
                error: e.to_string(),
            }
        }
    })
}

/// Dispatch a parsed action to the matching repository operation.
async fn dispatch(state: &AppState, form: ActionForm) -> Result<(String, String), AppError> {
    match ActionType::from_str(&form.action_type)? {
        ActionType::CreateCollection => {
            let products: Vec<String> = match form.products.as_deref() {
                Some(raw) => serde_json::from_str(raw)
                    .map_err(|e| AppError::BadRequest(format!("invalid products payload: {e}")))?,
                None => Vec::new(),
            };

            let draft = CollectionDraft {
                title: form.title.unwrap_or_default(),
                description: form.description.unwrap_or_default(),
                products,
            };

            let created = state.shopify().create_collection(&draft).await?;
            Ok((
                "/".to_string(),
                format!("Collection \"{}\" created successfully.", created.title),
            ))
        }
        ActionType::DeleteCollection => {
            let id = form
                .id
                .ok_or_else(|| AppError::BadRequest("missing collection id".to_string()))?;

            state.shopify().delete_collection(&id).await?;
            Ok((
                "/".to_string(),
                "Collection deleted successfully.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_parses_known_values() {
        assert_eq!(
            ActionType::from_str("createCollection").unwrap(),
            ActionType::CreateCollection
        );
        assert_eq!(
            ActionType::from_str("deleteCollection").unwrap(),
            ActionType::DeleteCollection
        );
    }

    #[test]
    fn test_action_type_rejects_unknown_verbatim() {
        let err = ActionType::from_str("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Unknown actionType: bogus");
    }

    #[test]
    fn test_action_result_serialization() {
        let ok = ActionResult::Success {
            redirect: "/".to_string(),
            message: "done".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"redirect": "/", "message": "done"})
        );

        let failed = ActionResult::Failure {
            error: "Unknown actionType: bogus".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"error": "Unknown actionType: bogus"})
        );
    }

    #[test]
    fn test_collection_view_extracts_numeric_id() {
        let collection = Collection {
            id: "gid://shopify/Collection/4242".to_string(),
            title: "Summer".to_string(),
            handle: "summer".to_string(),
            image: None,
            products_count: 3,
        };
        let view = CollectionView::from(&collection);
        assert_eq!(view.numeric_id, "4242");
        assert!(view.image_url.is_none());
    }
}
