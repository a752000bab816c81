//! Collection operations: list, create, delete.
//!
//! Each operation is a single round trip. A repeated create produces a
//! duplicate collection; a repeated delete on the same id fails with
//! `NotFound`, never success.

use serde::Deserialize;
use tracing::instrument;

use super::queries::{
    self, COLLECTION_CREATE, COLLECTION_DELETE, COLLECTIONS_PAGE_SIZE, GET_COLLECTIONS,
};
use super::types::{Collection, CollectionDraft, CreatedCollection, Image};
use super::{AdminApiError, AdminClient, GraphQLError};

// Wire-side response shapes. Field names follow the Admin API schema.

#[derive(Debug, Deserialize)]
struct CollectionsData {
    collections: CollectionNodes,
}

#[derive(Debug, Deserialize)]
struct CollectionNodes {
    nodes: Vec<CollectionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    id: String,
    title: String,
    handle: String,
    image: Option<ImageNode>,
    products_count: Option<ProductsCountNode>,
}

#[derive(Debug, Deserialize)]
struct ImageNode {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ProductsCountNode {
    count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionCreateData {
    collection_create: Option<CollectionCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionCreatePayload {
    collection: Option<CreatedCollectionNode>,
    #[serde(default)]
    user_errors: Vec<UserErrorNode>,
}

#[derive(Debug, Deserialize)]
struct CreatedCollectionNode {
    id: String,
    title: String,
    handle: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionDeleteData {
    collection_delete: Option<CollectionDeletePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionDeletePayload {
    deleted_collection_id: Option<String>,
    #[serde(default)]
    user_errors: Vec<UserErrorNode>,
}

#[derive(Debug, Deserialize)]
struct UserErrorNode {
    field: Option<Vec<String>>,
    message: String,
}

/// Fold a mutation's `userErrors` list into a single typed failure.
fn fold_user_errors(user_errors: &[UserErrorNode]) -> Option<AdminApiError> {
    if user_errors.is_empty() {
        return None;
    }
    let error_messages: Vec<String> = user_errors
        .iter()
        .map(|e| {
            let field = e.field.as_ref().map_or_else(String::new, |f| f.join("."));
            format!("{}: {}", field, e.message)
        })
        .collect();
    Some(AdminApiError::UserError(error_messages.join("; ")))
}

impl AdminClient {
    /// Fetch up to [`COLLECTIONS_PAGE_SIZE`] collections in the API's
    /// default order.
    ///
    /// A shop with zero collections yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is installed or the API request fails.
    #[instrument(skip(self))]
    pub async fn get_collections(&self) -> Result<Vec<Collection>, AdminApiError> {
        let variables = queries::get_collections_variables(COLLECTIONS_PAGE_SIZE);
        let response: CollectionsData = self.execute(GET_COLLECTIONS, variables).await?;

        Ok(response
            .collections
            .nodes
            .into_iter()
            .map(|c| Collection {
                id: c.id,
                title: c.title,
                handle: c.handle,
                image: c.image.map(|img| Image { url: img.url }),
                products_count: c.products_count.map_or(0, |pc| pc.count),
            })
            .collect())
    }

    /// Create a collection with the draft's title, HTML description, and
    /// product list.
    ///
    /// The product list is forwarded unmodified (duplicates included).
    ///
    /// # Errors
    ///
    /// Returns an error if no session is installed, the API request fails,
    /// or the mutation reports user errors (e.g., a duplicate title).
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_collection(
        &self,
        draft: &CollectionDraft,
    ) -> Result<CreatedCollection, AdminApiError> {
        let variables = queries::collection_create_variables(draft);
        let response: CollectionCreateData = self.execute(COLLECTION_CREATE, variables).await?;

        if let Some(payload) = response.collection_create {
            if let Some(err) = fold_user_errors(&payload.user_errors) {
                return Err(err);
            }

            if let Some(collection) = payload.collection {
                return Ok(CreatedCollection {
                    id: collection.id,
                    title: collection.title,
                    handle: collection.handle,
                });
            }
        }

        Err(AdminApiError::GraphQL(vec![GraphQLError {
            message: "No collection returned from create".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }

    /// Delete a collection by id, returning the deleted id as confirmation.
    ///
    /// A null deletion result means the target does not exist (or was
    /// already deleted) and fails with `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is installed, the API request fails,
    /// the mutation reports user errors, or the target is absent.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn delete_collection(&self, id: &str) -> Result<String, AdminApiError> {
        let variables = queries::collection_delete_variables(id);
        let response: CollectionDeleteData = self.execute(COLLECTION_DELETE, variables).await?;

        if let Some(payload) = response.collection_delete {
            if let Some(err) = fold_user_errors(&payload.user_errors) {
                return Err(err);
            }

            if let Some(deleted_id) = payload.deleted_collection_id {
                return Ok(deleted_id);
            }
        }

        Err(AdminApiError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_payload_deserializes() {
        let json = serde_json::json!({
            "collections": {
                "nodes": [
                    {
                        "id": "gid://shopify/Collection/1",
                        "title": "Summer",
                        "handle": "summer",
                        "image": { "url": "https://cdn.example/s.png" },
                        "productsCount": { "count": 12 }
                    },
                    {
                        "id": "gid://shopify/Collection/2",
                        "title": "Winter",
                        "handle": "winter",
                        "image": null,
                        "productsCount": null
                    }
                ]
            }
        });
        let data: CollectionsData = serde_json::from_value(json).unwrap();
        assert_eq!(data.collections.nodes.len(), 2);
        assert_eq!(data.collections.nodes[0].handle, "summer");
        assert!(data.collections.nodes[1].image.is_none());
    }

    #[test]
    fn test_fold_user_errors_joins_fields() {
        let errors = vec![
            UserErrorNode {
                field: Some(vec!["input".to_string(), "title".to_string()]),
                message: "has already been taken".to_string(),
            },
            UserErrorNode {
                field: None,
                message: "something else".to_string(),
            },
        ];
        let err = fold_user_errors(&errors).unwrap();
        assert_eq!(
            err.to_string(),
            "User error: input.title: has already been taken; : something else"
        );
    }

    #[test]
    fn test_fold_user_errors_empty_is_none() {
        assert!(fold_user_errors(&[]).is_none());
    }

    #[test]
    fn test_delete_payload_with_null_id() {
        let json = serde_json::json!({
            "collectionDelete": {
                "deletedCollectionId": null,
                "userErrors": []
            }
        });
        let data: CollectionDeleteData = serde_json::from_value(json).unwrap();
        let payload = data.collection_delete.unwrap();
        assert!(payload.deleted_collection_id.is_none());
        assert!(payload.user_errors.is_empty());
    }
}
