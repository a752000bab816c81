//! GraphQL documents and variable builders for the Admin API.
//!
//! Documents are plain strings posted with their variables as JSON. Field
//! shapes are fixed by the Admin API schema and must be matched exactly.

use serde_json::{Value, json};

use super::types::CollectionDraft;

/// Fixed page size for collection listings. No pagination past this.
pub const COLLECTIONS_PAGE_SIZE: i64 = 40;

pub const GET_COLLECTIONS: &str = r"
    query getCollections($first: Int!) {
        collections(first: $first) {
            nodes {
                id
                title
                handle
                image {
                    url
                }
                productsCount {
                    count
                }
            }
        }
    }
";

pub const COLLECTION_CREATE: &str = r"
    mutation collectionCreate($input: CollectionInput!) {
        collectionCreate(input: $input) {
            collection {
                id
                title
                handle
            }
            userErrors {
                field
                message
            }
        }
    }
";

pub const COLLECTION_DELETE: &str = r"
    mutation collectionDelete($input: CollectionDeleteInput!) {
        collectionDelete(input: $input) {
            deletedCollectionId
            userErrors {
                field
                message
            }
        }
    }
";

pub fn get_collections_variables(first: i64) -> Value {
    json!({ "first": first })
}

/// Build `collectionCreate` variables from a draft.
///
/// The product list is forwarded as-is; duplicates are the caller's to keep.
pub fn collection_create_variables(draft: &CollectionDraft) -> Value {
    json!({
        "input": {
            "title": draft.title,
            "descriptionHtml": draft.description,
            "products": draft.products,
        }
    })
}

pub fn collection_delete_variables(id: &str) -> Value {
    json!({ "input": { "id": id } })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_collections_variables() {
        let vars = get_collections_variables(COLLECTIONS_PAGE_SIZE);
        assert_eq!(vars["first"], 40);
    }

    #[test]
    fn test_create_variables_shape() {
        let draft = CollectionDraft {
            title: "Summer".to_string(),
            description: "<p>Sun</p>".to_string(),
            products: vec!["gid://shopify/Product/1".to_string()],
        };
        let vars = collection_create_variables(&draft);
        assert_eq!(vars["input"]["title"], "Summer");
        assert_eq!(vars["input"]["descriptionHtml"], "<p>Sun</p>");
        assert_eq!(vars["input"]["products"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_create_variables_keep_duplicate_products() {
        let id = "gid://shopify/Product/42".to_string();
        let draft = CollectionDraft {
            title: "Dupes".to_string(),
            description: String::new(),
            products: vec![id.clone(), id.clone(), id],
        };
        let vars = collection_create_variables(&draft);
        let products = vars["input"]["products"].as_array().unwrap();
        assert_eq!(products.len(), 3);
    }

    #[test]
    fn test_delete_variables_shape() {
        let vars = collection_delete_variables("gid://shopify/Collection/7");
        assert_eq!(vars["input"]["id"], "gid://shopify/Collection/7");
    }
}
