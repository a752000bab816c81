//! Domain types for the Shopify Admin API.

/// A product collection as listed in the admin panel.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Global ID (e.g., `gid://shopify/Collection/123`).
    pub id: String,
    /// Collection title.
    pub title: String,
    /// URL-safe slug, unique per shop.
    pub handle: String,
    /// Collection image, if one is set.
    pub image: Option<Image>,
    /// Number of products in the collection (approximate per the API's
    /// precision flag).
    pub products_count: i64,
}

/// A collection image.
#[derive(Debug, Clone)]
pub struct Image {
    /// Image URL.
    pub url: String,
}

/// Transient input for creating a collection.
///
/// Lives only for one create interaction. `products` is passed through to the
/// API unmodified: duplicate IDs are possible and are not deduplicated.
#[derive(Debug, Clone)]
pub struct CollectionDraft {
    pub title: String,
    /// HTML-capable description, sent as `descriptionHtml`.
    pub description: String,
    /// Product GIDs to attach.
    pub products: Vec<String>,
}

/// The collection returned by a successful `collectionCreate` mutation.
#[derive(Debug, Clone)]
pub struct CreatedCollection {
    pub id: String,
    pub title: String,
    pub handle: String,
}

/// An authenticated admin session handle.
///
/// This app never performs the OAuth handshake itself; it only consumes a
/// token obtained elsewhere.
#[derive(Clone)]
pub struct AdminSession {
    /// Shop domain the token belongs to (e.g., `your-store.myshopify.com`).
    pub shop: String,
    /// Admin API access token.
    pub access_token: secrecy::SecretString,
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession")
            .field("shop", &self.shop)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
