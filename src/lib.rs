//! Collections admin library.
//!
//! Admin panel for managing a Shopify shop's product collections: list,
//! create, and delete, driven entirely by the Admin GraphQL API. There is no
//! local storage; every page render re-fetches from Shopify.
//!
//! # Security
//!
//! The Admin API token configured here has HIGH PRIVILEGE access to the
//! store. Deploy behind network-level access control only.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
