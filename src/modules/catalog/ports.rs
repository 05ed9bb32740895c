// Ports define what the catalog controller needs from the outside world.
//
// Purpose
// - ProductStore: the remote product collection (list, create, update, delete).
// - Prompter: the user's confirmation and notice dialogs.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Testing guidance
// - Use the in memory product store and a scripted prompter.

use crate::modules::catalog::core::product::{Product, ProductInput};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Single-shot calls against one collection endpoint. No retries.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;
    async fn create_product(&self, input: &ProductInput) -> Result<Product, StoreError>;
    async fn update_product(&self, id: &str, input: &ProductInput)
    -> Result<Product, StoreError>;
    async fn delete_product(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
pub trait Prompter: Send + Sync {
    async fn confirm(&self, question: &str) -> bool;
    async fn notify(&self, message: &str);
}
