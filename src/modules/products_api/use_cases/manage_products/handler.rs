// Application service for the development products API.
//
// Responsibilities
// - Apply the product rules against the current collection and persist the result.
// - Assign v7 ids on create.
// - Serialize writes so the sku uniqueness check and the save see the same collection.

use crate::modules::products_api::adapters::outbound::repository::ProductRepository;
use crate::modules::products_api::core::product::{ProductPayload, ProductRecord};
use crate::modules::products_api::core::rules::{RuleViolation, Target, decide_product};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error("Product not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

pub struct ProductsHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
    writes: Mutex<()>,
}

impl<TRepository> ProductsHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self {
            repository,
            writes: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<ProductRecord>, ApplicationError> {
        Ok(self.repository.all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductRecord, ApplicationError> {
        self.repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound)
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<ProductRecord, ApplicationError> {
        let _guard = self.writes.lock().await;
        let existing = self.repository.all().await?;
        let valid = decide_product(payload, &existing, &Target::Create)?;

        let record = ProductRecord {
            id: Uuid::now_v7(),
            name: valid.name,
            price: valid.price,
            sku: valid.sku,
        };
        self.repository.save(record.clone()).await?;
        info!(id = %record.id, sku = %record.sku, "product created");
        Ok(record)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &ProductPayload,
    ) -> Result<ProductRecord, ApplicationError> {
        let _guard = self.writes.lock().await;
        let existing = self.repository.all().await?;
        if !existing.iter().any(|record| record.id == id) {
            return Err(ApplicationError::NotFound);
        }
        let valid = decide_product(payload, &existing, &Target::Update(id))?;

        let record = ProductRecord {
            id,
            name: valid.name,
            price: valid.price,
            sku: valid.sku,
        };
        self.repository.save(record.clone()).await?;
        info!(id = %record.id, sku = %record.sku, "product updated");
        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        let _guard = self.writes.lock().await;
        if !self.repository.remove(id).await? {
            return Err(ApplicationError::NotFound);
        }
        info!(%id, "product deleted");
        Ok(())
    }
}
