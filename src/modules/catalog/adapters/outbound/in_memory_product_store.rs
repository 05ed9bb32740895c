// In memory implementation of the ProductStore port.
//
// Purpose
// - Support controller tests and offline development without a backend.
//
// Responsibilities
// - Keep products in server order (insertion order), assign ids, derive missing letters.
// - Count calls per operation so tests can assert how many requests were issued.
// - Simulate failures: an offline toggle for everything, or a scripted error per operation.

use crate::modules::catalog::core::product::{Product, ProductInput};
use crate::modules::catalog::ports::{ProductStore, StoreError};
use crate::modules::products_api::core::missing_letter::missing_letter;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct CallCounts {
    list: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

impl CallCounts {
    fn counter(&self, operation: StoreOperation) -> &AtomicUsize {
        match operation {
            StoreOperation::List => &self.list,
            StoreOperation::Create => &self.create,
            StoreOperation::Update => &self.update,
            StoreOperation::Delete => &self.delete,
        }
    }
}

#[derive(Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
    failures: Mutex<HashMap<StoreOperation, StoreError>>,
    calls: CallCounts,
    is_offline: bool,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Every later call of `operation` fails with `error`.
    pub async fn fail_on(&self, operation: StoreOperation, error: StoreError) {
        self.failures.lock().await.insert(operation, error);
    }

    pub fn calls(&self, operation: StoreOperation) -> usize {
        self.calls.counter(operation).load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn enter(&self, operation: StoreOperation) -> Result<(), StoreError> {
        self.calls.counter(operation).fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(StoreError::Network("product store offline".into()));
        }
        match self.failures.lock().await.get(&operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.enter(StoreOperation::List).await?;
        Ok(self.products.read().await.clone())
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, StoreError> {
        self.enter(StoreOperation::Create).await?;
        let product = Product {
            id: Uuid::now_v7().to_string(),
            name: input.name.clone(),
            price: input.price,
            sku: input.sku.clone(),
            missing_letter: Some(missing_letter(&input.name)),
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &str,
        input: &ProductInput,
    ) -> Result<Product, StoreError> {
        self.enter(StoreOperation::Update).await?;
        let mut guard = self.products.write().await;
        let product = guard
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::Rejected {
                status: 404,
                message: Some("Product not found".into()),
            })?;
        product.name = input.name.clone();
        product.price = input.price;
        product.sku = input.sku.clone();
        product.missing_letter = Some(missing_letter(&input.name));
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        self.enter(StoreOperation::Delete).await?;
        let mut guard = self.products.write().await;
        let before = guard.len();
        guard.retain(|p| p.id != id);
        if guard.len() == before {
            return Err(StoreError::Status { status: 404 });
        }
        Ok(())
    }
}
