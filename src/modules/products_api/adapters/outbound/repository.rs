use crate::modules::products_api::core::product::ProductRecord;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product in insertion order.
    async fn all(&self) -> anyhow::Result<Vec<ProductRecord>>;
    async fn find(&self, id: Uuid) -> anyhow::Result<Option<ProductRecord>>;
    /// Inserts or replaces the record with the same id.
    async fn save(&self, record: ProductRecord) -> anyhow::Result<()>;
    /// False when nothing had that id.
    async fn remove(&self, id: Uuid) -> anyhow::Result<bool>;
}
