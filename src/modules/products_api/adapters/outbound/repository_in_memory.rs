// In memory product repository.
//
// Purpose
// - Back the development API without a database.
//
// Responsibilities
// - Keep records in insertion order; replacing a record keeps its position.

use crate::modules::products_api::adapters::outbound::repository::ProductRepository;
use crate::modules::products_api::core::product::ProductRecord;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryProductRepository {
    records: RwLock<Vec<ProductRecord>>,
    is_offline: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Product repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn all(&self) -> anyhow::Result<Vec<ProductRecord>> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<ProductRecord>> {
        self.ensure_online()?;
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn save(&self, record: ProductRecord) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        match guard.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record,
            None => guard.push(record),
        }
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let before = guard.len();
        guard.retain(|r| r.id != id);
        Ok(guard.len() != before)
    }
}
