// Delete: confirm with the user, remove the product, then re-synchronize.
//
// - Declined confirmation dispatches nothing.
// - Failure leaves the snapshot as it was.

use crate::modules::catalog::controller::{Action, CatalogController, describe_failure};
use crate::modules::catalog::core::messages;
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::ports::{Prompter, ProductStore};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Failed,
    Deleted,
}

impl<TStore, TPrompter> CatalogController<TStore, TPrompter>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    pub async fn delete(&mut self, product: &Product) -> DeleteOutcome {
        if !self.prompter.confirm(messages::CONFIRM_DELETE).await {
            return DeleteOutcome::Declined;
        }

        self.state.error = None;
        match self.store.delete_product(&product.id).await {
            Ok(()) => {
                info!(id = %product.id, "product deleted");
                self.load().await;
                self.prompter.notify(messages::PRODUCT_DELETED).await;
                DeleteOutcome::Deleted
            }
            Err(error) => {
                warn!(id = %product.id, %error, "deleting product failed");
                self.state.error = Some(describe_failure(Action::Delete, &error));
                DeleteOutcome::Failed
            }
        }
    }

    /// Deletes the product shown at `position` (1-based). None if there is none.
    pub async fn delete_at(&mut self, position: usize) -> Option<DeleteOutcome> {
        let product = self.state.product_at(position).cloned()?;
        Some(self.delete(&product).await)
    }
}
