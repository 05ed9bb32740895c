// Load: replace the snapshot with the server collection, sorted by name.
//
// - phase -> ListLoading, error cleared.
// - success: products <- sorted result, phase -> Idle.
// - failure: error <- message, phase -> Idle, products untouched.

use crate::modules::catalog::controller::{Action, CatalogController, describe_failure};
use crate::modules::catalog::core::collation::sort_by_name;
use crate::modules::catalog::core::state::Phase;
use crate::modules::catalog::ports::{Prompter, ProductStore};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed,
}

impl<TStore, TPrompter> CatalogController<TStore, TPrompter>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    /// Initial load when the page opens.
    pub async fn mount(&mut self) -> LoadOutcome {
        self.state.reset_form();
        self.load().await
    }

    pub async fn load(&mut self) -> LoadOutcome {
        self.state.phase = Phase::ListLoading;
        self.state.error = None;

        let outcome = match self.store.list_products().await {
            Ok(mut products) => {
                sort_by_name(&mut products);
                let count = products.len();
                self.state.products = products;
                info!(count, "products loaded");
                LoadOutcome::Loaded { count }
            }
            Err(error) => {
                warn!(%error, "loading products failed");
                self.state.error = Some(describe_failure(Action::Load, &error));
                LoadOutcome::Failed
            }
        };

        self.state.phase = Phase::Idle;
        outcome
    }
}
