// Draft transitions: field edits, beginning an edit, cancelling it.
//
// None of these touch the store.

use crate::modules::catalog::controller::CatalogController;
use crate::modules::catalog::core::draft::{DraftField, ProductDraft};
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::ports::{Prompter, ProductStore};
use tracing::debug;

impl<TStore, TPrompter> CatalogController<TStore, TPrompter>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.draft.set(field, value);
        self.state.error = None;
    }

    pub fn begin_edit(&mut self, product: &Product) {
        debug!(id = %product.id, "editing product");
        self.state.draft = ProductDraft::from_product(product);
        self.state.editing = Some(product.clone());
        self.state.error = None;
    }

    /// Begins editing the product shown at `position` (1-based). False if there is none.
    pub fn begin_edit_at(&mut self, position: usize) -> bool {
        match self.state.product_at(position).cloned() {
            Some(product) => {
                self.begin_edit(&product);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.reset_form();
        self.state.error = None;
    }
}
