// Catalog page state owned by one controller instance.
//
// Notes
// - `products` is a snapshot of the server collection after the last successful load.
//   It is replaced wholesale, never patched.
// - `editing` holds the product being edited; None means the form creates.

use crate::modules::catalog::core::draft::ProductDraft;
use crate::modules::catalog::core::product::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    ListLoading,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub draft: ProductDraft,
    pub editing: Option<Product>,
    pub phase: Phase,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn product_at(&self, position: usize) -> Option<&Product> {
        position
            .checked_sub(1)
            .and_then(|index| self.products.get(index))
    }

    /// Empties the form and forgets the edit target.
    pub fn reset_form(&mut self) {
        self.draft = ProductDraft::default();
        self.editing = None;
    }
}
