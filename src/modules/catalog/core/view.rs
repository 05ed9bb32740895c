// What the catalog page shows, derived from controller state.
//
// Boundaries
// - Pure projection. Front ends render a CatalogView however they like.

use crate::modules::catalog::core::draft::ProductDraft;
use crate::modules::catalog::core::messages;
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::core::state::{CatalogState, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub form_title: &'static str,
    pub submit_label: &'static str,
    pub inputs_disabled: bool,
    pub show_cancel: bool,
    pub draft: ProductDraft,
    pub count_label: String,
    pub body: ListBody,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Empty {
        message: &'static str,
        hint: &'static str,
    },
    Rows(Vec<ProductRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub position: usize,
    pub name: String,
    pub price: String,
    pub sku: String,
    pub missing_letter: String,
}

impl From<(usize, &Product)> for ProductRow {
    fn from((position, product): (usize, &Product)) -> Self {
        Self {
            position,
            name: product.name.clone(),
            price: format_price(product.price),
            sku: product.sku.clone(),
            missing_letter: product
                .missing_letter
                .map(String::from)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("R$ {price:.2}")
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} itens")
    }
}

pub fn render_view(state: &CatalogState) -> CatalogView {
    let submitting = state.phase == Phase::Submitting;
    let editing = state.is_editing();

    let body = if state.phase == Phase::ListLoading {
        ListBody::Loading
    } else if state.products.is_empty() {
        ListBody::Empty {
            message: messages::EMPTY_LIST,
            hint: messages::EMPTY_LIST_HINT,
        }
    } else {
        ListBody::Rows(
            state
                .products
                .iter()
                .enumerate()
                .map(|(index, product)| ProductRow::from((index + 1, product)))
                .collect(),
        )
    };

    CatalogView {
        form_title: if editing {
            messages::FORM_TITLE_EDIT
        } else {
            messages::FORM_TITLE_CREATE
        },
        submit_label: match (submitting, editing) {
            (true, _) => messages::SUBMIT_BUSY,
            (false, true) => messages::SUBMIT_UPDATE,
            (false, false) => messages::SUBMIT_CREATE,
        },
        inputs_disabled: submitting,
        show_cancel: editing,
        draft: state.draft.clone(),
        count_label: count_label(state.products.len()),
        body,
        error: state.error.clone(),
    }
}
