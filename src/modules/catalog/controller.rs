// Catalog view controller: owns the page state and orchestrates the store.
//
// Responsibilities
// - Hold one CatalogState per page.
// - Run transitions (see use_cases/*/handler.rs) against the ProductStore port.
// - Re-synchronize the full collection after every successful mutation.
//
// Every store failure is recovered here and surfaces as one message in `state.error`.

use crate::modules::catalog::core::messages;
use crate::modules::catalog::core::state::CatalogState;
use crate::modules::catalog::core::view::{CatalogView, render_view};
use crate::modules::catalog::ports::{Prompter, ProductStore, StoreError};
use std::sync::Arc;

pub struct CatalogController<TStore, TPrompter>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    pub(crate) store: Arc<TStore>,
    pub(crate) prompter: Arc<TPrompter>,
    pub(crate) state: CatalogState,
}

impl<TStore, TPrompter> CatalogController<TStore, TPrompter>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    pub fn new(store: Arc<TStore>, prompter: Arc<TPrompter>) -> Self {
        Self {
            store,
            prompter,
            state: CatalogState::default(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn view(&self) -> CatalogView {
        render_view(&self.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Load,
    Save,
    Delete,
}

/// The single message shown to the user for a failed store call.
pub(crate) fn describe_failure(action: Action, error: &StoreError) -> String {
    let generic = match action {
        Action::Load => messages::LOAD_FAILED,
        Action::Save => messages::SAVE_FAILED,
        Action::Delete => messages::DELETE_FAILED,
    };
    match error {
        StoreError::Rejected {
            message: Some(message),
            ..
        } if action == Action::Save => message.clone(),
        StoreError::Rejected { .. } | StoreError::Status { .. } => generic.to_string(),
        StoreError::Network(detail) | StoreError::Decode(detail) => format!("{generic}: {detail}"),
    }
}
