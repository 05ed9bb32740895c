// Submit: validate the draft, then create or update, then re-synchronize.
//
// Responsibilities
// - Reject locally (no request) when the draft fails validation.
// - Dispatch create when nothing is being edited, update of the edit target otherwise.
// - On success: reload, reset the form, notify the user.
// - On failure: keep the draft so the user can correct it and resubmit.

use crate::modules::catalog::controller::{Action, CatalogController, describe_failure};
use crate::modules::catalog::core::messages;
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::core::state::Phase;
use crate::modules::catalog::ports::{Prompter, ProductStore};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Invalid,
    Failed,
    Created(Product),
    Updated(Product),
}

impl<TStore, TPrompter> CatalogController<TStore, TPrompter>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    pub async fn submit(&mut self) -> SubmitOutcome {
        let input = match self.state.draft.validate() {
            Ok(input) => input,
            Err(reason) => {
                self.state.error = Some(reason.to_string());
                return SubmitOutcome::Invalid;
            }
        };

        self.state.phase = Phase::Submitting;
        self.state.error = None;

        let target = self.state.editing.as_ref().map(|p| p.id.clone());
        let result = match &target {
            None => self
                .store
                .create_product(&input)
                .await
                .map(SubmitOutcome::Created),
            Some(id) => self
                .store
                .update_product(id, &input)
                .await
                .map(SubmitOutcome::Updated),
        };

        match result {
            Ok(outcome) => {
                info!(editing = ?target, sku = %input.sku, "product saved");
                self.load().await;
                self.state.reset_form();
                let notice = match outcome {
                    SubmitOutcome::Updated(_) => messages::PRODUCT_UPDATED,
                    _ => messages::PRODUCT_CREATED,
                };
                self.prompter.notify(notice).await;
                outcome
            }
            Err(error) => {
                warn!(editing = ?target, %error, "saving product failed");
                self.state.error = Some(describe_failure(Action::Save, &error));
                self.state.phase = Phase::Idle;
                SubmitOutcome::Failed
            }
        }
    }
}
