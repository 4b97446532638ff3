//! The deletion trigger: click, confirm, call, update.

use padaria_core::product::Product;

use crate::api::ProductsApi;
use crate::control::DeleteControl;
use crate::error::ClientError;
use crate::intent::PendingDeletion;
use crate::list::ProductList;
use crate::ui::{ConfirmDialog, Notifier};

/// How a click on a delete control ended.
#[derive(Debug)]
pub enum ClickOutcome {
    /// The control's attributes failed validation; the endpoint was not called.
    Rejected(ClientError),
    /// The user declined the confirmation.
    Cancelled,
    /// The endpoint deleted this product.
    Deleted(Product),
    /// The endpoint call failed; the product is still listed.
    Failed(ClientError),
}

/// Wires delete controls to the endpoint.
pub struct DeletionTrigger<A, D, N> {
    api: A,
    dialog: D,
    notifier: N,
}

impl<A, D, N> DeletionTrigger<A, D, N>
where
    A: ProductsApi,
    D: ConfirmDialog,
    N: Notifier,
{
    pub fn new(api: A, dialog: D, notifier: N) -> Self {
        Self {
            api,
            dialog,
            notifier,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Validate a clicked control into a pending deletion.
    ///
    /// Validation failures are reported through the notifier and returned;
    /// nothing is sent to the endpoint.
    pub fn on_click(&self, control: &DeleteControl) -> Result<PendingDeletion, ClientError> {
        PendingDeletion::capture(control).map_err(|err| {
            tracing::warn!(error = %err, "Ignoring click on malformed delete control");
            self.notifier.error(&err.user_message());
            err
        })
    }

    /// Send the delete for a confirmed intent.
    ///
    /// Takes the intent by value: once confirmed it no longer exists
    /// anywhere else, and the identifier sent is the one it carries.
    pub async fn confirm(
        &self,
        intent: PendingDeletion,
        list: &mut ProductList,
    ) -> Result<Product, ClientError> {
        let PendingDeletion { id, nome } = intent;
        tracing::debug!(product_id = id, %nome, "Sending delete");

        match self.api.delete_product(id).await {
            Ok(produto) => {
                list.remove(produto.id);
                self.notifier
                    .success(&format!("Produto \"{}\" excluído com sucesso", produto.nome));
                Ok(produto)
            }
            Err(err) => {
                tracing::warn!(product_id = id, error = %err, "Delete failed");
                self.notifier.error(&err.user_message());
                Err(err)
            }
        }
    }

    /// Run the full flow for one click against an already displayed list.
    pub async fn handle_click(
        &self,
        control: &DeleteControl,
        list: &mut ProductList,
    ) -> ClickOutcome {
        match self.on_click(control) {
            Ok(intent) => self.resolve(intent, list).await,
            Err(err) => ClickOutcome::Rejected(err),
        }
    }

    /// Run the full flow for a control when no list is displayed yet.
    ///
    /// The control is validated before anything is fetched, so a malformed
    /// control never reaches the endpoint. The list is loaded only once a
    /// valid intent exists.
    pub async fn delete_from_control(&self, control: &DeleteControl) -> ClickOutcome {
        let intent = match self.on_click(control) {
            Ok(intent) => intent,
            Err(err) => return ClickOutcome::Rejected(err),
        };

        let mut list = match self.api.list_products().await {
            Ok(products) => ProductList::new(products),
            Err(err) => {
                tracing::warn!(error = %err, "Could not load product list");
                self.notifier.error(&err.user_message());
                return ClickOutcome::Failed(err);
            }
        };

        self.resolve(intent, &mut list).await
    }

    /// Ask for confirmation, then send or drop the intent.
    async fn resolve(&self, intent: PendingDeletion, list: &mut ProductList) -> ClickOutcome {
        if !self.dialog.confirm(&intent).await {
            return ClickOutcome::Cancelled;
        }

        match self.confirm(intent, list).await {
            Ok(produto) => ClickOutcome::Deleted(produto),
            Err(err) => ClickOutcome::Failed(err),
        }
    }
}
