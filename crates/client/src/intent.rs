use padaria_core::error::CoreError;
use padaria_core::identifier::parse_product_id;
use padaria_core::types::DbId;

use crate::control::{DeleteControl, ID_ATTR, NOME_ATTR};
use crate::error::ClientError;

/// A product the user has selected for deletion, awaiting confirmation.
///
/// Owned by whoever drives the confirmation step and moved into the
/// confirm handler, so the identifier travels with the intent instead of
/// living in shared state that a reset could clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: DbId,
    pub nome: String,
}

impl PendingDeletion {
    /// Validate a delete control's attributes into a pending deletion.
    ///
    /// Checks run in order: identifier present, identifier parses as a
    /// positive integer, name present.
    pub fn capture(control: &DeleteControl) -> Result<Self, ClientError> {
        let raw_id = control
            .attribute(ID_ATTR)
            .ok_or(ClientError::MissingAttribute(ID_ATTR))?;

        let id = parse_product_id(raw_id).map_err(|err| match err {
            CoreError::InvalidIdentifier(raw) => ClientError::InvalidIdentifier(raw),
            other => ClientError::InvalidIdentifier(other.to_string()),
        })?;

        let nome = control
            .attribute(NOME_ATTR)
            .ok_or(ClientError::MissingAttribute(NOME_ATTR))?;

        Ok(Self {
            id,
            nome: nome.to_string(),
        })
    }
}
