//! Product record and creation payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a product name, in characters.
pub const MAX_NOME_LEN: u64 = 120;

/// A product as held by the record store.
///
/// The application only ever holds transient copies; the store owns the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub nome: String,
}

/// Payload for creating a product. The store assigns the identifier.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, max = MAX_NOME_LEN, message = "Nome do produto é obrigatório"))]
    pub nome: String,
}

impl NewProduct {
    /// Trim the name and validate the result.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let normalized = Self {
            nome: self.nome.trim().to_string(),
        };
        normalized
            .validate()
            .map_err(|_| CoreError::Validation("Nome do produto é obrigatório".to_string()))?;
        Ok(normalized)
    }
}
