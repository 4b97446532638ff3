//! Delete controls and their attached attributes.

use std::collections::BTreeMap;

use padaria_core::product::Product;

/// Attribute holding the product identifier.
pub const ID_ATTR: &str = "data-id";

/// Attribute holding the product name.
pub const NOME_ATTR: &str = "data-nome";

/// A rendered delete control.
///
/// The product is identified only through attributes attached to the
/// element, never through text spliced into an inline handler, so names
/// containing quotes or other special characters pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteControl {
    attributes: BTreeMap<String, String>,
}

impl DeleteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// The control rendered next to a product in the list.
    pub fn for_product(product: &Product) -> Self {
        Self::new()
            .with_attribute(ID_ATTR, product.id.to_string())
            .with_attribute(NOME_ATTR, product.nome.clone())
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
