use padaria_core::product::Product;
use padaria_core::types::DbId;

use crate::control::DeleteControl;

/// The products currently displayed to the user.
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Remove the entry for `id`, returning it if it was displayed.
    pub fn remove(&mut self, id: DbId) -> Option<Product> {
        let pos = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(pos))
    }

    /// Each displayed product paired with its delete control.
    pub fn rows(&self) -> impl Iterator<Item = (&Product, DeleteControl)> {
        self.products
            .iter()
            .map(|p| (p, DeleteControl::for_product(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ID_ATTR;

    fn list() -> ProductList {
        ProductList::new(vec![
            Product {
                id: 4,
                nome: "Bolo de Chocolate".to_string(),
            },
            Product {
                id: 7,
                nome: "Pão Francês".to_string(),
            },
        ])
    }

    #[test]
    fn remove_drops_only_matching_entry() {
        let mut list = list();
        assert_eq!(list.remove(4).map(|p| p.id), Some(4));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove(4), None);
    }

    #[test]
    fn rows_carry_delete_controls() {
        let list = list();
        let ids: Vec<String> = list
            .rows()
            .map(|(_, control)| control.attribute(ID_ATTR).unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["4", "7"]);
    }
}
