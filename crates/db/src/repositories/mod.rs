mod pg_store;
mod product_repo;

pub use pg_store::PgProductStore;
pub use product_repo::ProductRepo;
