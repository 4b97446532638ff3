/// Product identifiers are assigned by the record store (BIGSERIAL).
pub type DbId = i64;
