//! Client side of product deletion.
//!
//! A delete control carries the product's identifier and name as element
//! attributes. Clicking it captures a [`intent::PendingDeletion`], the user
//! confirms through a [`ui::ConfirmDialog`], and the intent is then moved
//! into [`trigger::DeletionTrigger::confirm`], which calls the endpoint and
//! updates the displayed [`list::ProductList`].

pub mod api;
pub mod control;
pub mod error;
pub mod intent;
pub mod list;
pub mod trigger;
pub mod ui;
