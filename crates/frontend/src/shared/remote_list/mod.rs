//! Paginated, filterable listing of a remote entity.
//!
//! [`controller`] holds the browser-free state machine, [`entity`] the
//! per-entity description and [`page`] the Leptos view shared by all lists.

pub mod controller;
pub mod entity;
pub mod page;

pub use controller::{FailureMessages, ListController};
pub use entity::{Column, ListEntity, ListRow};
pub use page::remote_list_page;
