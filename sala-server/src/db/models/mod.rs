//! Data models
//!
//! SurrealDB row types and API payloads. All record references use the
//! `table:id` RecordId convention via [`serde_helpers`].

pub mod serde_helpers;

pub mod category;
pub mod dining_table;
pub mod ingredient;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod profile;
pub mod reservation;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use ingredient::*;
pub use inventory::*;
pub use menu_item::*;
pub use order::*;
pub use profile::*;
pub use reservation::*;
