//! Ordering Core
//!
//! Pure derivation logic for orders: the total from the line items and the
//! order status from the item statuses. Repositories persist what these
//! functions return; nothing in here touches the database.

pub mod pricing;
pub mod status;

pub use pricing::{order_total, rounded_total, to_decimal, to_f64, LinePrice, OrderLine};
pub use status::derive_order_status;
