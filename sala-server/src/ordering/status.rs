//! Order status derivation from item statuses
//!
//! The order status follows the kitchen's progress on its items. Paid and
//! cancelled are explicit actions and are never overwritten here.

use shared::{OrderItemStatus, OrderStatus};

/// Derive the order status from its item statuses.
///
/// Cancelled items are ignored. Rules, in priority order over the active
/// items:
/// - all served -> served
/// - all ready -> ready
/// - any preparing -> preparing
/// - otherwise -> pending
///
/// No active items, or a terminal current status, leaves the order as is.
pub fn derive_order_status(current: OrderStatus, items: &[OrderItemStatus]) -> OrderStatus {
    if current.is_terminal() {
        return current;
    }

    let active: Vec<OrderItemStatus> = items
        .iter()
        .copied()
        .filter(OrderItemStatus::is_active)
        .collect();
    if active.is_empty() {
        return current;
    }

    if active.iter().all(|s| *s == OrderItemStatus::Served) {
        OrderStatus::Served
    } else if active.iter().all(|s| *s == OrderItemStatus::Ready) {
        OrderStatus::Ready
    } else if active.iter().any(|s| *s == OrderItemStatus::Preparing) {
        OrderStatus::Preparing
    } else {
        OrderStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderItemStatus as Item;

    #[test]
    fn test_all_served() {
        let status = derive_order_status(OrderStatus::Ready, &[Item::Served, Item::Served]);
        assert_eq!(status, OrderStatus::Served);
    }

    #[test]
    fn test_all_ready() {
        let status = derive_order_status(OrderStatus::Preparing, &[Item::Ready, Item::Ready]);
        assert_eq!(status, OrderStatus::Ready);
    }

    #[test]
    fn test_served_and_ready_mix_is_pending() {
        // Neither all-served nor all-ready, and nothing preparing
        let status = derive_order_status(OrderStatus::Pending, &[Item::Served, Item::Ready]);
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_any_preparing_wins_over_served() {
        let status = derive_order_status(OrderStatus::Pending, &[Item::Preparing, Item::Served]);
        assert_eq!(status, OrderStatus::Preparing);
    }

    #[test]
    fn test_cancelled_items_ignored() {
        let status = derive_order_status(
            OrderStatus::Pending,
            &[Item::Served, Item::Cancelled, Item::Served],
        );
        assert_eq!(status, OrderStatus::Served);
    }

    #[test]
    fn test_no_active_items_keeps_current() {
        let status = derive_order_status(OrderStatus::Preparing, &[Item::Cancelled]);
        assert_eq!(status, OrderStatus::Preparing);

        let status = derive_order_status(OrderStatus::Pending, &[]);
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_paid_never_overridden() {
        let status = derive_order_status(OrderStatus::Paid, &[Item::Pending]);
        assert_eq!(status, OrderStatus::Paid);
    }

    #[test]
    fn test_cancelled_never_overridden() {
        let status = derive_order_status(OrderStatus::Cancelled, &[Item::Served, Item::Served]);
        assert_eq!(status, OrderStatus::Cancelled);
    }
}
