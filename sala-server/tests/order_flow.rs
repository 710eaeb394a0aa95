//! Order lifecycle against a real (in-memory) database: totals from mixed
//! pricing modes and status derivation from item progress.

mod common;

use sala_server::db::models::{
    DiningTableCreate, MenuCategoryCreate, MenuItemCreate, OrderCreate, OrderItemCreate,
};
use sala_server::db::repository::{
    CategoryRepository, DiningTableRepository, MenuItemRepository, OrderRepository,
};
use shared::{OrderItemStatus, OrderStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

struct Fixture {
    orders: OrderRepository,
    table: RecordId,
    /// Fixed-price 8.50
    bruschetta: RecordId,
    /// Weight-based, entered 2.00/hg -> 20.00/kg
    branzino: RecordId,
}

async fn setup(db: &Surreal<Db>) -> Fixture {
    let tables = DiningTableRepository::new(db.clone());
    let categories = CategoryRepository::new(db.clone());
    let menu = MenuItemRepository::new(db.clone());

    let table = tables
        .create(DiningTableCreate {
            number: 1,
            capacity: 4,
            notes: None,
            x_position: None,
            y_position: None,
        })
        .await
        .unwrap();

    let category = categories
        .create(MenuCategoryCreate {
            name: "Mains".to_string(),
            description: None,
            sort_order: None,
        })
        .await
        .unwrap();
    let category_id = category.id.clone().unwrap();

    let bruschetta = menu
        .create(MenuItemCreate {
            category: category_id.clone(),
            name: "Bruschetta".to_string(),
            description: None,
            price: Some(8.50),
            preparation_time: None,
            allergens: vec![],
            is_vegetarian: Some(true),
            is_vegan: None,
            is_gluten_free: None,
            spiciness_level: None,
            is_weight_based: None,
            price_per_hg: None,
        })
        .await
        .unwrap();

    let branzino = menu
        .create(MenuItemCreate {
            category: category_id,
            name: "Branzino".to_string(),
            description: None,
            price: None,
            preparation_time: None,
            allergens: vec![],
            is_vegetarian: None,
            is_vegan: None,
            is_gluten_free: None,
            spiciness_level: None,
            is_weight_based: Some(true),
            price_per_hg: Some(2.0),
        })
        .await
        .unwrap();

    // Weight-based items store price = 0 and the per-kg figure
    assert_eq!(branzino.price, 0.0);
    assert_eq!(branzino.price_per_kg, Some(20.0));

    Fixture {
        orders: OrderRepository::new(db.clone()),
        table: table.id.unwrap(),
        bruschetta: bruschetta.id.unwrap(),
        branzino: branzino.id.unwrap(),
    }
}

fn item(menu_item: &RecordId, quantity: i32, weight_kg: Option<f64>) -> OrderItemCreate {
    OrderItemCreate {
        menu_item: menu_item.clone(),
        quantity,
        weight_kg,
        notes: None,
    }
}

#[tokio::test]
async fn test_total_mixes_fixed_and_weight_pricing() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![
                    item(&fx.bruschetta, 3, None),
                    item(&fx.branzino, 2, Some(0.3)),
                ],
            },
            None,
        )
        .await
        .unwrap();

    // 8.50 x 3 + 20.00 x 0.3 x 2 = 25.50 + 12.00
    assert!((order.total_amount - 37.50).abs() < 1e-9);
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_empty_order_totals_zero() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![],
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(order.total_amount, 0.0);
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_status_follows_item_progress() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![item(&fx.bruschetta, 1, None), item(&fx.bruschetta, 2, None)],
            },
            None,
        )
        .await
        .unwrap();
    let order_id = order.id.unwrap().to_string();

    let details = fx.orders.find_item_details(&order_id).await.unwrap();
    let first = details[0].item.id.clone().unwrap().to_string();
    let second = details[1].item.id.clone().unwrap().to_string();

    // One item starts cooking: the whole order is preparing
    let order = fx
        .orders
        .update_item_status(&first, OrderItemStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Preparing);

    // One served, one ready: neither all-served nor all-ready
    fx.orders
        .update_item_status(&first, OrderItemStatus::Served)
        .await
        .unwrap();
    let order = fx
        .orders
        .update_item_status(&second, OrderItemStatus::Ready)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    // Everything served
    let order = fx
        .orders
        .update_item_status(&second, OrderItemStatus::Served)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Served);
}

#[tokio::test]
async fn test_cancelled_item_drops_out_of_total() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![item(&fx.bruschetta, 3, None), item(&fx.branzino, 1, Some(0.5))],
            },
            None,
        )
        .await
        .unwrap();
    let order_id = order.id.unwrap().to_string();

    let details = fx.orders.find_item_details(&order_id).await.unwrap();
    let branzino_line = details
        .iter()
        .find(|d| d.is_weight_based)
        .unwrap()
        .item
        .id
        .clone()
        .unwrap()
        .to_string();

    let order = fx
        .orders
        .update_item_status(&branzino_line, OrderItemStatus::Cancelled)
        .await
        .unwrap();

    // Only the bruschetta remains: 8.50 x 3
    assert!((order.total_amount - 25.50).abs() < 1e-9);
}

#[tokio::test]
async fn test_paid_order_is_frozen() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![item(&fx.bruschetta, 1, None)],
            },
            None,
        )
        .await
        .unwrap();
    let order_id = order.id.unwrap().to_string();

    let details = fx.orders.find_item_details(&order_id).await.unwrap();
    let line = details[0].item.id.clone().unwrap().to_string();

    let order = fx
        .orders
        .set_status(&order_id, OrderStatus::Paid)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Paid);

    // No further item changes, and derivation never overwrites paid
    assert!(fx
        .orders
        .update_item_status(&line, OrderItemStatus::Served)
        .await
        .is_err());
    assert!(fx
        .orders
        .add_items(&order_id, vec![item(&fx.bruschetta, 1, None)])
        .await
        .is_err());

    let reloaded = fx.orders.find_by_id(&order_id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, OrderStatus::Paid);
}

#[tokio::test]
async fn test_list_details_carry_table_and_resolved_items() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![item(&fx.bruschetta, 2, None)],
            },
            None,
        )
        .await
        .unwrap();

    let listed = fx.orders.find_all_detail().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].table_number, 1);
    assert_eq!(listed[0].items.len(), 1);
    assert_eq!(listed[0].items[0].menu_item_name.as_deref(), Some("Bruschetta"));

    // A paid order drops out of the active listing
    let order_id = order.id.unwrap().to_string();
    fx.orders
        .set_status(&order_id, OrderStatus::Paid)
        .await
        .unwrap();
    assert!(fx.orders.find_active_detail().await.unwrap().is_empty());
    assert_eq!(fx.orders.find_all_detail().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_order_removes_items() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let order = fx
        .orders
        .create(
            OrderCreate {
                table: fx.table.clone(),
                notes: None,
                items: vec![item(&fx.bruschetta, 2, None)],
            },
            None,
        )
        .await
        .unwrap();
    let order_id = order.id.unwrap().to_string();

    assert!(fx.orders.delete(&order_id).await.unwrap());
    assert!(fx.orders.find_by_id(&order_id).await.unwrap().is_none());
    assert!(fx
        .orders
        .find_item_details(&order_id)
        .await
        .unwrap()
        .is_empty());
}
