//! Availability against live inventory: stock movements flip menu items
//! between available and short.

mod common;

use sala_server::catalog::AvailabilityService;
use sala_server::db::models::{
    InventoryItemCreate, InventoryMovementCreate, MenuCategoryCreate, MenuItemCreate,
    MenuItemIngredientCreate,
};
use sala_server::db::repository::{
    CategoryRepository, InventoryRepository, MenuItemIngredientRepository, MenuItemRepository,
};
use shared::MovementType;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

struct Fixture {
    inventory: InventoryRepository,
    ingredients: MenuItemIngredientRepository,
    availability: AvailabilityService,
    menu_item: RecordId,
    flour: RecordId,
}

async fn setup(db: &Surreal<Db>) -> Fixture {
    let categories = CategoryRepository::new(db.clone());
    let menu = MenuItemRepository::new(db.clone());
    let inventory = InventoryRepository::new(db.clone());
    let ingredients = MenuItemIngredientRepository::new(db.clone());

    let category = categories
        .create(MenuCategoryCreate {
            name: "Pizza".to_string(),
            description: None,
            sort_order: None,
        })
        .await
        .unwrap();

    let menu_item = menu
        .create(MenuItemCreate {
            category: category.id.unwrap(),
            name: "Margherita".to_string(),
            description: None,
            price: Some(9.0),
            preparation_time: None,
            allergens: vec!["gluten".to_string()],
            is_vegetarian: Some(true),
            is_vegan: None,
            is_gluten_free: None,
            spiciness_level: None,
            is_weight_based: None,
            price_per_hg: None,
        })
        .await
        .unwrap();

    let flour = inventory
        .create(InventoryItemCreate {
            name: "Flour".to_string(),
            quantity: Some(1.0),
            unit: "kg".to_string(),
            minimum_quantity: Some(0.5),
            supplier: None,
        })
        .await
        .unwrap();

    Fixture {
        availability: AvailabilityService::new(ingredients.clone()),
        inventory,
        ingredients,
        menu_item: menu_item.id.unwrap(),
        flour: flour.id.unwrap(),
    }
}

#[tokio::test]
async fn test_no_ingredients_means_available() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    let report = fx
        .availability
        .check_menu_item(&fx.menu_item.to_string())
        .await
        .unwrap();
    assert!(report.available);
}

#[tokio::test]
async fn test_stock_movements_flip_availability() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;

    fx.ingredients
        .create(MenuItemIngredientCreate {
            menu_item: fx.menu_item.clone(),
            inventory_item: fx.flour.clone(),
            quantity: 0.3,
            unit: "kg".to_string(),
        })
        .await
        .unwrap();

    // 1.0 kg on hand covers the 0.3 kg requirement
    let report = fx
        .availability
        .check_menu_item(&fx.menu_item.to_string())
        .await
        .unwrap();
    assert!(report.available);

    // Use up most of the flour: 1.0 - 0.8 = 0.2 < 0.3
    let flour_id = fx.flour.to_string();
    let item = fx
        .inventory
        .record_movement(
            &flour_id,
            InventoryMovementCreate {
                movement_type: MovementType::Out,
                quantity: 0.8,
                reason: Some("lunch service".to_string()),
            },
        )
        .await
        .unwrap();
    assert!((item.quantity - 0.2).abs() < 1e-9);
    assert!(item.is_low_stock());

    let report = fx
        .availability
        .check_menu_item(&fx.menu_item.to_string())
        .await
        .unwrap();
    assert!(!report.available);
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].name, "Flour");
    assert!((report.missing[0].available - 0.2).abs() < 1e-9);

    // Restock brings it back
    fx.inventory
        .record_movement(
            &flour_id,
            InventoryMovementCreate {
                movement_type: MovementType::In,
                quantity: 5.0,
                reason: Some("delivery".to_string()),
            },
        )
        .await
        .unwrap();

    let report = fx
        .availability
        .check_menu_item(&fx.menu_item.to_string())
        .await
        .unwrap();
    assert!(report.available);
}

#[tokio::test]
async fn test_movement_cannot_drive_stock_negative() {
    let db = common::memory_db().await;
    let fx = setup(&db).await;
    let flour_id = fx.flour.to_string();

    let result = fx
        .inventory
        .record_movement(
            &flour_id,
            InventoryMovementCreate {
                movement_type: MovementType::Out,
                quantity: 2.0,
                reason: None,
            },
        )
        .await;
    assert!(result.is_err());

    // Stock and movement log are untouched by the rejected movement
    let item = fx.inventory.find_by_id(&flour_id).await.unwrap().unwrap();
    assert_eq!(item.quantity, 1.0);
    assert!(fx.inventory.find_movements(&flour_id).await.unwrap().is_empty());
}
