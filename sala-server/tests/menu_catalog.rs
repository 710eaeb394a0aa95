//! Menu catalog listing: deactivated categories disappear from the menu
//! but stay reachable for management.

mod common;

use sala_server::db::models::{MenuCategoryCreate, MenuCategoryUpdate};
use sala_server::db::repository::CategoryRepository;

fn category(name: &str, sort_order: i32) -> MenuCategoryCreate {
    MenuCategoryCreate {
        name: name.to_string(),
        description: None,
        sort_order: Some(sort_order),
    }
}

#[tokio::test]
async fn test_deactivated_category_hidden_from_menu() {
    let db = common::memory_db().await;
    let repo = CategoryRepository::new(db.clone());

    repo.create(category("Antipasti", 1)).await.unwrap();
    let seasonal = repo.create(category("Seasonal", 2)).await.unwrap();
    let seasonal_id = seasonal.id.unwrap().to_string();

    // Both visible while active
    assert_eq!(repo.find_all().await.unwrap().len(), 2);

    repo.update(
        &seasonal_id,
        MenuCategoryUpdate {
            name: None,
            description: None,
            sort_order: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    let menu = repo.find_all().await.unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, "Antipasti");

    // Management listing still sees it
    let all = repo.find_all_with_inactive().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|c| c.name == "Seasonal" && !c.is_active));
}
