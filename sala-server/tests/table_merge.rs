//! Floor-plan operations: merge direction, position clamping, occupancy
//! timestamps.

mod common;

use sala_server::db::models::DiningTableCreate;
use sala_server::db::repository::DiningTableRepository;
use shared::TableStatus;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

async fn create_tables(db: &Surreal<Db>, numbers: &[i32]) -> Vec<String> {
    let repo = DiningTableRepository::new(db.clone());
    let mut ids = Vec::new();
    for number in numbers {
        let table = repo
            .create(DiningTableCreate {
                number: *number,
                capacity: 4,
                notes: None,
                x_position: None,
                y_position: None,
            })
            .await
            .unwrap();
        ids.push(table.id.unwrap().to_string());
    }
    ids
}

#[tokio::test]
async fn test_merge_marks_main_only() {
    let db = common::memory_db().await;
    let repo = DiningTableRepository::new(db.clone());
    let ids = create_tables(&db, &[1, 2, 3]).await;

    let main = repo
        .merge(&ids[0], vec![ids[1].clone(), ids[2].clone()])
        .await
        .unwrap();
    assert_eq!(main.merged_with.len(), 2);
    assert!(main.is_merged_main());

    // The merged tables themselves stay untouched
    for other in &ids[1..] {
        let table = repo.find_by_id(other).await.unwrap().unwrap();
        assert!(table.merged_with.is_empty());
        assert_eq!(table.status, TableStatus::Free);
    }
}

#[tokio::test]
async fn test_merge_rejects_self_and_unknown() {
    let db = common::memory_db().await;
    let repo = DiningTableRepository::new(db.clone());
    let ids = create_tables(&db, &[1, 2]).await;

    assert!(repo.merge(&ids[0], vec![ids[0].clone()]).await.is_err());
    assert!(repo.merge(&ids[0], vec![]).await.is_err());
    assert!(repo
        .merge(&ids[0], vec!["dining_table:missing".to_string()])
        .await
        .is_err());
    assert!(repo
        .merge(&ids[0], vec![ids[1].clone(), ids[1].clone()])
        .await
        .is_err());

    // Nothing was written by the failed attempts
    let main = repo.find_by_id(&ids[0]).await.unwrap().unwrap();
    assert!(main.merged_with.is_empty());
}

#[tokio::test]
async fn test_unmerge_clears_the_list() {
    let db = common::memory_db().await;
    let repo = DiningTableRepository::new(db.clone());
    let ids = create_tables(&db, &[1, 2]).await;

    repo.merge(&ids[0], vec![ids[1].clone()]).await.unwrap();
    let main = repo.unmerge(&ids[0]).await.unwrap();
    assert!(main.merged_with.is_empty());
}

#[tokio::test]
async fn test_position_clamped_and_rounded() {
    let db = common::memory_db().await;
    let repo = DiningTableRepository::new(db.clone());
    let ids = create_tables(&db, &[1]).await;

    let table = repo.set_position(&ids[0], -5.0, 12.345).await.unwrap();
    assert_eq!(table.x_position, 0.0);
    assert_eq!(table.y_position, 12.35);
}

#[tokio::test]
async fn test_occupied_stamps_timestamp() {
    let db = common::memory_db().await;
    let repo = DiningTableRepository::new(db.clone());
    let ids = create_tables(&db, &[1]).await;

    let table = repo.find_by_id(&ids[0]).await.unwrap().unwrap();
    assert!(table.last_occupied_at.is_none());

    let table = repo
        .set_status(&ids[0], TableStatus::Occupied)
        .await
        .unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert!(table.last_occupied_at.is_some());

    // Freeing the table keeps the last occupancy time
    let stamp = table.last_occupied_at.clone();
    let table = repo.set_status(&ids[0], TableStatus::Free).await.unwrap();
    assert_eq!(table.last_occupied_at, stamp);
}

#[tokio::test]
async fn test_duplicate_number_rejected() {
    let db = common::memory_db().await;
    let repo = DiningTableRepository::new(db.clone());
    create_tables(&db, &[7]).await;

    let result = repo
        .create(DiningTableCreate {
            number: 7,
            capacity: 2,
            notes: None,
            x_position: None,
            y_position: None,
        })
        .await;
    assert!(result.is_err());
}
