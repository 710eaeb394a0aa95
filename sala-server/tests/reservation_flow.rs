//! Reservation lifecycle: confirmed on creation, day listing in service
//! order, explicit status transitions.

mod common;

use sala_server::db::models::{DiningTableCreate, ReservationCreate, ReservationUpdate};
use sala_server::db::repository::{DiningTableRepository, ReservationRepository};
use shared::ReservationStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

async fn create_table(db: &Surreal<Db>) -> RecordId {
    let repo = DiningTableRepository::new(db.clone());
    repo.create(DiningTableCreate {
        number: 1,
        capacity: 4,
        notes: None,
        x_position: None,
        y_position: None,
    })
    .await
    .unwrap()
    .id
    .unwrap()
}

fn reservation(table: &RecordId, name: &str, date: &str, time: &str) -> ReservationCreate {
    ReservationCreate {
        table: table.clone(),
        guest_name: name.to_string(),
        guest_phone: None,
        guest_email: None,
        party_size: 2,
        date: date.to_string(),
        time: time.to_string(),
        duration: "90".to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn test_created_confirmed_with_duration() {
    let db = common::memory_db().await;
    let table = create_table(&db).await;
    let repo = ReservationRepository::new(db.clone());

    let created = repo
        .create(ReservationCreate {
            guest_phone: Some("555-0101".to_string()),
            guest_email: Some("anna@example.com".to_string()),
            ..reservation(&table, "Anna", "2026-09-01", "20:00")
        })
        .await
        .unwrap();

    assert_eq!(created.status, ReservationStatus::Confirmed);
    assert_eq!(created.duration, "90");
    assert_eq!(created.guest_email.as_deref(), Some("anna@example.com"));

    let reloaded = repo
        .find_by_id(&created.id.unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.duration, "90");
}

#[tokio::test]
async fn test_day_listing_in_time_order() {
    let db = common::memory_db().await;
    let table = create_table(&db).await;
    let repo = ReservationRepository::new(db.clone());

    repo.create(reservation(&table, "Late", "2026-09-01", "21:30"))
        .await
        .unwrap();
    repo.create(reservation(&table, "Early", "2026-09-01", "19:00"))
        .await
        .unwrap();
    repo.create(reservation(&table, "Other day", "2026-09-02", "19:00"))
        .await
        .unwrap();

    let day = repo.find_by_date("2026-09-01").await.unwrap();
    assert_eq!(day.len(), 2);
    assert_eq!(day[0].guest_name, "Early");
    assert_eq!(day[1].guest_name, "Late");
}

#[tokio::test]
async fn test_status_and_duration_update() {
    let db = common::memory_db().await;
    let table = create_table(&db).await;
    let repo = ReservationRepository::new(db.clone());

    let created = repo
        .create(reservation(&table, "Anna", "2026-09-01", "20:00"))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    let updated = repo
        .update(
            &id,
            ReservationUpdate {
                guest_name: None,
                guest_phone: None,
                guest_email: None,
                party_size: Some(4),
                date: None,
                time: None,
                duration: Some("120".to_string()),
                status: Some(ReservationStatus::Completed),
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, ReservationStatus::Completed);
    assert_eq!(updated.duration, "120");
    assert_eq!(updated.party_size, 4);
    // Untouched fields survive the partial update
    assert_eq!(updated.guest_name, "Anna");
}

#[tokio::test]
async fn test_rejects_bad_party_size_and_unknown_table() {
    let db = common::memory_db().await;
    let table = create_table(&db).await;
    let repo = ReservationRepository::new(db.clone());

    let result = repo
        .create(ReservationCreate {
            party_size: 0,
            ..reservation(&table, "Anna", "2026-09-01", "20:00")
        })
        .await;
    assert!(result.is_err());

    let ghost: RecordId = "dining_table:missing".parse().unwrap();
    let result = repo
        .create(reservation(&ghost, "Anna", "2026-09-01", "20:00"))
        .await;
    assert!(result.is_err());
}
