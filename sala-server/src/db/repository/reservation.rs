//! Reservation Repository

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Reservation, ReservationCreate, ReservationUpdate};
use shared::ReservationStatus;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation ORDER BY date, time")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Reservations for one day, service order
    pub async fn find_by_date(&self, date: &str) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE date = $date ORDER BY time")
            .bind(("date", date.to_string()))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing = parse_record_id(id)?;
        let reservation: Option<Reservation> = self.base.db().select(thing).await?;
        Ok(reservation)
    }

    /// Reservations come in confirmed; there is no tentative state.
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        if data.party_size <= 0 {
            return Err(RepoError::Validation(
                "Party size must be positive".to_string(),
            ));
        }
        if data.guest_name.trim().is_empty() {
            return Err(RepoError::Validation("Guest name is required".to_string()));
        }

        let table: Option<serde_json::Value> = self.base.db().select(data.table.clone()).await?;
        if table.is_none() {
            return Err(RepoError::NotFound(format!(
                "Table {} not found",
                data.table
            )));
        }

        let now = now_rfc3339();
        let reservation = Reservation {
            id: None,
            table: data.table,
            guest_name: data.guest_name,
            guest_phone: data.guest_phone,
            guest_email: data.guest_email,
            party_size: data.party_size,
            date: data.date,
            time: data.time,
            duration: data.duration,
            status: ReservationStatus::Confirmed,
            notes: data.notes,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<Reservation> = self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    pub async fn update(&self, id: &str, data: ReservationUpdate) -> RepoResult<Reservation> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        if let Some(party_size) = data.party_size
            && party_size <= 0
        {
            return Err(RepoError::Validation(
                "Party size must be positive".to_string(),
            ));
        }

        let updated = Reservation {
            id: existing.id.clone(),
            table: existing.table,
            guest_name: data.guest_name.unwrap_or(existing.guest_name),
            guest_phone: data.guest_phone.or(existing.guest_phone),
            guest_email: data.guest_email.or(existing.guest_email),
            party_size: data.party_size.unwrap_or(existing.party_size),
            date: data.date.unwrap_or(existing.date),
            time: data.time.unwrap_or(existing.time),
            duration: data.duration.unwrap_or(existing.duration),
            status: data.status.unwrap_or(existing.status),
            notes: data.notes.or(existing.notes),
            created_at: existing.created_at,
            updated_at: Some(now_rfc3339()),
        };

        let result: Option<Reservation> = self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
