use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    model::hotel::HotelRow,
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{event::DeleteHotel, Hotel},
    id::HotelId,
    MutationOutcome,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

const HOTEL_COLUMNS: &str = r#"
    hotel_id, chain_id, street_number, street_name, city,
    province_or_state, country, zip, stars, num_rooms
"#;

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY hotel_id"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Hotel::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>> {
        sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE hotel_id = $1"
        ))
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Hotel::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn delete(&self, event: DeleteHotel) -> AppResult<MutationOutcome> {
        // rooms and their bookings cascade; employees keep the hotel alive
        let res = sqlx::query("DELETE FROM hotels WHERE hotel_id = $1")
            .bind(event.hotel_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::ForeignKey) => AppError::ReferentialIntegrityConflict(
                    "the hotel still has employees and cannot be deleted".into(),
                ),
                _ => AppError::SpecificOperationError(e),
            })?;

        Ok(MutationOutcome::from_rows_affected(res.rows_affected()))
    }
}
