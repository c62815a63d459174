use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    model::{booking::BookingRow, rental::RentalRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{CustomerId, RentalId},
    rental::{
        event::{CreateDirectRental, CreateRentalFromBooking},
        Rental,
    },
};
use kernel::repository::rental::RentalRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RentalRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RentalRepository for RentalRepositoryImpl {
    async fn create_from_booking(&self, event: CreateRentalFromBooking) -> AppResult<RentalId> {
        let mut tx = self.db.begin().await?;

        // Lock the booking row so two simultaneous check-ins serialize;
        // the unique index on rentals.booking_id stops the loser anyway.
        let booking = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, customer_id, hotel_id, room_number, start_date, end_date
                FROM bookings
                WHERE booking_id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(booking) = booking else {
            return Err(AppError::EntityNotFound(format!(
                "booking {} was not found",
                event.booking_id
            )));
        };

        let rental_id = sqlx::query_scalar::<_, RentalId>(
            r#"
                INSERT INTO rentals
                (booking_id, customer_id, hotel_id, room_number, start_date, end_date, amount_paid)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING rental_id
            "#,
        )
        .bind(booking.booking_id)
        .bind(booking.customer_id)
        .bind(booking.hotel_id)
        .bind(&booking.room_number)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(event.amount_paid)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Unique) => AppError::BookingConflict(
                "this booking has already been checked in".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(rental_id)
    }

    async fn create_direct(&self, event: CreateDirectRental) -> AppResult<RentalId> {
        sqlx::query_scalar::<_, RentalId>(
            r#"
                INSERT INTO rentals
                (customer_id, hotel_id, room_number, start_date, end_date, amount_paid)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING rental_id
            "#,
        )
        .bind(event.customer_id)
        .bind(event.hotel_id)
        .bind(&event.room_number)
        .bind(event.period.start_date())
        .bind(event.period.end_date())
        .bind(event.amount_paid)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::ForeignKey) => {
                AppError::EntityNotFound("the room or customer was not found".into())
            }
            Some(ConstraintKind::Check) => AppError::UnprocessableEntity(
                "the start date must be before the end date".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })
    }

    async fn find_by_customer(&self, customer_id: CustomerId) -> AppResult<Vec<Rental>> {
        sqlx::query_as::<_, RentalRow>(
            r#"
                SELECT rental_id, booking_id, customer_id, hotel_id, room_number,
                       start_date, end_date, amount_paid
                FROM rentals
                WHERE customer_id = $1
                ORDER BY start_date
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Rental::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;
    use rust_decimal::Decimal;

    #[sqlx::test(migrations = "../migrations")]
    async fn a_booking_can_only_be_checked_in_once(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let booking_id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO bookings (customer_id, hotel_id, room_number, start_date, end_date)
                VALUES ($1, $2, $3, '2024-06-01', '2024-06-05')
                RETURNING booking_id
            "#,
        )
        .bind(seed.customer_id)
        .bind(seed.hotel_id)
        .bind(&seed.room_number)
        .fetch_one(&pool)
        .await?;
        let repo = RentalRepositoryImpl::new(ConnectionPool::new(pool));

        let event = || CreateRentalFromBooking::new(booking_id.into(), Decimal::new(60000, 2));
        repo.create_from_booking(event()).await?;
        let err = repo.create_from_booking(event()).await.unwrap_err();
        assert!(matches!(err, AppError::BookingConflict(_)));
        Ok(())
    }
}
