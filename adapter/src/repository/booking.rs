use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    filter::{Comparison, FilterSpec, FilteredQuery, ValueKind},
    model::booking::{BookingRow, BookingSummaryRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{BookingSearchFilter, CancelBooking, CreateBooking},
        Booking, BookingSummary,
    },
    id::{BookingId, CustomerId},
    MutationOutcome,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

const BOOKING_SEARCH_BASE: &str = r#"
    SELECT bookings.booking_id,
           bookings.customer_id,
           customers.first_name,
           customers.last_name,
           chains.chain_name,
           hotels.city,
           bookings.hotel_id,
           bookings.room_number,
           bookings.start_date,
           bookings.end_date
    FROM bookings
    JOIN customers ON bookings.customer_id = customers.customer_id
    JOIN hotels ON bookings.hotel_id = hotels.hotel_id
    JOIN chains ON hotels.chain_id = chains.chain_id
"#;

// Customer names match case-insensitively as substrings.
const BOOKING_FILTERS: [FilterSpec; 3] = [
    FilterSpec::new("customers.first_name", Comparison::Contains, ValueKind::Text),
    FilterSpec::new("customers.last_name", Comparison::Contains, ValueKind::Text),
    FilterSpec::new("hotels.city", Comparison::Equal, ValueKind::Text),
];

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The room must exist before we try to book it; an early return
        // drops the transaction, which rolls it back.
        let room_exists = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM rooms WHERE hotel_id = $1 AND room_number = $2",
        )
        .bind(event.hotel_id)
        .bind(&event.room_number)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if room_exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "room {} of hotel {} was not found",
                event.room_number, event.hotel_id
            )));
        }

        // Concurrent overlapping attempts are arbitrated by the
        // database-side exclusion constraint on [start_date, end_date):
        // exactly one insert commits, the other raises 23P01.
        let booking_id = sqlx::query_scalar::<_, BookingId>(
            r#"
                INSERT INTO bookings (customer_id, hotel_id, room_number, start_date, end_date)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING booking_id
            "#,
        )
        .bind(event.customer_id)
        .bind(event.hotel_id)
        .bind(&event.room_number)
        .bind(event.period.start_date())
        .bind(event.period.end_date())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Exclusion) => AppError::BookingConflict(
                "the room is already booked for these dates".into(),
            ),
            Some(ConstraintKind::ForeignKey) => {
                AppError::EntityNotFound("the customer was not found".into())
            }
            Some(ConstraintKind::Check) => AppError::UnprocessableEntity(
                "the start date must be before the end date".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn search(&self, filter: BookingSearchFilter) -> AppResult<Vec<BookingSummary>> {
        let values = [
            filter.first_name.as_deref(),
            filter.last_name.as_deref(),
            filter.city.as_deref(),
        ];

        let mut query = FilteredQuery::new(BOOKING_SEARCH_BASE);
        query.apply_all(BOOKING_FILTERS.iter().zip(values))?;
        query.push_suffix("ORDER BY bookings.start_date, bookings.booking_id");

        query
            .fetch_all::<BookingSummaryRow>(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(BookingSummary::from).collect())
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_customer(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, customer_id, hotel_id, room_number, start_date, end_date
                FROM bookings
                WHERE customer_id = $1
                ORDER BY start_date
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<MutationOutcome> {
        // rentals referencing the booking keep their row, the FK is SET NULL
        let res = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(event.booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(MutationOutcome::from_rows_affected(res.rows_affected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;
    use chrono::NaiveDate;
    use kernel::model::booking::DateRange;
    use kernel::model::id::HotelId;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn booking_for(
        seed: &fixtures::Seed,
        start: &str,
        end: &str,
    ) -> anyhow::Result<CreateBooking> {
        Ok(CreateBooking::new(
            CustomerId::new(seed.customer_id),
            HotelId::new(seed.hotel_id),
            seed.room_number.clone(),
            DateRange::new(d(start), d(end))?,
        ))
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn overlapping_booking_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        repo.create(booking_for(&seed, "2024-06-01", "2024-06-05")?)
            .await?;
        let err = repo
            .create(booking_for(&seed, "2024-06-03", "2024-06-07")?)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BookingConflict(_)));

        // exactly one booking row persisted
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn back_to_back_bookings_both_succeed(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        // [06-01, 06-05) and [06-05, 06-09) share only the boundary date
        repo.create(booking_for(&seed, "2024-06-01", "2024-06-05")?)
            .await?;
        repo.create(booking_for(&seed, "2024-06-05", "2024-06-09")?)
            .await?;
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_overlaps_commit_exactly_once(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let (a, b) = tokio::join!(
            repo.create(booking_for(&seed, "2024-06-01", "2024-06-05")?),
            repo.create(booking_for(&seed, "2024-06-03", "2024-06-07")?),
        );
        assert_eq!(
            a.is_ok() as u8 + b.is_ok() as u8,
            1,
            "exactly one of two overlapping attempts must commit"
        );

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_a_missing_room_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let event = CreateBooking::new(
            CustomerId::new(seed.customer_id),
            HotelId::new(seed.hotel_id),
            "999".into(),
            DateRange::new(d("2024-06-01"), d("2024-06-05"))?,
        );
        let err = repo.create(event).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn cancelling_twice_is_a_noop(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(booking_for(&seed, "2024-06-01", "2024-06-05")?)
            .await?;
        let event = || CancelBooking::new(booking_id);
        assert_eq!(repo.cancel(event()).await?, MutationOutcome::Applied);
        assert_eq!(repo.cancel(event()).await?, MutationOutcome::NoOp);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn name_search_matches_substrings_case_insensitively(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(booking_for(&seed, "2024-06-01", "2024-06-05")?)
            .await?;

        // seeded customer is Ann Smith
        let hits = repo
            .search(BookingSearchFilter {
                last_name: Some("MIT".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Ann");

        let misses = repo
            .search(BookingSearchFilter {
                last_name: Some("jones".into()),
                ..Default::default()
            })
            .await?;
        assert!(misses.is_empty());
        Ok(())
    }
}
