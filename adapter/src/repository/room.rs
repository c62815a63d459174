use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    filter::{Comparison, FilterSpec, FilteredQuery, ValueKind},
    model::room::{RoomRow, RoomSummaryRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::DateRange,
    id::HotelId,
    room::{
        event::{DeleteRoom, RoomSearchFilter},
        Room, RoomSearchFacets, RoomSummary,
    },
    MutationOutcome,
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

const ROOM_SUMMARY_BASE: &str = r#"
    SELECT hotels.hotel_id,
           chains.chain_name,
           hotels.stars,
           hotels.num_rooms,
           hotels.country,
           hotels.province_or_state,
           hotels.city,
           CONCAT(hotels.street_number, ' ', hotels.street_name, ', ', hotels.zip) AS address,
           rooms.room_number,
           rooms.capacity,
           view_types.description AS view_description,
           rooms.price
    FROM rooms
    JOIN hotels ON rooms.hotel_id = hotels.hotel_id
    JOIN chains ON hotels.chain_id = chains.chain_id
    JOIN view_types ON rooms.view_type = view_types.id
"#;

// The filter specs, in the order the search form submits them. The
// clause order in the emitted SQL follows this list.
const ROOM_FILTERS: [FilterSpec; 8] = [
    FilterSpec::new("chains.chain_name", Comparison::Equal, ValueKind::Text),
    FilterSpec::new("hotels.stars", Comparison::AtLeast, ValueKind::Int),
    FilterSpec::new("hotels.num_rooms", Comparison::AtLeast, ValueKind::Int),
    FilterSpec::new("hotels.country", Comparison::Equal, ValueKind::Text),
    FilterSpec::new("hotels.province_or_state", Comparison::Equal, ValueKind::Text),
    FilterSpec::new("hotels.city", Comparison::Equal, ValueKind::Text),
    FilterSpec::new("rooms.capacity", Comparison::Equal, ValueKind::Int),
    FilterSpec::new("rooms.price", Comparison::AtMost, ValueKind::Decimal),
];

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn search(&self, filter: RoomSearchFilter) -> AppResult<Vec<RoomSummary>> {
        let values = [
            filter.chain.as_deref(),
            filter.stars.as_deref(),
            filter.num_rooms.as_deref(),
            filter.country.as_deref(),
            filter.province_or_state.as_deref(),
            filter.city.as_deref(),
            filter.capacity.as_deref(),
            filter.price.as_deref(),
        ];

        let mut query = FilteredQuery::new(ROOM_SUMMARY_BASE);
        query.apply_all(ROOM_FILTERS.iter().zip(values))?;
        query.push_suffix("ORDER BY chains.chain_name, hotels.hotel_id, rooms.room_number");

        query
            .fetch_all::<RoomSummaryRow>(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(RoomSummary::from).collect())
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_available(&self, period: DateRange) -> AppResult<Vec<RoomSummary>> {
        sqlx::query_as::<_, RoomSummaryRow>("SELECT * FROM get_available_rooms($1, $2)")
            .bind(period.start_date())
            .bind(period.end_date())
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(RoomSummary::from).collect())
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_key(
        &self,
        hotel_id: HotelId,
        room_number: &str,
    ) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT rooms.hotel_id,
                       rooms.room_number,
                       chains.chain_name,
                       hotels.country,
                       hotels.province_or_state,
                       hotels.city,
                       CONCAT(hotels.street_number, ' ', hotels.street_name) AS address,
                       hotels.zip,
                       rooms.capacity,
                       view_types.description AS view_description,
                       rooms.extensible,
                       rooms.tv,
                       rooms.air_condition,
                       rooms.fridge,
                       rooms.price
                FROM rooms
                JOIN hotels ON rooms.hotel_id = hotels.hotel_id
                JOIN chains ON hotels.chain_id = chains.chain_id
                JOIN view_types ON rooms.view_type = view_types.id
                WHERE rooms.hotel_id = $1 AND rooms.room_number = $2
            "#,
        )
        .bind(hotel_id)
        .bind(room_number)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Room::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn delete(&self, event: DeleteRoom) -> AppResult<MutationOutcome> {
        let res = sqlx::query("DELETE FROM rooms WHERE hotel_id = $1 AND room_number = $2")
            .bind(event.hotel_id)
            .bind(&event.room_number)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::ForeignKey) => AppError::ReferentialIntegrityConflict(
                    "the room has recorded rentals and cannot be deleted".into(),
                ),
                _ => AppError::SpecificOperationError(e),
            })?;

        Ok(MutationOutcome::from_rows_affected(res.rows_affected()))
    }

    async fn search_facets(&self) -> AppResult<RoomSearchFacets> {
        let chains = self
            .distinct_text("SELECT DISTINCT chain_name FROM chains ORDER BY chain_name")
            .await?;
        let capacities = self
            .distinct_int("SELECT DISTINCT capacity FROM rooms ORDER BY capacity")
            .await?;
        let cities = self
            .distinct_text("SELECT DISTINCT city FROM hotels ORDER BY city")
            .await?;
        let countries = self
            .distinct_text("SELECT DISTINCT country FROM hotels ORDER BY country")
            .await?;
        let provinces_or_states = self
            .distinct_text(
                "SELECT DISTINCT province_or_state FROM hotels ORDER BY province_or_state",
            )
            .await?;
        let stars = self
            .distinct_int("SELECT DISTINCT stars FROM hotels ORDER BY stars")
            .await?;
        let num_rooms = self
            .distinct_int("SELECT DISTINCT num_rooms FROM hotels ORDER BY num_rooms")
            .await?;

        Ok(RoomSearchFacets {
            chains,
            capacities,
            cities,
            countries,
            provinces_or_states,
            stars,
            num_rooms,
        })
    }
}

impl RoomRepositoryImpl {
    async fn distinct_text(&self, sql: &str) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn distinct_int(&self, sql: &str) -> AppResult<Vec<i32>> {
        sqlx::query_scalar::<_, i32>(sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;

    #[sqlx::test(migrations = "../migrations")]
    async fn empty_filter_returns_every_room(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        sqlx::query(
            r#"
                INSERT INTO rooms
                (hotel_id, room_number, capacity, price, extensible, tv, air_condition, fridge, view_type)
                SELECT $1, '102', 4, 240.00, true, true, true, true, view_type
                FROM rooms WHERE hotel_id = $1 AND room_number = '101'
            "#,
        )
        .bind(seed.hotel_id)
        .execute(&pool)
        .await?;
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        let all = repo.search(RoomSearchFilter::default()).await?;
        assert_eq!(all.len(), 2);

        let two_person = repo
            .search(RoomSearchFilter {
                capacity: Some("2".into()),
                price: Some("".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(two_person.len(), 1);
        assert_eq!(two_person[0].room_number, "101");
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn availability_honours_half_open_ranges(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        sqlx::query(
            r#"
                INSERT INTO bookings (customer_id, hotel_id, room_number, start_date, end_date)
                VALUES ($1, $2, $3, '2024-06-01', '2024-06-05')
            "#,
        )
        .bind(seed.customer_id)
        .bind(seed.hotel_id)
        .bind(&seed.room_number)
        .execute(&pool)
        .await?;
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        let d = |s: &str| s.parse::<chrono::NaiveDate>().unwrap();

        // overlapping the stay: the room is out
        let overlapping = repo
            .find_available(DateRange::new(d("2024-06-03"), d("2024-06-07"))?)
            .await?;
        assert!(overlapping.is_empty());

        // starting on the checkout day: the room is free again
        let touching = repo
            .find_available(DateRange::new(d("2024-06-05"), d("2024-06-09"))?)
            .await?;
        assert_eq!(touching.len(), 1);
        assert_eq!(touching[0].room_number, seed.room_number);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn deleting_a_room_twice_is_a_noop(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        let event = || DeleteRoom::new(HotelId::new(seed.hotel_id), seed.room_number.clone());
        assert_eq!(repo.delete(event()).await?, MutationOutcome::Applied);
        assert_eq!(repo.delete(event()).await?, MutationOutcome::NoOp);
        Ok(())
    }
}
