pub mod booking;
pub mod chain;
pub mod customer;
pub mod employee;
pub mod health;
pub mod hotel;
pub mod rental;
pub mod room;

#[cfg(test)]
pub(crate) mod fixtures {
    use sqlx::PgPool;

    pub struct Seed {
        pub chain_id: i64,
        pub hotel_id: i64,
        pub room_number: String,
        pub customer_id: i64,
    }

    /// One chain with one hotel, one bookable room and one registered
    /// customer, for the repository tests.
    pub async fn chain_with_room(pool: &PgPool) -> anyhow::Result<Seed> {
        let chain_id: i64 =
            sqlx::query_scalar("INSERT INTO chains (chain_name) VALUES ('Test Chain') RETURNING chain_id")
                .fetch_one(pool)
                .await?;
        let hotel_id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO hotels
                (chain_id, street_number, street_name, city, province_or_state, country, zip, stars)
                VALUES ($1, '1', 'Main St', 'Ottawa', 'ON', 'Canada', 'K1A 0B1', 4)
                RETURNING hotel_id
            "#,
        )
        .bind(chain_id)
        .fetch_one(pool)
        .await?;
        let view_type: i64 =
            sqlx::query_scalar("INSERT INTO view_types (description) VALUES ('Sea view') RETURNING id")
                .fetch_one(pool)
                .await?;
        sqlx::query(
            r#"
                INSERT INTO rooms
                (hotel_id, room_number, capacity, price, extensible, tv, air_condition, fridge, view_type)
                VALUES ($1, '101', 2, 150.00, false, true, true, false, $2)
            "#,
        )
        .bind(hotel_id)
        .bind(view_type)
        .execute(pool)
        .await?;
        let customer_id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO customers
                (ssn, first_name, last_name, street_number, street_name, city, province_or_state, country, zip)
                VALUES ('123-45-6789', 'Ann', 'Smith', '2', 'Bank St', 'Ottawa', 'ON', 'Canada', 'K2P 1L4')
                RETURNING customer_id
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(Seed {
            chain_id,
            hotel_id,
            room_number: "101".into(),
            customer_id,
        })
    }
}
