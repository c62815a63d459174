use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    model::customer::CustomerRow,
    update::{execute_returning_key, PartialUpdate},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomerProfile},
        Customer,
    },
    id::CustomerId,
    MutationOutcome,
};
use kernel::repository::customer::CustomerRepository;
use shared::error::{AppError, AppResult};

const CUSTOMER_COLUMNS: &str = r#"
    customer_id, ssn, first_name, middle_initial, last_name,
    street_number, street_name, apt_number, city, province_or_state, country, zip
"#;

#[derive(new)]
pub struct CustomerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId> {
        sqlx::query_scalar::<_, CustomerId>(
            r#"
                INSERT INTO customers
                (ssn, first_name, middle_initial, last_name,
                 street_number, street_name, apt_number,
                 city, province_or_state, country, zip)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING customer_id
            "#,
        )
        .bind(&event.ssn)
        .bind(&event.first_name)
        .bind(&event.middle_initial)
        .bind(&event.last_name)
        .bind(&event.street_number)
        .bind(&event.street_name)
        .bind(&event.apt_number)
        .bind(&event.city)
        .bind(&event.province_or_state)
        .bind(&event.country)
        .bind(&event.zip)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Unique) => AppError::UniqueConstraintViolation(
                "a customer with this SSN is already registered".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })
    }

    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE customer_id = $1"
        ))
        .bind(customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Customer::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update_profile(&self, event: UpdateCustomerProfile) -> AppResult<MutationOutcome> {
        let mut update = PartialUpdate::new("customers");
        update
            .set_text("ssn", event.ssn.as_deref())
            .set_text("first_name", event.first_name.as_deref())
            .set_text("middle_initial", event.middle_initial.as_deref())
            .set_text("last_name", event.last_name.as_deref())
            .set_text("street_number", event.street_number.as_deref())
            .set_text("street_name", event.street_name.as_deref())
            .set_text("apt_number", event.apt_number.as_deref())
            .set_text("city", event.city.as_deref())
            .set_text("province_or_state", event.province_or_state.as_deref())
            .set_text("country", event.country.as_deref())
            .set_text("zip", event.zip.as_deref());

        let Some((sql, binds)) =
            update.into_statement("customer_id", event.customer_id.raw(), "customer_id")
        else {
            return Err(AppError::UnprocessableEntity(
                "at least one field must be provided".into(),
            ));
        };

        let updated = execute_returning_key(self.db.inner_ref(), &sql, &binds)
            .await
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::Unique) => AppError::UniqueConstraintViolation(
                    "another customer already uses this SSN".into(),
                ),
                _ => AppError::SpecificOperationError(e),
            })?;

        Ok(MutationOutcome::from_rows_affected(updated.is_some() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;

    fn sample_customer(ssn: &str) -> CreateCustomer {
        CreateCustomer {
            ssn: ssn.into(),
            first_name: "Joe".into(),
            middle_initial: None,
            last_name: "Brown".into(),
            street_number: "10".into(),
            street_name: "Elm St".into(),
            apt_number: Some("4B".into()),
            city: "Toronto".into(),
            province_or_state: "ON".into(),
            country: "Canada".into(),
            zip: "M5V 2T6".into(),
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_ssn_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(sample_customer("111-22-3333")).await?;
        let err = repo.create(sample_customer("111-22-3333")).await.unwrap_err();
        assert!(matches!(err, AppError::UniqueConstraintViolation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn partial_update_touches_only_submitted_fields(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));
        let customer_id = CustomerId::new(seed.customer_id);

        let outcome = repo
            .update_profile(UpdateCustomerProfile {
                customer_id,
                city: Some("Montreal".into()),
                // empty submissions behave like absent fields
                last_name: Some("".into()),
                ssn: None,
                first_name: None,
                middle_initial: None,
                street_number: None,
                street_name: None,
                apt_number: None,
                province_or_state: None,
                country: None,
                zip: None,
            })
            .await?;
        assert_eq!(outcome, MutationOutcome::Applied);

        let customer = repo.find_by_id(customer_id).await?.unwrap();
        assert_eq!(customer.city, "Montreal");
        assert_eq!(customer.last_name, "Smith");
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn empty_update_is_rejected_before_querying(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .update_profile(UpdateCustomerProfile {
                customer_id: CustomerId::new(1),
                ssn: None,
                first_name: Some("  ".into()),
                middle_initial: None,
                last_name: None,
                street_number: None,
                street_name: None,
                apt_number: None,
                city: None,
                province_or_state: None,
                country: None,
                zip: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn updating_a_missing_customer_is_a_noop(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));

        let outcome = repo
            .update_profile(UpdateCustomerProfile {
                customer_id: CustomerId::new(424242),
                city: Some("Halifax".into()),
                ssn: None,
                first_name: None,
                middle_initial: None,
                last_name: None,
                street_number: None,
                street_name: None,
                apt_number: None,
                province_or_state: None,
                country: None,
                zip: None,
            })
            .await?;
        assert_eq!(outcome, MutationOutcome::NoOp);
        Ok(())
    }
}
