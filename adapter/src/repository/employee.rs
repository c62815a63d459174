use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    model::employee::{EmployeeRow, PositionRow},
    update::{execute_returning_key, PartialUpdate},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    employee::{
        event::{CreateEmployee, UpdateEmployeeProfile},
        Employee, Position,
    },
    id::EmployeeId,
    MutationOutcome,
};
use kernel::repository::employee::EmployeeRepository;
use shared::error::{AppError, AppResult};

const EMPLOYEE_SELECT: &str = r#"
    SELECT employees.employee_id,
           employees.ssn,
           employees.first_name,
           employees.middle_initial,
           employees.last_name,
           employees.street_number,
           employees.street_name,
           employees.apt_number,
           employees.city,
           employees.province_or_state,
           employees.country,
           employees.zip,
           positions.position_name,
           employees.hotel_id
    FROM employees
    JOIN positions ON employees.position_id = positions.position_id
"#;

#[derive(new)]
pub struct EmployeeRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn create(&self, event: CreateEmployee) -> AppResult<EmployeeId> {
        sqlx::query_scalar::<_, EmployeeId>(
            r#"
                INSERT INTO employees
                (ssn, first_name, middle_initial, last_name,
                 street_number, street_name, apt_number,
                 city, province_or_state, country, zip,
                 position_id, hotel_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING employee_id
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
        .bind(event.position_id)
        .bind(event.hotel_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Unique) => AppError::UniqueConstraintViolation(
                "an employee with this SSN is already registered".into(),
            ),
            Some(ConstraintKind::ForeignKey) => {
                AppError::EntityNotFound("the selected position or hotel was not found".into())
            }
            _ => AppError::SpecificOperationError(e),
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "{EMPLOYEE_SELECT} ORDER BY employees.employee_id"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Employee::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "{EMPLOYEE_SELECT} WHERE employees.employee_id = $1"
        ))
        .bind(employee_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Employee::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update_profile(&self, event: UpdateEmployeeProfile) -> AppResult<MutationOutcome> {
        let mut update = PartialUpdate::new("employees");
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
            update.into_statement("employee_id", event.employee_id.raw(), "employee_id")
        else {
            return Err(AppError::UnprocessableEntity(
                "at least one field must be provided".into(),
            ));
        };

        let updated = execute_returning_key(self.db.inner_ref(), &sql, &binds)
            .await
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::Unique) => AppError::UniqueConstraintViolation(
                    "another employee already uses this SSN".into(),
                ),
                _ => AppError::SpecificOperationError(e),
            })?;

        Ok(MutationOutcome::from_rows_affected(updated.is_some() as u64))
    }

    async fn find_positions(&self) -> AppResult<Vec<Position>> {
        sqlx::query_as::<_, PositionRow>(
            "SELECT position_id, position_name FROM positions ORDER BY position_id",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Position::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;
    use kernel::model::id::{HotelId, PositionId};

    fn sample_employee(ssn: &str, position_id: i64, hotel_id: i64) -> CreateEmployee {
        CreateEmployee {
            ssn: ssn.into(),
            first_name: "Mia".into(),
            middle_initial: None,
            last_name: "Wong".into(),
            street_number: "5".into(),
            street_name: "Laurier Ave".into(),
            apt_number: None,
            city: "Ottawa".into(),
            province_or_state: "ON".into(),
            country: "Canada".into(),
            zip: "K1N 6N5".into(),
            position_id: PositionId::new(position_id),
            hotel_id: HotelId::new(hotel_id),
        }
    }

    async fn any_position_id(pool: &sqlx::PgPool) -> anyhow::Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "SELECT position_id FROM positions ORDER BY position_id LIMIT 1",
        )
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_ssn_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let position_id = any_position_id(&pool).await?;
        let repo = EmployeeRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(sample_employee("555-66-7777", position_id, seed.hotel_id))
            .await?;
        let err = repo
            .create(sample_employee("555-66-7777", position_id, seed.hotel_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UniqueConstraintViolation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn hiring_against_a_missing_position_or_hotel_is_not_found(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let position_id = any_position_id(&pool).await?;
        let repo = EmployeeRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .create(sample_employee("555-66-7777", 424242, seed.hotel_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));

        let err = repo
            .create(sample_employee("555-66-7777", position_id, 424242))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn created_employee_carries_its_position_name(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let position_id = any_position_id(&pool).await?;
        let repo = EmployeeRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let employee_id = repo
            .create(sample_employee("555-66-7777", position_id, seed.hotel_id))
            .await?;
        let employee = repo.find_by_id(employee_id).await?.unwrap();
        assert_eq!(employee.last_name, "Wong");

        let expected: String =
            sqlx::query_scalar("SELECT position_name FROM positions WHERE position_id = $1")
                .bind(position_id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(employee.position_name, expected);
        Ok(())
    }
}
