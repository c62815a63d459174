use crate::database::{
    conflict::{constraint_kind, ConstraintKind},
    model::chain::{ChainEmailRow, ChainOfficeRow, ChainPhoneRow, ChainRow},
    update::{execute_returning_key, PartialUpdate},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    chain::{
        event::{DeleteChain, UpdateChainName},
        Chain, ChainContacts,
    },
    id::{ChainId, EmailId, OfficeId, PhoneId},
    MutationOutcome,
};
use kernel::repository::chain::ChainRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ChainRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ChainRepository for ChainRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Chain>> {
        sqlx::query_as::<_, ChainRow>(
            r#"
                SELECT chain_id, chain_name, num_hotels
                FROM chains
                ORDER BY chain_name
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Chain::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, chain_id: ChainId) -> AppResult<Option<Chain>> {
        sqlx::query_as::<_, ChainRow>(
            r#"
                SELECT chain_id, chain_name, num_hotels
                FROM chains
                WHERE chain_id = $1
            "#,
        )
        .bind(chain_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Chain::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update_name(&self, event: UpdateChainName) -> AppResult<MutationOutcome> {
        let mut update = PartialUpdate::new("chains");
        update.set_text("chain_name", Some(&event.chain_name));
        let Some((sql, binds)) = update.into_statement("chain_id", event.chain_id.raw(), "chain_id")
        else {
            return Err(AppError::UnprocessableEntity(
                "a non-empty chain name is required".into(),
            ));
        };

        let updated = execute_returning_key(self.db.inner_ref(), &sql, &binds)
            .await
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::Unique) => AppError::UniqueConstraintViolation(format!(
                    "a chain named {:?} already exists",
                    event.chain_name
                )),
                _ => AppError::SpecificOperationError(e),
            })?;

        Ok(MutationOutcome::from_rows_affected(updated.is_some() as u64))
    }

    async fn delete(&self, event: DeleteChain) -> AppResult<MutationOutcome> {
        let res = sqlx::query("DELETE FROM chains WHERE chain_id = $1")
            .bind(event.chain_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::ForeignKey) => AppError::ReferentialIntegrityConflict(
                    "the chain still owns hotels and cannot be deleted".into(),
                ),
                _ => AppError::SpecificOperationError(e),
            })?;

        Ok(MutationOutcome::from_rows_affected(res.rows_affected()))
    }

    async fn find_contacts(&self, chain_id: ChainId) -> AppResult<ChainContacts> {
        let offices = sqlx::query_as::<_, ChainOfficeRow>(
            r#"
                SELECT id AS office_id, street_number, street_name, apt_number,
                       city, province_or_state, country, zip
                FROM chain_offices
                WHERE chain_id = $1
                ORDER BY id
            "#,
        )
        .bind(chain_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let phones = sqlx::query_as::<_, ChainPhoneRow>(
            r#"
                SELECT id AS phone_id, phone_number, description
                FROM chain_phone_numbers
                WHERE chain_id = $1
                ORDER BY id
            "#,
        )
        .bind(chain_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let emails = sqlx::query_as::<_, ChainEmailRow>(
            r#"
                SELECT id AS email_id, email_address, description
                FROM chain_email_addresses
                WHERE chain_id = $1
                ORDER BY id
            "#,
        )
        .bind(chain_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(ChainContacts {
            offices: offices.into_iter().map(Into::into).collect(),
            phones: phones.into_iter().map(Into::into).collect(),
            emails: emails.into_iter().map(Into::into).collect(),
        })
    }

    async fn delete_office(&self, office_id: OfficeId) -> AppResult<MutationOutcome> {
        let res = sqlx::query("DELETE FROM chain_offices WHERE id = $1")
            .bind(office_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(MutationOutcome::from_rows_affected(res.rows_affected()))
    }

    async fn delete_phone(&self, phone_id: PhoneId) -> AppResult<MutationOutcome> {
        let res = sqlx::query("DELETE FROM chain_phone_numbers WHERE id = $1")
            .bind(phone_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(MutationOutcome::from_rows_affected(res.rows_affected()))
    }

    async fn delete_email(&self, email_id: EmailId) -> AppResult<MutationOutcome> {
        let res = sqlx::query("DELETE FROM chain_email_addresses WHERE id = $1")
            .bind(email_id)
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

    #[sqlx::test(migrations = "../migrations")]
    async fn delete_chain_with_hotels_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seed = fixtures::chain_with_room(&pool).await?;
        let repo = ChainRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let err = repo
            .delete(DeleteChain::new(ChainId::new(seed.chain_id)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ReferentialIntegrityConflict(_)));

        // the rollback left the chain in place
        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chains")
            .fetch_one(&pool)
            .await?;
        assert_eq!(remaining, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn deleting_twice_is_a_silent_noop(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let chain_id: i64 = sqlx::query_scalar(
            "INSERT INTO chains (chain_name) VALUES ('Empty Chain') RETURNING chain_id",
        )
        .fetch_one(&pool)
        .await?;
        let repo = ChainRepositoryImpl::new(ConnectionPool::new(pool));

        let event = || DeleteChain::new(ChainId::new(chain_id));
        assert_eq!(repo.delete(event()).await?, MutationOutcome::Applied);
        assert_eq!(repo.delete(event()).await?, MutationOutcome::NoOp);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn renaming_to_a_taken_name_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let first: i64 = sqlx::query_scalar(
            "INSERT INTO chains (chain_name) VALUES ('Alpha') RETURNING chain_id",
        )
        .fetch_one(&pool)
        .await?;
        sqlx::query("INSERT INTO chains (chain_name) VALUES ('Beta')")
            .execute(&pool)
            .await?;
        let repo = ChainRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .update_name(UpdateChainName::new(ChainId::new(first), "Beta".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UniqueConstraintViolation(_)));
        Ok(())
    }
}
