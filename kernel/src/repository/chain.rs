use crate::model::{
    chain::{
        event::{DeleteChain, UpdateChainName},
        Chain, ChainContacts,
    },
    id::{ChainId, EmailId, OfficeId, PhoneId},
    MutationOutcome,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ChainRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Chain>>;
    async fn find_by_id(&self, chain_id: ChainId) -> AppResult<Option<Chain>>;
    async fn update_name(&self, event: UpdateChainName) -> AppResult<MutationOutcome>;
    /// Fails with a referential-integrity conflict while dependent hotels exist.
    async fn delete(&self, event: DeleteChain) -> AppResult<MutationOutcome>;
    async fn find_contacts(&self, chain_id: ChainId) -> AppResult<ChainContacts>;
    async fn delete_office(&self, office_id: OfficeId) -> AppResult<MutationOutcome>;
    async fn delete_phone(&self, phone_id: PhoneId) -> AppResult<MutationOutcome>;
    async fn delete_email(&self, email_id: EmailId) -> AppResult<MutationOutcome>;
}
