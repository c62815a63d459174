use crate::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomerProfile},
        Customer,
    },
    id::CustomerId,
    MutationOutcome,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId>;
    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>>;
    async fn update_profile(&self, event: UpdateCustomerProfile) -> AppResult<MutationOutcome>;
}
