use crate::model::{
    employee::{
        event::{CreateEmployee, UpdateEmployeeProfile},
        Employee, Position,
    },
    id::EmployeeId,
    MutationOutcome,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, event: CreateEmployee) -> AppResult<EmployeeId>;
    async fn find_all(&self) -> AppResult<Vec<Employee>>;
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;
    async fn update_profile(&self, event: UpdateEmployeeProfile) -> AppResult<MutationOutcome>;
    async fn find_positions(&self) -> AppResult<Vec<Position>>;
}
