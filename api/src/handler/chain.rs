use crate::model::{
    chain::{ChainContactsResponse, ChainResponse, ChainsResponse, UpdateChainNameRequest},
    StatusMessage,
};
use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::{
    chain::event::{DeleteChain, UpdateChainName},
    id::{ChainId, EmailId, OfficeId, PhoneId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_chain_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ChainsResponse>> {
    registry
        .chain_repository()
        .find_all()
        .await
        .map(ChainsResponse::from)
        .map(Json)
}

pub async fn show_chain(
    Path(chain_id): Path<ChainId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ChainResponse>> {
    registry
        .chain_repository()
        .find_by_id(chain_id)
        .await
        .and_then(|chain| match chain {
            Some(chain) => Ok(Json(chain.into())),
            None => Err(AppError::EntityNotFound("the chain was not found".into())),
        })
}

pub async fn update_chain_name(
    Path(chain_id): Path<ChainId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateChainNameRequest>,
) -> AppResult<Json<StatusMessage>> {
    req.validate()?;

    let outcome = registry
        .chain_repository()
        .update_name(UpdateChainName::new(chain_id, req.chain_name))
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the chain was renamed",
        "no chain with this id exists",
    )))
}

pub async fn delete_chain(
    Path(chain_id): Path<ChainId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry
        .chain_repository()
        .delete(DeleteChain::new(chain_id))
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the chain was deleted",
        "the chain was already gone",
    )))
}

pub async fn show_chain_contacts(
    Path(chain_id): Path<ChainId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ChainContactsResponse>> {
    registry
        .chain_repository()
        .find_contacts(chain_id)
        .await
        .map(ChainContactsResponse::from)
        .map(Json)
}

pub async fn delete_chain_office(
    Path((_chain_id, office_id)): Path<(ChainId, OfficeId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry.chain_repository().delete_office(office_id).await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the office was deleted",
        "the office was already gone",
    )))
}

pub async fn delete_chain_phone(
    Path((_chain_id, phone_id)): Path<(ChainId, PhoneId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry.chain_repository().delete_phone(phone_id).await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the phone number was deleted",
        "the phone number was already gone",
    )))
}

pub async fn delete_chain_email(
    Path((_chain_id, email_id)): Path<(ChainId, EmailId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry.chain_repository().delete_email(email_id).await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the email address was deleted",
        "the email address was already gone",
    )))
}
