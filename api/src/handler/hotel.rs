use crate::model::{
    hotel::{HotelResponse, HotelsResponse},
    StatusMessage,
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::{hotel::event::DeleteHotel, id::HotelId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_hotel_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelsResponse>> {
    registry
        .hotel_repository()
        .find_all()
        .await
        .map(HotelsResponse::from)
        .map(Json)
}

pub async fn show_hotel(
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelResponse>> {
    registry
        .hotel_repository()
        .find_by_id(hotel_id)
        .await
        .and_then(|hotel| match hotel {
            Some(hotel) => Ok(Json(hotel.into())),
            None => Err(AppError::EntityNotFound("the hotel was not found".into())),
        })
}

pub async fn delete_hotel(
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry
        .hotel_repository()
        .delete(DeleteHotel::new(hotel_id))
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the hotel was deleted",
        "the hotel was already gone",
    )))
}
