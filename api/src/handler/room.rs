use crate::model::{
    room::{RoomResponse, RoomSearchFacetsResponse, RoomSearchQuery, RoomsResponse},
    StatusMessage,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use kernel::model::{
    booking::DateRange,
    id::HotelId,
    room::event::DeleteRoom,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// One endpoint serves both search modes: a complete date pair switches
/// to availability, otherwise the attribute filters apply. A lone date
/// is a user mistake and is reported as such.
pub async fn search_rooms(
    Query(query): Query<RoomSearchQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    let rooms = match availability_period(
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )? {
        Some(period) => registry.room_repository().find_available(period).await?,
        None => registry.room_repository().search(query.into()).await?,
    };
    Ok(Json(RoomsResponse::from(rooms)))
}

pub async fn show_room_search_facets(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomSearchFacetsResponse>> {
    registry
        .room_repository()
        .search_facets()
        .await
        .map(RoomSearchFacetsResponse::from)
        .map(Json)
}

pub async fn show_room(
    Path((hotel_id, room_number)): Path<(HotelId, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_key(hotel_id, &room_number)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("the room was not found".into())),
        })
}

pub async fn delete_room(
    Path((hotel_id, room_number)): Path<(HotelId, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry
        .room_repository()
        .delete(DeleteRoom::new(hotel_id, room_number))
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the room was deleted",
        "the room was already gone",
    )))
}

/// Decides the search mode from the raw date fields before any query
/// runs: both submitted ⇒ a validated stay period, neither ⇒ attribute
/// search, exactly one ⇒ rejected. Blank fields count as absent.
fn availability_period(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> AppResult<Option<DateRange>> {
    let start = submitted(start_date);
    let end = submitted(end_date);

    match (start, end) {
        (Some(start), Some(end)) => {
            DateRange::new(parse_date(start)?, parse_date(end)?).map(Some)
        }
        (None, None) => Ok(None),
        _ => Err(AppError::UnprocessableEntity(
            "both a check-in and a check-out date are required".into(),
        )),
    }
}

fn submitted(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    value
        .parse()
        .map_err(|_| AppError::UnprocessableEntity(format!("not a valid date: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_dates_means_attribute_search() {
        assert!(availability_period(None, None).unwrap().is_none());
        // blank submissions behave like absent fields
        assert!(availability_period(Some(""), Some("   ")).unwrap().is_none());
    }

    #[test]
    fn a_complete_pair_becomes_a_stay_period() {
        let period = availability_period(Some("2024-06-01"), Some("2024-06-05"))
            .unwrap()
            .unwrap();
        assert_eq!(period.start_date(), "2024-06-01".parse().unwrap());
        assert_eq!(period.end_date(), "2024-06-05".parse().unwrap());
    }

    #[test]
    fn a_lone_date_is_rejected() {
        let err = availability_period(Some("2024-06-01"), None).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        let err = availability_period(None, Some("2024-06-05")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        // a blank partner does not rescue the pair
        let err = availability_period(Some("2024-06-01"), Some(" ")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn unparsable_dates_are_rejected() {
        let err = availability_period(Some("June 1st"), Some("2024-06-05")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        let err = availability_period(Some("2024-06-01"), Some("05/06/2024")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn inverted_and_empty_ranges_are_rejected() {
        let err = availability_period(Some("2024-06-07"), Some("2024-06-03")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        let err = availability_period(Some("2024-06-05"), Some("2024-06-05")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
