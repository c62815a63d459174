use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::room::{delete_room, search_rooms, show_room, show_room_search_facets};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", get(search_rooms))
        .route("/facets", get(show_room_search_facets))
        .route("/:hotel_id/:room_number", get(show_room))
        .route("/:hotel_id/:room_number", delete(delete_room));

    Router::new().nest("/rooms", room_routers)
}
