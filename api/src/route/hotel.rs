use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::hotel::{delete_hotel, show_hotel, show_hotel_list};

pub fn build_hotel_routers() -> Router<AppRegistry> {
    let hotel_routers = Router::new()
        .route("/", get(show_hotel_list))
        .route("/:hotel_id", get(show_hotel))
        .route("/:hotel_id", delete(delete_hotel));

    Router::new().nest("/hotels", hotel_routers)
}
