use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::rental::{check_in_booking, register_direct_rental};

pub fn build_rental_routers() -> Router<AppRegistry> {
    let rental_routers = Router::new()
        .route("/", post(register_direct_rental))
        .route("/from-booking", post(check_in_booking));

    Router::new().nest("/rentals", rental_routers)
}
