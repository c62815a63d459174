use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    booking::show_customer_bookings,
    customer::{register_customer, show_customer, update_customer_profile},
    rental::show_customer_rentals,
};

pub fn build_customer_routers() -> Router<AppRegistry> {
    let customer_routers = Router::new()
        .route("/", post(register_customer))
        .route("/:customer_id", get(show_customer))
        .route("/:customer_id", put(update_customer_profile))
        .route("/:customer_id/bookings", get(show_customer_bookings))
        .route("/:customer_id/rentals", get(show_customer_rentals));

    Router::new().nest("/customers", customer_routers)
}
