use super::{
    booking::build_booking_routers, chain::build_chain_routers,
    customer::build_customer_routers, employee::build_employee_routers,
    health::build_health_check_routers, hotel::build_hotel_routers,
    rental::build_rental_routers, room::build_room_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_chain_routers())
        .merge(build_hotel_routers())
        .merge(build_room_routers())
        .merge(build_customer_routers())
        .merge(build_employee_routers())
        .merge(build_booking_routers())
        .merge(build_rental_routers());
    Router::new().nest("/api/v1", router)
}
