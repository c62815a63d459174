use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::employee::{
    register_employee, show_employee, show_employee_list, show_position_list,
    update_employee_profile,
};

pub fn build_employee_routers() -> Router<AppRegistry> {
    let employee_routers = Router::new()
        .route("/", post(register_employee))
        .route("/", get(show_employee_list))
        .route("/:employee_id", get(show_employee))
        .route("/:employee_id", put(update_employee_profile));

    Router::new()
        .nest("/employees", employee_routers)
        .route("/positions", get(show_position_list))
}
