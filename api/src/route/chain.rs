use axum::{
    routing::{delete, get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::chain::{
    delete_chain, delete_chain_email, delete_chain_office, delete_chain_phone, show_chain,
    show_chain_contacts, show_chain_list, update_chain_name,
};

pub fn build_chain_routers() -> Router<AppRegistry> {
    let chain_routers = Router::new()
        .route("/", get(show_chain_list))
        .route("/:chain_id", get(show_chain))
        .route("/:chain_id", put(update_chain_name))
        .route("/:chain_id", delete(delete_chain))
        .route("/:chain_id/contacts", get(show_chain_contacts))
        .route("/:chain_id/offices/:office_id", delete(delete_chain_office))
        .route("/:chain_id/phones/:phone_id", delete(delete_chain_phone))
        .route("/:chain_id/emails/:email_id", delete(delete_chain_email));

    Router::new().nest("/chains", chain_routers)
}
