pub mod handlers;
pub mod socket;
pub mod types;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;

/// Every HTTP and websocket route the tracker serves
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .route("/stats/reset", post(handlers::reset_stats))
        .route("/items", get(handlers::get_items))
        .route("/items/all", get(handlers::get_all_items))
        .route("/items/export", get(handlers::export_items))
        .route("/items/:index/name", put(handlers::rename_item))
        .route("/settings/show-all", put(handlers::set_show_all))
        .route("/settings/items-per-page", put(handlers::set_items_per_page))
        .route("/filters", get(handlers::get_filters))
        .route("/filters/toggle", post(handlers::toggle_filters))
        .route(
            "/profiles",
            get(handlers::list_profiles).post(handlers::create_profile),
        )
        .route("/profiles/current", put(handlers::switch_profile))
        .route("/profiles/:name", delete(handlers::delete_profile))
        .route("/events", get(handlers::events_ws))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
