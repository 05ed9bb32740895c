use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::products_api::use_cases::manage_products::inbound::http as products_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(products_http::list).post(products_http::create),
        )
        .route(
            "/products/{id}",
            get(products_http::get)
                .put(products_http::update)
                .delete(products_http::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
