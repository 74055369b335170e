pub mod foods;
pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/insert", post(foods::insert_food))
        .route("/read", get(foods::read_foods))
        .route("/update", put(foods::update_food_by_body))
        .route("/update/{id}", put(foods::update_food))
        .route("/delete/{id}", delete(foods::delete_food))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
