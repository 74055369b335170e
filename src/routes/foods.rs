use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::food::{Food, InsertFoodRequest, UpdateFoodRequest},
    AppState,
};

/// An id that is not a UUID can never match an entry.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

pub async fn insert_food(
    State(state): State<AppState>,
    body: Result<Json<InsertFoodRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let food = body.validate()?;

    let saved = state
        .store
        .insert(food)
        .await
        .map_err(AppError::store("Error inserting food item"))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Food item inserted", "item": saved })),
    ))
}

pub async fn read_foods(State(state): State<AppState>) -> Result<Json<Vec<Food>>, AppError> {
    state
        .store
        .find_all()
        .await
        .map(Json)
        .map_err(AppError::store("Error reading food items"))
}

/// `PUT /update/{id}`
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateFoodRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body?;
    apply_update(&state, Some(id), body).await
}

/// `PUT /update`, with the id carried in the body.
pub async fn update_food_by_body(
    State(state): State<AppState>,
    body: Result<Json<UpdateFoodRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body?;
    let id = body.id.clone();
    apply_update(&state, id, body).await
}

async fn apply_update(
    state: &AppState,
    id: Option<String>,
    body: UpdateFoodRequest,
) -> Result<Json<Value>, AppError> {
    let changes = body.into_changes()?;
    let id = parse_id(id.as_deref().ok_or(AppError::NotFound)?)?;

    let updated = state
        .store
        .find_by_id_and_update(id, changes)
        .await
        .map_err(AppError::store("Error updating food item"))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "message": "Food item updated", "item": updated })))
}

pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;

    let removed = state
        .store
        .find_by_id_and_delete(id)
        .await
        .map_err(AppError::store("Error deleting food item"))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "message": "Food item deleted", "item": removed })))
}
