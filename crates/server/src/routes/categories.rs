// crates/server/src/routes/categories.rs
//! Category CRUD endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use daytrack_core::{Category, CategoryInput};

use crate::error::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.db.list_categories().await?))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let name = input.validate()?;
    let category = state.db.create_category(&name).await?;
    tracing::info!(id = category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Category>> {
    state
        .db
        .get_category(id)
        .await?
        .map(Json)
        .ok_or(ApiError::category_not_found(id))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<Json<Category>> {
    if state.db.get_category(id).await?.is_none() {
        return Err(ApiError::category_not_found(id));
    }
    let name = input.validate()?;
    state
        .db
        .update_category(id, &name)
        .await?
        .map(Json)
        .ok_or(ApiError::category_not_found(id))
}

/// PATCH /api/categories/{id}
///
/// `name` is the only writable field, so a body without it is a no-op.
pub async fn patch_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<Json<Category>> {
    let current = state
        .db
        .get_category(id)
        .await?
        .ok_or(ApiError::category_not_found(id))?;
    if input.name.is_none() {
        return Ok(Json(current));
    }
    let name = input.validate()?;
    state
        .db
        .update_category(id, &name)
        .await?
        .map(Json)
        .ok_or(ApiError::category_not_found(id))
}

/// DELETE /api/categories/{id}
///
/// Removes the category's activities along with it.
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !state.db.delete_category(id).await? {
        return Err(ApiError::category_not_found(id));
    }
    tracing::info!(id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .patch(patch_category)
                .delete(delete_category),
        )
}
