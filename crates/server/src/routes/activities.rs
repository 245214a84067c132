// crates/server/src/routes/activities.rs
//! Activity endpoints: CRUD plus day filter, completion toggle, daily
//! per-category totals and coaching suggestions.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use daytrack_core::{
    Activity, ActivityInput, ActivityPatch, CategoryTotal, CompletionState, DayError,
    SuggestionRow,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Query parameters for GET /api/activities/by-date.
#[derive(Debug, Default, Deserialize)]
pub struct ByDateQuery {
    pub date: Option<String>,
    /// Category id. Kept as text so a malformed value maps to our own 400.
    pub category: Option<String>,
}

impl ByDateQuery {
    /// Blank means "no narrowing".
    fn category_id(&self) -> ApiResult<Option<i64>> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                ApiError::BadRequest(format!("Invalid 'category' parameter: {raw}"))
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionsQuery {
    pub date: Option<String>,
}

/// Response for GET /api/activities/ai_suggestions.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct SuggestionsResponse {
    pub date: String,
    /// Qualifying activities, including any left out of the prompt.
    pub count: usize,
    pub suggestions: String,
}

/// GET /api/activities
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Activity>>> {
    Ok(Json(state.db.list_activities().await?))
}

/// POST /api/activities
pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<ActivityInput>,
) -> ApiResult<(StatusCode, Json<Activity>)> {
    let draft = input.validate()?;
    let activity = state.db.create_activity(&draft).await?;
    tracing::info!(id = activity.id, category = activity.category, "Activity created");
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/activities/{id}
pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Activity>> {
    state
        .db
        .get_activity(id)
        .await?
        .map(Json)
        .ok_or(ApiError::activity_not_found(id))
}

/// PUT /api/activities/{id}
pub async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<ActivityInput>,
) -> ApiResult<Json<Activity>> {
    if state.db.get_activity(id).await?.is_none() {
        return Err(ApiError::activity_not_found(id));
    }
    let draft = input.validate()?;
    state
        .db
        .update_activity(id, &draft)
        .await?
        .map(Json)
        .ok_or(ApiError::activity_not_found(id))
}

/// PATCH /api/activities/{id}
pub async fn patch_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(patch): ApiJson<ActivityPatch>,
) -> ApiResult<Json<Activity>> {
    let current = state
        .db
        .get_activity(id)
        .await?
        .ok_or(ApiError::activity_not_found(id))?;
    let draft = patch.apply(&current)?;
    state
        .db
        .update_activity(id, &draft)
        .await?
        .map(Json)
        .ok_or(ApiError::activity_not_found(id))
}

/// DELETE /api/activities/{id}
pub async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !state.db.delete_activity(id).await? {
        return Err(ApiError::activity_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/activities/by-date?date=YYYY-MM-DD[&category=ID]
///
/// Both parameters are checked before the store is queried.
pub async fn activities_by_date(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ByDateQuery>,
) -> ApiResult<Json<Vec<Activity>>> {
    let day = state.day(query.date.as_deref())?;
    let category_id = query.category_id()?;
    Ok(Json(state.db.activities_for_day(&day, category_id).await?))
}

/// POST /api/activities/{id}/toggle-complete
pub async fn toggle_complete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CompletionState>> {
    let toggled = state
        .db
        .toggle_activity_complete(id)
        .await?
        .ok_or(ApiError::activity_not_found(id))?;
    tracing::debug!(id, completed = toggled.completed, "Activity toggled");
    Ok(Json(toggled))
}

/// GET /api/activities/stats-today
pub async fn stats_today(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryTotal>>> {
    let today = state.today()?;
    Ok(Json(state.db.category_totals(&today).await?))
}

/// GET /api/activities/ai_suggestions[?date=YYYY-MM-DD]
///
/// A missing or blank `date` means today. One upstream call, no retry.
pub async fn ai_suggestions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestionsQuery>,
) -> ApiResult<Json<SuggestionsResponse>> {
    let day = match state.day(query.date.as_deref()) {
        Err(DayError::Missing) => state.today()?,
        other => other?,
    };
    let date = day.iso_date();

    let activities = state.db.activities_for_suggestions(&day).await?;
    let rows: Vec<SuggestionRow> = activities.iter().map(SuggestionRow::from).collect();
    let suggestions = state.suggestions.suggest(&date, &rows).await?;

    Ok(Json(SuggestionsResponse {
        date,
        count: rows.len(),
        suggestions,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route("/activities/by-date", get(activities_by_date))
        .route("/activities/stats-today", get(stats_today))
        .route("/activities/ai_suggestions", get(ai_suggestions))
        .route(
            "/activities/{id}",
            get(get_activity)
                .put(update_activity)
                .patch(patch_activity)
                .delete(delete_activity),
        )
        .route("/activities/{id}/toggle-complete", post(toggle_complete))
}
