use axum::{
    extract::{Extension, Json, State},
    response::IntoResponse,
};

use crate::{AppState, cache::ApiCounterOperations, error::AppError, models::UserProfile};

use super::model::{HelloResponse, greeting};

/// 问候当前用户并累加接口调用计数
#[axum::debug_handler]
pub async fn hello(
    State(state): State<AppState>,
    Extension(profile): Extension<UserProfile>,
) -> Result<impl IntoResponse, AppError> {
    let message = greeting(Some(&profile));
    let apicounter = ApiCounterOperations::increment(state.store.as_ref()).await?;

    Ok(Json(HelloResponse {
        message,
        user: Some(profile),
        now: chrono::Utc::now(),
        apicounter,
    }))
}
