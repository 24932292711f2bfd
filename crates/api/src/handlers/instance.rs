use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::{debug, instrument};

use crate::{
    dto::{ActivityResponse, InstanceV1Response, InstanceV2Response, LanguageResponse},
    errors::ApiError,
    state::AppState,
};

fn request_host(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
}

#[instrument(skip_all, name = "api_get_instance_v1")]
pub async fn get_instance_v1(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InstanceV1Response>, ApiError> {
    let stats = state.get_stats.execute().await?;
    let uri = request_host(&headers)
        .map(str::to_string)
        .unwrap_or_else(|| state.instance.main_domain.clone());

    debug!(uri = %uri, users = stats.user_count, "Instance v1 document built");
    Ok(Json(InstanceV1Response::new(uri, &state.instance, stats)))
}

#[instrument(skip_all, name = "api_get_instance_v2")]
pub async fn get_instance_v2(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InstanceV2Response>, ApiError> {
    let description = state
        .describe_instance
        .execute(request_host(&headers))
        .await?;

    debug!(domain = %description.domain.domain, "Instance v2 document built");
    Ok(Json(InstanceV2Response::new(description, &state.instance)))
}

#[instrument(skip_all, name = "api_get_peers")]
pub async fn get_peers(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let peers = state.get_peers.execute().await?;
    debug!(count = peers.len(), "Peers retrieved");
    Ok(Json(peers))
}

#[instrument(skip_all, name = "api_get_activity")]
pub async fn get_activity(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let activity = state.get_activity.execute().await?;
    Ok(Json(activity.into_iter().map(ActivityResponse::from).collect()))
}

pub async fn get_languages(State(state): State<AppState>) -> Json<Vec<LanguageResponse>> {
    Json(
        state
            .get_languages
            .execute()
            .iter()
            .map(LanguageResponse::from)
            .collect(),
    )
}
