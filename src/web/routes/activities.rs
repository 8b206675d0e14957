use std::sync::Arc;

use axum::{extract::State, Json};
use indexmap::IndexMap;

use crate::database::ActivityRegistry;
use crate::models::Activity;
use crate::services::activities_service;

pub async fn activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&registry))
}
