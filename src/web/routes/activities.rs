use axum::{extract::State, Json};

use crate::database::{ActivityDirectory, ActivityMap};
use crate::services::activities_service;

pub async fn activities_handler(State(directory): State<ActivityDirectory>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&directory).await)
}
