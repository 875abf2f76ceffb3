use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::ActivityDirectory;
use crate::services::activities_service;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    State(directory): State<ActivityDirectory>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query.map_err(rejected_query)?;
    let message = activities_service::signup(&directory, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    State(directory): State<ActivityDirectory>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query.map_err(rejected_query)?;
    let message = activities_service::unregister(&directory, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

fn rejected_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}
