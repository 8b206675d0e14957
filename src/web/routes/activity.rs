use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::ActivityRegistry;
use crate::services::activities_service::{self, SignupError};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let status = match &self {
            SignupError::NotFound { .. } => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<SignupResponse>, SignupError> {
    let confirmation =
        activities_service::signup_for_activity(&registry, &activity_name, &query.email)?;
    Ok(Json(SignupResponse {
        message: confirmation.message(),
    }))
}
