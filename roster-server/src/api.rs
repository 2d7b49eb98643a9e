use std::sync::Arc;

use axum::{extract::State, Json};
use roster_core::models::User;
use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, ServerResult};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    username: String,
}

#[derive(Serialize)]
pub struct ListUsersResponse {
    users: Vec<User>,
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> ServerResult<Json<User>> {
    let user = state.db.create_user(&req.username).await.map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            ApiError::conflict(format!("username already taken: {}", req.username))
        } else {
            tracing::error!(%e, "Failed to create user");
            ApiError::unavailable("Storage unavailable")
        }
    })?;

    Ok(Json(user))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> ServerResult<Json<ListUsersResponse>> {
    let users = state.db.list_users().await.map_err(|e| {
        tracing::error!(%e, "Failed to list users");
        ApiError::unavailable("Storage unavailable")
    })?;

    Ok(Json(ListUsersResponse { users }))
}
