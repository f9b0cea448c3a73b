//! User endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::DeleteResponse;
use crate::db::repos::{UserRecord, UserRepo};
use crate::http::error::{ApiError, StorageContext};
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreateUserRequest, DeleteUserRequest, NewUser, UpdateUserRequest};

/// User response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(u: UserRecord) -> Self {
        Self {
            user_id: u.user_id,
            email: u.email,
            password_hash: u.password_hash,
            role: u.role,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}

/// GET /users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await.context("fetch users")?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = NewUser::try_from(req)?;
    let record = UserRepo::new(&state.pool)
        .create(&user)
        .await
        .context("create user")?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(record))))
}

/// PUT /users - merge-patch keyed on `userId`
async fn update_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let (id, patch) = req.into_patch()?;
    let record = UserRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .context("update user")?;

    Ok(Json(UserResponse::from(record)))
}

/// DELETE /users
async fn delete_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DeleteUserRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = req.into_id()?;
    UserRepo::new(&state.pool)
        .delete(id)
        .await
        .context("delete user")?;

    Ok(Json(DeleteResponse::ok()))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users",
        get(list_users)
            .post(create_user)
            .put(update_user)
            .delete(delete_user),
    )
}
