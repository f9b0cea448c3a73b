//! Review endpoints. Reviews carry no `updatedAt`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::DeleteResponse;
use crate::db::repos::{ReviewRecord, ReviewRepo};
use crate::http::error::{ApiError, StorageContext};
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreateReviewRequest, DeleteReviewRequest, NewReview, UpdateReviewRequest};

/// Review response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub comment: String,
    pub created_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(r: ReviewRecord) -> Self {
        Self {
            review_id: r.review_id,
            property_id: r.property_id,
            user_id: r.user_id,
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// GET /reviews
async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    let reviews = ReviewRepo::new(&state.pool)
        .list()
        .await
        .context("fetch reviews")?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// POST /reviews
async fn create_review(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let review = NewReview::try_from(req)?;
    let record = ReviewRepo::new(&state.pool)
        .create(&review)
        .await
        .context("create review")?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(record))))
}

/// PUT /reviews - merge-patch keyed on `reviewId`
async fn update_review(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let (id, patch) = req.into_patch()?;
    let record = ReviewRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .context("update review")?;

    Ok(Json(ReviewResponse::from(record)))
}

/// DELETE /reviews
async fn delete_review(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DeleteReviewRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = req.into_id()?;
    ReviewRepo::new(&state.pool)
        .delete(id)
        .await
        .context("delete review")?;

    Ok(Json(DeleteResponse::ok()))
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/reviews",
        get(list_reviews)
            .post(create_review)
            .put(update_review)
            .delete(delete_review),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::send;
    use axum::http::Method;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn response_has_no_updated_at() {
        let record = ReviewRecord {
            review_id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rating: 4.5,
            comment: String::new(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(ReviewResponse::from(record)).unwrap();
        assert_eq!(json["rating"], 4.5);
        assert_eq!(json["comment"], "");
        assert!(json.get("updatedAt").is_none());
    }

    #[tokio::test]
    async fn create_requires_rating() {
        let body = json!({
            "propertyId": Uuid::new_v4().to_string(),
            "userId": Uuid::new_v4().to_string()
        })
        .to_string();

        let (status, response) = send(Method::POST, "/reviews", Some(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["details"], "rating");
    }

    #[tokio::test]
    async fn update_requires_review_id() {
        let (status, response) = send(Method::PUT, "/reviews", Some(r#"{"rating":5}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "error": "Missing reviewId" }));
    }

    #[tokio::test]
    async fn delete_reaches_storage_with_valid_id() {
        let body = json!({ "reviewId": Uuid::new_v4().to_string() }).to_string();
        let (status, response) = send(Method::DELETE, "/reviews", Some(&body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"], "Failed to delete review");
    }
}
