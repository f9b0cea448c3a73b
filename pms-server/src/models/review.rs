//! Review input. Ratings are not range-checked.

use serde::Deserialize;
use uuid::Uuid;

use super::fields::{require_id, RequiredFields};
use super::ValidationError;

/// POST /reviews body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub property_id: Option<String>,
    pub user_id: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

/// PUT /reviews body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub review_id: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

/// DELETE /reviews body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReviewRequest {
    pub review_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPatch {
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

impl TryFrom<CreateReviewRequest> for NewReview {
    type Error = ValidationError;

    fn try_from(req: CreateReviewRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::new();
        let property_id = required.id("propertyId", req.property_id)?;
        let user_id = required.id("userId", req.user_id)?;
        let rating = required.value("rating", req.rating);
        required.finish()?;

        Ok(Self {
            property_id,
            user_id,
            rating,
            comment: req.comment.unwrap_or_default(),
        })
    }
}

impl UpdateReviewRequest {
    pub fn into_patch(self) -> Result<(Uuid, ReviewPatch), ValidationError> {
        let id = require_id("reviewId", self.review_id)?;
        Ok((
            id,
            ReviewPatch {
                rating: self.rating,
                comment: self.comment,
            },
        ))
    }
}

impl DeleteReviewRequest {
    pub fn into_id(self) -> Result<Uuid, ValidationError> {
        require_id("reviewId", self.review_id)
    }
}
