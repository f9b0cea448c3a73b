//! Domain input models with validation at construction
//!
//! Request bodies deserialize leniently (every field optional) and are then
//! converted into validated types. Invalid input returns ValidationError,
//! not panic.

pub mod fields;
pub mod lease;
pub mod maintenance_request;
pub mod property;
pub mod review;
pub mod role;
pub mod status;
pub mod user;
pub mod validation;

pub use lease::{CreateLeaseRequest, DeleteLeaseRequest, LeasePatch, NewLease, UpdateLeaseRequest};
pub use maintenance_request::{
    CreateMaintenanceRequest, DeleteMaintenanceRequest, MaintenancePatch, NewMaintenanceRequest,
    UpdateMaintenanceRequest,
};
pub use property::{
    CreatePropertyRequest, DeletePropertyRequest, Location, LocationInput, NewProperty,
    PropertyPatch, UpdatePropertyRequest,
};
pub use review::{CreateReviewRequest, DeleteReviewRequest, NewReview, ReviewPatch, UpdateReviewRequest};
pub use role::Role;
pub use status::MaintenanceStatus;
pub use user::{CreateUserRequest, DeleteUserRequest, NewUser, UpdateUserRequest, UserPatch};
pub use validation::ValidationError;
