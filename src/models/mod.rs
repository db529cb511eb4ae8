//! Wire types for the TaskDeck API.
//!
//! Field names follow the server's JSON conventions: camelCase for resource
//! payloads, snake_case for the auth token fields.

mod auth;
mod task;
mod user;

pub use auth::{
    AuthResponse, ForgotPasswordData, LoginCredentials, RegisterCredentials, ResetPasswordData,
    User, VerifyOtpData,
};
pub use task::{
    Category, CategoryRef, CategoryResponse, CreateCategoryData, CreateTaskData, Pagination,
    Priority, SortOrder, Task, TaskPage, TaskQuery, TaskResponse, TaskStats, TaskStatus,
    UpdateCategoryData, UpdateTaskData,
};
pub use user::{
    AvatarUploadResponse, ChangePasswordData, UpdateProfileData, UserResponse, UserStats,
};

use serde::Deserialize;

/// Generic `{ message }` acknowledgement returned by several endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
