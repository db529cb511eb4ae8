//! TaskDeck Client Library
//!
//! Async Rust client for the TaskDeck task-management API. It includes:
//!
//! - In-memory access token storage (never persisted)
//! - A request pipeline that attaches the bearer credential, transparently
//!   refreshes it on 401, and replays the failed request exactly once
//! - A session event bus broadcasting logout to interested listeners
//! - Typed wrappers for the auth, task, category, and user endpoints
//!
//! # Example
//!
//! ```no_run
//! use taskdeck::{ApiClient, ClientConfig, LoginCredentials, SessionEvent};
//!
//! # async fn run() -> Result<(), taskdeck::ApiError> {
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! let mut events = client.subscribe();
//!
//! client
//!     .login(&LoginCredentials {
//!         email: "ada@example.com".into(),
//!         password: "hunter2".into(),
//!     })
//!     .await?;
//!
//! let page = client.list_tasks(&Default::default()).await?;
//! println!("{} tasks", page.pagination.total);
//!
//! // Elsewhere: react to forced logout.
//! if let Ok(SessionEvent::LoggedOut) = events.recv().await {
//!     // drop caches, return to login
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

// Re-exports for convenience
pub use api::ApiClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use session::{SessionEvent, SessionEvents, TokenStore};

// Re-export the wire types
pub use models::{
    ApiMessage, AuthResponse, AvatarUploadResponse, Category, CategoryRef, CategoryResponse,
    ChangePasswordData, CreateCategoryData, CreateTaskData, ForgotPasswordData, LoginCredentials,
    Pagination, Priority, RegisterCredentials, ResetPasswordData, SortOrder, Task, TaskPage,
    TaskQuery, TaskResponse, TaskStats, TaskStatus, UpdateCategoryData, UpdateProfileData,
    UpdateTaskData, User, UserResponse, UserStats, VerifyOtpData,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
