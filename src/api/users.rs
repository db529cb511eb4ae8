//! Profile and account management.

use reqwest::Method;

use crate::error::ApiError;
use crate::models::{
    ApiMessage, AvatarUploadResponse, ChangePasswordData, UpdateProfileData, UserResponse,
    UserStats,
};

use super::{ApiClient, Body};

impl ApiClient {
    /// `PATCH /users/profile`.
    pub async fn update_profile(&self, data: &UpdateProfileData) -> Result<UserResponse, ApiError> {
        self.patch("/users/profile", data).await
    }

    /// `POST /users/change-password`.
    pub async fn change_password(&self, data: &ChangePasswordData) -> Result<ApiMessage, ApiError> {
        self.post("/users/change-password", data).await
    }

    /// `GET /users/stats`.
    pub async fn user_stats(&self) -> Result<UserStats, ApiError> {
        self.get_path("/users/stats").await
    }

    /// `POST /users/avatar` as multipart with the image under the `avatar`
    /// field. The body is rebuilt from the owned bytes if the pipeline has
    /// to replay the upload after a refresh.
    pub async fn upload_avatar(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<AvatarUploadResponse, ApiError> {
        let url = self.endpoint("/users/avatar")?;
        let body = Body::Multipart {
            field: "avatar",
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        };
        self.request(Method::POST, url, body).await
    }

    /// `DELETE /users/avatar`.
    pub async fn remove_avatar(&self) -> Result<ApiMessage, ApiError> {
        self.delete_path("/users/avatar").await
    }

    /// `DELETE /users/account`.
    pub async fn delete_account(&self) -> Result<ApiMessage, ApiError> {
        self.delete_path("/users/account").await
    }
}
