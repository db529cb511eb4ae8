//! Category CRUD.

use crate::error::ApiError;
use crate::models::{
    ApiMessage, Category, CategoryResponse, CreateCategoryData, UpdateCategoryData,
};

use super::ApiClient;

impl ApiClient {
    /// `POST /categories`.
    pub async fn create_category(
        &self,
        data: &CreateCategoryData,
    ) -> Result<CategoryResponse, ApiError> {
        self.post("/categories", data).await
    }

    /// `GET /categories`.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_path("/categories").await
    }

    /// `PATCH /categories/{id}`.
    pub async fn update_category(
        &self,
        category_id: &str,
        data: &UpdateCategoryData,
    ) -> Result<CategoryResponse, ApiError> {
        self.patch(&format!("/categories/{category_id}"), data).await
    }

    /// `DELETE /categories/{id}`.
    pub async fn delete_category(&self, category_id: &str) -> Result<ApiMessage, ApiError> {
        self.delete_path(&format!("/categories/{category_id}")).await
    }
}
