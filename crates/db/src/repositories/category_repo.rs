//! Repository for the `categories` table.

use sqlx::PgPool;
use tracker_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

/// Provides creation and lookup of issue categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category. A duplicate name fails with the `uq_categories_name`
    /// unique violation.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Hard-delete a category. Issues filed under it cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
