//! Issue category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::types::DbId;

/// A row from the `categories` table. Displayed by its name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// Categories created by the seed migration, in insertion order.
pub const SEED_CATEGORIES: &[&str] = &["documentation", "feature", "improvement", "bug"];
