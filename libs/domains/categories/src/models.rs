use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

/// Regex pattern for hex color codes like `#3B82F6`
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Custom validator for category colors
fn validate_hex_color(color: &str) -> Result<(), validator::ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(validator::ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

/// Category entity - a label for organizing tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier
    pub id: i32,
    /// Category name (unique across all categories)
    pub name: String,
    /// Optional hex color code for UI display (e.g., #FF5733)
    pub color: Option<String>,
}

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

/// Response for listing categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    /// Categories ordered by name ascending
    pub categories: Vec<Category>,
    /// Total number of categories
    pub total: u64,
}
