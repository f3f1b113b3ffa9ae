// ============================================================================
// Rishom Core - Entity
// File: crates/rishom-core/src/domain/entity.rs
// Description: Business unit of the group
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rishom_shared::constants::{DEFAULT_BRAND_COLOR, GROUP_ENTITY_CODE};

use super::slug::slug_for_code;

/// Business unit ("entity") as served by `GET /api/entities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: Uuid,

    #[validate(length(min = 1, max = 16, message = "Code must be between 1 and 16 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 100, message = "Short name must be between 1 and 100 characters"))]
    pub short_name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Name too long"))]
    pub name: Option<String>,

    #[serde(default)]
    pub color_primary: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,

    #[serde(default)]
    pub website_url: Option<String>,

    #[serde(default)]
    pub display_order: i32,
}

impl Entity {
    pub fn new(code: String, short_name: String) -> Result<Self, validator::ValidationErrors> {
        let entity = Self {
            id: Uuid::new_v4(),
            code: code.trim().to_uppercase(),
            short_name: short_name.trim().to_string(),
            name: None,
            color_primary: None,
            description: None,
            website_url: None,
            display_order: 0,
        };

        entity.validate()?;
        Ok(entity)
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color_primary = Some(color.to_string());
        self
    }

    pub fn slug(&self) -> String {
        slug_for_code(&self.code)
    }

    /// The holding company itself, which is not a filterable business unit.
    pub fn is_group(&self) -> bool {
        self.code.trim().eq_ignore_ascii_case(GROUP_ENTITY_CODE)
    }

    pub fn color_or_default(&self) -> &str {
        match self.color_primary.as_deref() {
            Some(color) if !color.trim().is_empty() => color,
            _ => DEFAULT_BRAND_COLOR,
        }
    }
}
