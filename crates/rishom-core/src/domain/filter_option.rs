//! Filter options shown above project grids

use serde::Serialize;

use rishom_shared::constants::{DEFAULT_BRAND_COLOR, FILTER_ALL_ID, FILTER_ALL_LABEL};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub color: String,
}

impl FilterOption {
    /// The "no filter" sentinel.
    pub fn all() -> Self {
        Self {
            id: FILTER_ALL_ID.to_string(),
            label: FILTER_ALL_LABEL.to_string(),
            color: DEFAULT_BRAND_COLOR.to_string(),
        }
    }

    pub fn for_entity(entity: &Entity) -> Self {
        Self {
            id: entity.slug(),
            label: entity.short_name.clone(),
            color: entity.color_or_default().to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == FILTER_ALL_ID
    }
}
