//! Products and services offered by an entity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[default]
    Product,
    Service,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Product => "product",
            CatalogKind::Service => "service",
        }
    }

    /// Path segment under `/api/entities/{slug}/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            CatalogKind::Product => "products",
            CatalogKind::Service => "services",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product" | "products" => Ok(CatalogKind::Product),
            "service" | "services" => Ok(CatalogKind::Service),
            other => Err(format!("unknown catalog kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: Uuid,
    pub entity_code: String,
    pub kind: CatalogKind,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("products".parse::<CatalogKind>().unwrap(), CatalogKind::Product);
        assert_eq!("Service".parse::<CatalogKind>().unwrap(), CatalogKind::Service);
        assert!("jobs".parse::<CatalogKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&CatalogKind::Service).unwrap();
        assert_eq!(json, "\"service\"");
    }
}
