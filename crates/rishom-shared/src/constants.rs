//! Application-wide constants

/// Code of the holding company; never offered as a filter.
pub const GROUP_ENTITY_CODE: &str = "GROUPE";
pub const FILTER_ALL_ID: &str = "all";
pub const FILTER_ALL_LABEL: &str = "Tous les projets";
pub const DEFAULT_BRAND_COLOR: &str = "#0B3D91";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const MAX_SLUG_LENGTH: u64 = 32;
