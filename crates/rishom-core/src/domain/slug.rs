//! Entity slugs (lowercased entity codes)

use regex::Regex;
use std::sync::LazyLock;

use rishom_shared::constants::MAX_SLUG_LENGTH;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9'\-]+$").expect("slug pattern is valid"));

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() as u64 <= MAX_SLUG_LENGTH && SLUG_PATTERN.is_match(slug)
}

/// Slug for an entity code: trimmed and lowercased.
pub fn slug_for_code(code: &str) -> String {
    code.trim().to_lowercase()
}
