//! Serializable render context handed to the templates

use serde::Serialize;

use crate::page::{Hero, Project};
use crate::viewmodel::Card;

#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub site_name: String,
    pub title: String,
    pub route: String,
    pub blocks: Vec<BlockContext>,
}

/// One key per variant (`hero`, `filterBar`, ...), matched by `#with` in the page template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockContext {
    Hero(Hero),
    FilterBar {
        options: Vec<FilterOptionContext>,
    },
    ProjectGrid {
        active_filter: String,
        projects: Vec<Project>,
    },
    DynamicSection {
        entity_slug: String,
        kind: String,
        title: String,
        subtitle: Option<String>,
        cards: Vec<Card>,
    },
    Footer {
        year: i32,
        entities: Vec<FooterLink>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptionContext {
    pub id: String,
    pub label: String,
    pub color: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    pub color: String,
}
