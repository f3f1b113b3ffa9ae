//! Building blocks of a page

use serde::{Deserialize, Serialize};

use crate::viewmodel::{SectionConfig, Tagged};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Showcase item of a project grid, tagged with the entities involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub entity_slugs: Vec<String>,
}

impl Tagged for Project {
    fn entity_slugs(&self) -> &[String] {
        &self.entity_slugs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockSpec {
    Hero(Hero),
    FilterBar,
    ProjectGrid(Vec<Project>),
    DynamicSection(SectionConfig),
    Footer,
}

impl BlockSpec {
    /// Blocks that read the entity directory.
    pub fn needs_directory(&self) -> bool {
        matches!(self, BlockSpec::FilterBar | BlockSpec::ProjectGrid(_) | BlockSpec::Footer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    /// Site path, e.g. `/` or `/entities/rbf`.
    pub route: String,
    pub title: String,
    pub blocks: Vec<BlockSpec>,
}

impl PageSpec {
    /// Output file for the route, relative to the site root.
    pub fn output_path(&self) -> String {
        let trimmed = self.route.trim_matches('/');
        if trimmed.is_empty() {
            "index.html".to_string()
        } else {
            format!("{}/index.html", trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let page = |route: &str| PageSpec { route: route.to_string(), title: String::new(), blocks: vec![] };
        assert_eq!(page("/").output_path(), "index.html");
        assert_eq!(page("/entities/rbf").output_path(), "entities/rbf/index.html");
        assert_eq!(page("/projects/").output_path(), "projects/index.html");
    }
}
