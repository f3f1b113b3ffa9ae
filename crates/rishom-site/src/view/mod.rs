//! HTML views (handlebars templates)

pub mod context;

use handlebars::Handlebars;

use crate::error::RenderError;

pub use context::{BlockContext, FilterOptionContext, FooterLink, PageContext};

const PAGE_TEMPLATE: &str = "page";

const PARTIALS: &[(&str, &str)] = &[
    ("hero", include_str!("../../templates/hero.hbs")),
    ("filter_bar", include_str!("../../templates/filter_bar.hbs")),
    ("project_grid", include_str!("../../templates/project_grid.hbs")),
    ("dynamic_section", include_str!("../../templates/dynamic_section.hbs")),
    ("footer", include_str!("../../templates/footer.hbs")),
];

pub struct SiteViews {
    registry: Handlebars<'static>,
}

impl SiteViews {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        registry.register_template_string(PAGE_TEMPLATE, include_str!("../../templates/page.hbs"))?;
        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }

        Ok(Self { registry })
    }

    pub fn render_page(&self, context: &PageContext) -> Result<String, RenderError> {
        Ok(self.registry.render(PAGE_TEMPLATE, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Hero, Project};
    use crate::viewmodel::Card;

    fn context(blocks: Vec<BlockContext>) -> PageContext {
        PageContext {
            site_name: "Groupe Rishom".to_string(),
            title: "Accueil".to_string(),
            route: "/".to_string(),
            blocks,
        }
    }

    #[test]
    fn test_templates_register() {
        assert!(SiteViews::new().is_ok());
    }

    #[test]
    fn test_render_hero_and_escaping() {
        let views = SiteViews::new().unwrap();
        let html = views
            .render_page(&context(vec![BlockContext::Hero(Hero {
                title: "Bâtir <ensemble>".to_string(),
                subtitle: None,
                image_url: None,
            })]))
            .unwrap();

        assert!(html.contains("<title>Accueil | Groupe Rishom</title>"));
        assert!(html.contains("Bâtir &lt;ensemble&gt;"));
    }

    #[test]
    fn test_render_filter_bar_marks_active() {
        let views = SiteViews::new().unwrap();
        let html = views
            .render_page(&context(vec![BlockContext::FilterBar {
                options: vec![
                    FilterOptionContext { id: "all".to_string(), label: "Tous les projets".to_string(), color: "#0B3D91".to_string(), active: false },
                    FilterOptionContext { id: "rbf".to_string(), label: "BTP".to_string(), color: "#E30613".to_string(), active: true },
                ],
            }]))
            .unwrap();

        assert_eq!(html.matches("data-filter=").count(), 2);
        assert!(html.contains("filter--active\" data-filter=\"rbf\""));
    }

    #[test]
    fn test_render_empty_section() {
        let views = SiteViews::new().unwrap();
        let html = views
            .render_page(&context(vec![BlockContext::DynamicSection {
                entity_slug: "rba".to_string(),
                kind: "product".to_string(),
                title: "Nos produits".to_string(),
                subtitle: None,
                cards: Vec::<Card>::new(),
            }]))
            .unwrap();

        assert!(html.contains("Nos produits"));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_render_project_grid() {
        let views = SiteViews::new().unwrap();
        let html = views
            .render_page(&context(vec![BlockContext::ProjectGrid {
                active_filter: "all".to_string(),
                projects: vec![Project {
                    title: "Pont de la Mefou".to_string(),
                    location: Some("Yaoundé".to_string()),
                    image_url: None,
                    entity_slugs: vec!["rbf".to_string(), "ric".to_string()],
                }],
            }]))
            .unwrap();

        assert!(html.contains("Pont de la Mefou"));
        assert!(html.contains("data-entities=\"rbf ric\""));
    }
}
