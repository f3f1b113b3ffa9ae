//! Built-in page compositions

use rishom_core::domain::{CatalogKind, Entity};

use crate::error::SiteError;
use crate::viewmodel::SectionConfig;

use super::blocks::{BlockSpec, Hero, PageSpec, Project};

/// `/`
pub fn home(projects: Vec<Project>) -> PageSpec {
    PageSpec {
        route: "/".to_string(),
        title: "Accueil".to_string(),
        blocks: vec![
            BlockSpec::Hero(Hero {
                title: "Groupe Rishom".to_string(),
                subtitle: Some("Un groupe, plusieurs métiers au service du développement.".to_string()),
                image_url: Some("/assets/img/hero-home.jpg".to_string()),
            }),
            BlockSpec::ProjectGrid(projects),
            BlockSpec::Footer,
        ],
    }
}

/// `/projects`
pub fn projects(projects: Vec<Project>) -> PageSpec {
    PageSpec {
        route: "/projects".to_string(),
        title: "Projets".to_string(),
        blocks: vec![
            BlockSpec::Hero(Hero {
                title: "Nos projets".to_string(),
                subtitle: None,
                image_url: Some("/assets/img/hero-projects.jpg".to_string()),
            }),
            BlockSpec::FilterBar,
            BlockSpec::ProjectGrid(projects),
            BlockSpec::Footer,
        ],
    }
}

/// `/entities/{slug}`: the entity's products then its services.
pub fn entity_landing(entity: &Entity) -> Result<PageSpec, SiteError> {
    let slug = entity.slug();
    let products = SectionConfig::new(&slug, "Nos produits")?
        .with_subtitle(&entity.short_name)
        .with_cta("Découvrir");
    let services = SectionConfig::new(&slug, "Nos services")?
        .with_kind(CatalogKind::Service)
        .with_cta("En savoir plus");

    Ok(PageSpec {
        route: format!("/entities/{}", slug),
        title: entity.short_name.clone(),
        blocks: vec![
            BlockSpec::Hero(Hero {
                title: entity.name.clone().unwrap_or_else(|| entity.short_name.clone()),
                subtitle: entity.description.clone(),
                image_url: None,
            }),
            BlockSpec::DynamicSection(products),
            BlockSpec::DynamicSection(services),
            BlockSpec::Footer,
        ],
    })
}
