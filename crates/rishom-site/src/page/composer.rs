//! Page Composer
//!
//! Owns the view models of one page, mounts their fetches, applies the
//! resulting events, and renders the page once everything has settled.

use chrono::{Datelike, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use rishom_core::domain::Entity;

use crate::client::ContentSource;
use crate::error::{RenderError, SiteError};
use crate::events::SiteEvent;
use crate::view::{BlockContext, FilterOptionContext, FooterLink, PageContext, SiteViews};
use crate::viewmodel::{DynamicSectionViewModel, EntityDirectoryViewModel, FilterViewModel};

use super::blocks::{BlockSpec, PageSpec};

pub const SITE_NAME: &str = "Groupe Rishom";

pub struct PageComposer {
    spec: PageSpec,
    directory: Option<EntityDirectoryViewModel>,
    filter: FilterViewModel,
    /// One per `BlockSpec::DynamicSection`, in block order.
    sections: Vec<DynamicSectionViewModel>,
    event_rx: mpsc::UnboundedReceiver<SiteEvent>,
}

impl PageComposer {
    pub fn new(spec: PageSpec, source: Arc<dyn ContentSource>) -> Result<Self, SiteError> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let directory = spec
            .blocks
            .iter()
            .any(BlockSpec::needs_directory)
            .then(|| EntityDirectoryViewModel::new(Arc::clone(&source), event_tx.clone()));

        let mut sections = Vec::new();
        for block in &spec.blocks {
            if let BlockSpec::DynamicSection(config) = block {
                config.check()?;
                sections.push(DynamicSectionViewModel::new(
                    config.clone(),
                    Arc::clone(&source),
                    event_tx.clone(),
                ));
            }
        }

        Ok(Self {
            spec,
            directory,
            filter: FilterViewModel::new(),
            sections,
            event_rx,
        })
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    /// Starts every fetch of the page; each is independent of the others.
    pub fn mount(&mut self) {
        if let Some(directory) = self.directory.as_mut() {
            directory.mount();
        }
        for section in &mut self.sections {
            section.mount();
        }
        debug!("Mounted page {} ({} sections)", self.spec.route, self.sections.len());
    }

    pub fn apply(&mut self, event: SiteEvent) -> bool {
        let applied = self.directory.as_mut().is_some_and(|d| d.handle(&event))
            || self.sections.iter_mut().any(|s| s.handle(&event));

        if !applied {
            debug!("Dropping event for superseded mount {:?}", event.mount());
        }
        applied
    }

    pub fn is_settled(&self) -> bool {
        self.directory.as_ref().map_or(true, |d| d.is_settled())
            && self.sections.iter().all(|s| s.is_settled())
    }

    /// Whether any fetch of the page is still in flight.
    pub fn is_loading(&self) -> bool {
        self.directory.as_ref().is_some_and(|d| d.state().is_loading())
            || self.sections.iter().any(|s| s.state().is_loading())
    }

    /// Applies events until no fetch of the page is in flight. Returns at
    /// once on a page that was never mounted.
    pub async fn settle(&mut self) {
        while self.is_loading() {
            match self.event_rx.recv().await {
                Some(event) => {
                    self.apply(event);
                }
                None => break,
            }
        }
        info!("Page {} settled", self.spec.route);
    }

    pub fn select_filter(&mut self, option_id: &str) {
        self.filter.select(option_id);
    }

    pub fn filter(&self) -> &FilterViewModel {
        &self.filter
    }

    pub fn directory(&self) -> Option<&EntityDirectoryViewModel> {
        self.directory.as_ref()
    }

    pub fn sections(&self) -> &[DynamicSectionViewModel] {
        &self.sections
    }

    /// Filterable entities, empty when the page has no directory or it failed.
    pub fn entities(&self) -> &[Entity] {
        self.directory.as_ref().map(|d| d.entities()).unwrap_or(&[])
    }

    pub fn context(&self) -> PageContext {
        let mut sections = self.sections.iter();
        let blocks = self
            .spec
            .blocks
            .iter()
            .filter_map(|block| match block {
                BlockSpec::Hero(hero) => Some(BlockContext::Hero(hero.clone())),
                BlockSpec::FilterBar => Some(BlockContext::FilterBar {
                    options: self
                        .filter
                        .options(self.entities())
                        .into_iter()
                        .map(|option| FilterOptionContext {
                            active: option.id == self.filter.active_filter(),
                            id: option.id,
                            label: option.label,
                            color: option.color,
                        })
                        .collect(),
                }),
                BlockSpec::ProjectGrid(projects) => Some(BlockContext::ProjectGrid {
                    active_filter: self.filter.active_filter().to_string(),
                    projects: self.filter.visible(projects).into_iter().cloned().collect(),
                }),
                BlockSpec::DynamicSection(_) => sections.next().map(|section| {
                    let config = section.config();
                    BlockContext::DynamicSection {
                        entity_slug: config.entity_slug.clone(),
                        kind: config.kind.to_string(),
                        title: config.title.clone(),
                        subtitle: config.subtitle.clone(),
                        cards: section.cards(),
                    }
                }),
                BlockSpec::Footer => Some(BlockContext::Footer {
                    year: Utc::now().year(),
                    entities: self
                        .entities()
                        .iter()
                        .map(|e| FooterLink {
                            label: e.short_name.clone(),
                            href: format!("/entities/{}/", e.slug()),
                            color: e.color_or_default().to_string(),
                        })
                        .collect(),
                }),
            })
            .collect();

        PageContext {
            site_name: SITE_NAME.to_string(),
            title: self.spec.title.clone(),
            route: self.spec.route.clone(),
            blocks,
        }
    }

    pub fn render(&self, views: &SiteViews) -> Result<String, RenderError> {
        views.render_page(&self.context())
    }
}
