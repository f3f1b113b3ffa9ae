//! Dynamic Section ViewModel
//!
//! Products or services of one entity, rendered as cards.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use validator::Validate;

use rishom_core::domain::{is_valid_slug, CatalogItem, CatalogKind};

use crate::client::ContentSource;
use crate::error::SiteError;
use crate::events::{MountId, SiteEvent};
use crate::load_state::{FetchTask, LoadState};

/// Options recognised by a dynamic section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    #[validate(length(min = 1, max = 32, message = "Entity slug must be between 1 and 32 characters"))]
    pub entity_slug: String,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub cta_label: Option<String>,

    #[serde(default)]
    pub kind: CatalogKind,
}

impl SectionConfig {
    pub fn new(entity_slug: &str, title: &str) -> Result<Self, SiteError> {
        let config = Self {
            entity_slug: entity_slug.trim().to_string(),
            title: title.trim().to_string(),
            subtitle: None,
            cta_label: None,
            kind: CatalogKind::Product,
        };
        config.check()?;
        Ok(config)
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_cta(mut self, cta_label: &str) -> Self {
        self.cta_label = Some(cta_label.to_string());
        self
    }

    pub fn with_kind(mut self, kind: CatalogKind) -> Self {
        self.kind = kind;
        self
    }

    /// Field rules plus the slug alphabet; also used for deserialized configs.
    pub fn check(&self) -> Result<(), SiteError> {
        self.validate()?;
        if !is_valid_slug(&self.entity_slug) {
            return Err(SiteError::InvalidSection(format!("invalid entity slug '{}'", self.entity_slug)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub href: String,
}

pub struct DynamicSectionViewModel {
    config: SectionConfig,
    state: LoadState<Vec<CatalogItem>>,
    task: Option<FetchTask>,
    source: Arc<dyn ContentSource>,
    event_tx: mpsc::UnboundedSender<SiteEvent>,
}

impl DynamicSectionViewModel {
    pub fn new(
        config: SectionConfig,
        source: Arc<dyn ContentSource>,
        event_tx: mpsc::UnboundedSender<SiteEvent>,
    ) -> Self {
        Self {
            config,
            state: LoadState::Idle,
            task: None,
            source,
            event_tx,
        }
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn mount(&mut self) -> MountId {
        let mount = MountId::next();
        self.state.begin(mount);

        let source = Arc::clone(&self.source);
        let tx = self.event_tx.clone();
        let slug = self.config.entity_slug.clone();
        let kind = self.config.kind;
        self.task = Some(FetchTask::spawn(mount, async move {
            let event = match source.fetch_catalog(&slug, kind).await {
                Ok(items) => SiteEvent::SectionLoaded { mount, items },
                Err(e) => SiteEvent::SectionFailed { mount, error: e.to_string() },
            };
            let _ = tx.send(event);
        }));

        mount
    }

    pub fn handle(&mut self, event: &SiteEvent) -> bool {
        let applied = match event {
            SiteEvent::SectionLoaded { mount, items } => self.state.resolve(*mount, Ok(items.clone())),
            SiteEvent::SectionFailed { mount, error } => {
                let applied = self.state.resolve(*mount, Err(error.clone()));
                if applied {
                    warn!(
                        entity = %self.config.entity_slug,
                        kind = %self.config.kind,
                        error = %error,
                        "Dynamic section fetch failed, rendering empty"
                    );
                }
                applied
            }
            _ => false,
        };

        if applied {
            self.task = None;
            debug!("Section '{}' settled with {} cards", self.config.title, self.items().len());
        }
        applied
    }

    /// Empty until loaded and after a failure.
    pub fn items(&self) -> &[CatalogItem] {
        self.state.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cards(&self) -> Vec<Card> {
        self.items()
            .iter()
            .map(|item| Card {
                title: item.name.clone(),
                summary: item.summary.clone(),
                image_url: item.image_url.clone(),
                cta_label: self.config.cta_label.clone(),
                href: format!("/entities/{}/#{}", self.config.entity_slug, item.id),
            })
            .collect()
    }

    pub fn state(&self) -> &LoadState<Vec<CatalogItem>> {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }
}
