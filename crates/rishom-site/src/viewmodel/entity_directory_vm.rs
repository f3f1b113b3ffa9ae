//! Entity Directory ViewModel
//!
//! Fetches the business units once per mount and keeps the filterable ones.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

use rishom_core::domain::Entity;

use crate::client::ContentSource;
use crate::events::{MountId, SiteEvent};
use crate::load_state::{FetchTask, LoadState};

pub struct EntityDirectoryViewModel {
    state: LoadState<Vec<Entity>>,
    task: Option<FetchTask>,
    source: Arc<dyn ContentSource>,
    event_tx: mpsc::UnboundedSender<SiteEvent>,
}

impl EntityDirectoryViewModel {
    pub fn new(source: Arc<dyn ContentSource>, event_tx: mpsc::UnboundedSender<SiteEvent>) -> Self {
        Self {
            state: LoadState::Idle,
            task: None,
            source,
            event_tx,
        }
    }

    /// Issues the single read for `/api/entities`. A previous in-flight
    /// fetch of this view model is aborted.
    pub fn mount(&mut self) -> MountId {
        let mount = MountId::next();
        self.state.begin(mount);

        let source = Arc::clone(&self.source);
        let tx = self.event_tx.clone();
        self.task = Some(FetchTask::spawn(mount, async move {
            let event = match source.fetch_entities().await {
                Ok(entities) => SiteEvent::EntitiesLoaded { mount, entities },
                Err(e) => SiteEvent::EntitiesFailed { mount, error: e.to_string() },
            };
            // Receiver gone means the page is gone.
            let _ = tx.send(event);
        }));

        mount
    }

    /// Applies an event if it belongs to the current mount.
    pub fn handle(&mut self, event: &SiteEvent) -> bool {
        match event {
            SiteEvent::EntitiesLoaded { mount, entities } => self.on_loaded(*mount, entities),
            SiteEvent::EntitiesFailed { mount, error } => self.on_failed(*mount, error),
            _ => false,
        }
    }

    pub fn on_loaded(&mut self, mount: MountId, entities: &[Entity]) -> bool {
        let kept: Vec<Entity> = entities.iter().filter(|e| !e.is_group()).cloned().collect();
        let count = kept.len();
        let applied = self.state.resolve(mount, Ok(kept));
        if applied {
            self.task = None;
            info!("Entity directory loaded: {} of {} entities filterable", count, entities.len());
        }
        applied
    }

    /// Degrades to an empty directory; nothing is surfaced to the page.
    pub fn on_failed(&mut self, mount: MountId, error: &str) -> bool {
        let applied = self.state.resolve(mount, Err(error.to_string()));
        if applied {
            self.task = None;
            warn!(error = %error, "Entity directory fetch failed, continuing with no entities");
        }
        applied
    }

    /// Filterable entities in fetch order; empty until loaded and after a failure.
    pub fn entities(&self) -> &[Entity] {
        self.state.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn state(&self) -> &LoadState<Vec<Entity>> {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }
}
