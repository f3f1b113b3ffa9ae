//! Site Events
//!
//! Results of background fetches, delivered to the page that mounted them.

use std::sync::atomic::{AtomicU64, Ordering};

use rishom_core::domain::{CatalogItem, Entity};

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// Identifies one mount of one view model. Events carry it so that results
/// of a superseded mount can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    pub fn next() -> Self {
        MountId(NEXT_MOUNT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub enum SiteEvent {
    /// Entity directory arrived (unfiltered)
    EntitiesLoaded { mount: MountId, entities: Vec<Entity> },
    /// Entity directory fetch failed
    EntitiesFailed { mount: MountId, error: String },
    /// Catalog items of a dynamic section arrived
    SectionLoaded { mount: MountId, items: Vec<CatalogItem> },
    /// Catalog fetch of a dynamic section failed
    SectionFailed { mount: MountId, error: String },
}

impl SiteEvent {
    pub fn mount(&self) -> MountId {
        match self {
            SiteEvent::EntitiesLoaded { mount, .. }
            | SiteEvent::EntitiesFailed { mount, .. }
            | SiteEvent::SectionLoaded { mount, .. }
            | SiteEvent::SectionFailed { mount, .. } => *mount,
        }
    }
}
