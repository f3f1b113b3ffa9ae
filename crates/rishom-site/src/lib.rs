//! # Rishom Site
//!
//! Client side of the group site: fetches entities and catalog items from
//! the backend, keeps filter state, and composes pages into HTML.

pub mod client;
pub mod error;
pub mod events;
pub mod load_state;
pub mod page;
pub mod publish;
pub mod view;
pub mod viewmodel;

pub use client::{ApiClient, ContentSource};
pub use error::{FetchError, RenderError, SiteError};
pub use events::{MountId, SiteEvent};
pub use load_state::LoadState;
pub use page::{PageComposer, PageSpec};
pub use publish::{load_projects, SitePublisher};
pub use view::SiteViews;
