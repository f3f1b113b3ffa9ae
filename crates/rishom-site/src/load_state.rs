//! Fetch-on-mount state machine
//!
//! `Idle -> Loading -> Loaded | Failed`. A fetch task is owned by the view
//! model that mounted it and is aborted when that view model drops it.

use std::future::Future;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::events::MountId;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading(MountId),
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Enters `Loading` for `mount`, whatever the previous state.
    pub fn begin(&mut self, mount: MountId) {
        *self = LoadState::Loading(mount);
    }

    /// Settles the state with a fetch result. Results for any mount other
    /// than the one currently loading are ignored; returns whether applied.
    pub fn resolve(&mut self, mount: MountId, result: Result<T, String>) -> bool {
        if !matches!(self, LoadState::Loading(current) if *current == mount) {
            return false;
        }

        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(error) => LoadState::Failed(error),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading(_))
    }

    /// Loaded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn mount(&self) -> Option<MountId> {
        match self {
            LoadState::Loading(mount) => Some(*mount),
            _ => None,
        }
    }
}

/// Handle of a spawned fetch; dropping it aborts the task.
#[derive(Debug)]
pub struct FetchTask {
    handle: JoinHandle<()>,
}

impl FetchTask {
    pub fn spawn<F>(mount: MountId, fut: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!("Spawning fetch for {:?}", mount);
        Self {
            handle: tokio::spawn(fut),
        }
    }

}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
