//! ViewModel Module
//!
//! Per-component state, fed by `SiteEvent`s from background fetches.

pub mod entity_directory_vm;
pub mod filter_vm;
pub mod section_vm;

pub use entity_directory_vm::EntityDirectoryViewModel;
pub use filter_vm::{FilterViewModel, Tagged};
pub use section_vm::{Card, DynamicSectionViewModel, SectionConfig};
