//! Page composition: block specs, the per-page composer, built-in routes

pub mod blocks;
pub mod composer;
pub mod routes;

pub use blocks::{BlockSpec, Hero, PageSpec, Project};
pub use composer::PageComposer;
