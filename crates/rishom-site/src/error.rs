//! Site error types

use thiserror::Error;

/// Every way a content fetch can fail. Callers treat all of them alike.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Cannot decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Invalid section configuration: {0}")]
    InvalidSection(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<validator::ValidationErrors> for SiteError {
    fn from(errors: validator::ValidationErrors) -> Self {
        SiteError::InvalidSection(errors.to_string())
    }
}
