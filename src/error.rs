//! Crate-level error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the page. Callers log these and keep the page
//! usable; only validation failures (see `behavior::contact`) reach the user.

/// Errors raised by the ports and the configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Inline configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The preference store rejected a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// The form request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The browser environment lacks something the runtime needs to start.
    #[error("browser environment unavailable: {0}")]
    Environment(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
