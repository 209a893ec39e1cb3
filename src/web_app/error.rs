// web_app/error.rs - Error types for the site
//
// Rendering itself is infallible; errors only come from parsing routes
// and from starting the server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A path outside the four known navigation targets
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
