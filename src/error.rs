use std::fmt;

/// Errors raised by the screen manager, the level registry and asset loading.
/// None of these are fatal: callers log them and keep the page running.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// No element with this id exists in the page
    ElementNotFound(String),

    /// A level selector label that is not a number, or is out of range
    InvalidLevelIndex(String),

    /// An image or audio asset failed to load, or never finished loading
    AssetLoadFailure { url: String, reason: String },

    /// The DOM rejected an operation
    Js(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ElementNotFound(id) => {
                write!(f, "Element not found: '{}'", id)
            }
            GameError::InvalidLevelIndex(label) => {
                write!(f, "Invalid level index: '{}'", label)
            }
            GameError::AssetLoadFailure { url, reason } => {
                write!(f, "Asset fetch failed for {} ({})", url, reason)
            }
            GameError::Js(message) => {
                write!(f, "DOM error: {}", message)
            }
        }
    }
}

impl std::error::Error for GameError {}
