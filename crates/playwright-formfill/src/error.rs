// Error types for playwright-formfill

use thiserror::Error;

/// Result type alias for form filling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while filling forms
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid argument provided to a fill operation
    ///
    /// Raised for blank selectors and for options that cannot drive a
    /// generator (for example a retry policy with zero attempts).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested generation mode cannot be applied to this scope
    ///
    /// Explicit modes (dropdown, combo, range...) need a single control.
    /// A whole page is never a single control.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An action against a specific control failed
    ///
    /// Usually transient: a stale element, an overlay covering the target,
    /// or a control that is not yet attached.
    #[error("Failed to {action} '{selector}': {message}")]
    Interaction {
        action: String,
        selector: String,
        message: String,
    },

    /// Timeout waiting for an element state
    #[error("Timeout: {0}")]
    Timeout(String),

    /// A bounded retry ran out of attempts
    ///
    /// Carries the error of the last attempt as its source.
    #[error("Gave up on {operation} after {attempts} attempt(s)")]
    RetryExhausted {
        operation: String,
        attempts: u32,
        #[source]
        last: Box<Error>,
    },

    /// The automation surface does not provide an optional capability
    #[error("Not implemented by this automation surface: {0}")]
    NotImplemented(&'static str),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by Playwright
    #[cfg(feature = "playwright")]
    #[error("Playwright error: {0}")]
    Playwright(#[from] playwright_rs::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Builds an [`Error::Interaction`] for the given action and selector
    pub fn interaction(
        action: impl Into<String>,
        selector: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Interaction {
            action: action.into(),
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Returns true for timeouts, including timeouts wrapped in context
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout(_) => true,
            #[cfg(feature = "playwright")]
            Error::Playwright(playwright_rs::Error::Timeout(_)) => true,
            Error::Context(_, inner) => inner.is_timeout(),
            _ => false,
        }
    }
}
