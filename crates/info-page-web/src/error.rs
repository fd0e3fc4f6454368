#![forbid(unsafe_code)]

use core::fmt;

use info_page_core::PayloadError;

/// Reasons the tile view did not start.
///
/// None of these are fatal to the page: the static markup stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// `window.document` is unavailable.
    NoDocument,
    /// A required element was not found; carries the selector.
    MissingElement(String),
    /// The embedded payload was missing or invalid.
    Payload(PayloadError),
    /// A tile view is already running on this page.
    AlreadyBooted,
    /// Host-supplied options could not be parsed.
    InvalidConfig(String),
    /// A DOM call failed.
    Js(String),
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no window available"),
            Self::NoDocument => write!(f, "no document available"),
            Self::MissingElement(selector) => write!(f, "required element not found: {selector}"),
            Self::Payload(err) => write!(f, "{err}"),
            Self::AlreadyBooted => write!(f, "tile view already booted"),
            Self::InvalidConfig(msg) => write!(f, "invalid options: {msg}"),
            Self::Js(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for BootError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PayloadError> for BootError {
    fn from(err: PayloadError) -> Self {
        Self::Payload(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_selector() {
        let err = BootError::MissingElement("#class-bar".into());
        assert_eq!(err.to_string(), "required element not found: #class-bar");
    }

    #[test]
    fn payload_errors_keep_their_source() {
        let err = BootError::from(PayloadError::MissingCatalog);
        assert_eq!(err.to_string(), "payload has no items_by_class");
        assert!(err.source().is_some());
        assert!(BootError::NoDocument.source().is_none());
        assert_eq!(BootError::AlreadyBooted.to_string(), "tile view already booted");
    }
}
