// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Markup(String),
    Selector(String),
    Config(String),
    Load(LoadError),
}

/// Specific error types for content loading failures.
/// The overlay keeps the previous content mounted and shows these instead
/// of stalling on a load that never completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source bytes could not be decoded into displayable content.
    Decode(String),

    /// The source could not be read (file not found, permission denied, etc.).
    Io(String),

    /// The load did not complete within the configured bound.
    TimedOut { secs: u64 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::TimedOut { secs } => {
                write!(f, "Load did not complete within {} seconds", secs)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Markup(e) => write!(f, "Markup Error: {}", e),
            Error::Selector(e) => write!(f, "Selector Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Load(e) => write!(f, "Load Error: {}", e),
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Markup(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn markup_error_formats_properly() {
        let err = Error::Markup("unclosed tag".into());
        assert_eq!(format!("{}", err), "Markup Error: unclosed tag");
    }

    #[test]
    fn selector_error_formats_properly() {
        let err = Error::Selector("unsupported combinator".into());
        assert_eq!(format!("{}", err), "Selector Error: unsupported combinator");
    }

    #[test]
    fn load_error_converts_to_error() {
        let err: Error = LoadError::Decode("bad magic bytes".to_string()).into();
        match err {
            Error::Load(LoadError::Decode(message)) => assert!(message.contains("magic")),
            other => panic!("expected Load variant, got {other:?}"),
        }
    }

    #[test]
    fn load_error_timeout_display_names_the_bound() {
        let err = LoadError::TimedOut { secs: 30 };
        assert_eq!(
            format!("{}", err),
            "Load did not complete within 30 seconds"
        );
    }

    #[test]
    fn load_error_io_display() {
        let err = LoadError::Io("no such file".to_string());
        assert!(format!("{}", err).contains("no such file"));
    }
}
