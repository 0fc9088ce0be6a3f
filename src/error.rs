//! Crate-level error types.

use std::fmt;

/// Errors produced by the scrollstory crate.
///
/// None of these are fatal to the frame loop: asset errors travel inside
/// [`LoadEvent`](crate::assets::LoadEvent)s and route the affected slot to
/// its procedural fallback.
#[derive(Debug)]
pub enum StoryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A model asset could not be fetched or read.
    AssetLoad {
        /// Asset path as requested.
        path: String,
        /// Human-readable failure reason.
        reason: String,
    },
    /// The asset's file format has no parser.
    UnsupportedFormat(String),
    /// Malformed Wavefront OBJ data.
    ObjParse {
        /// 1-based line number of the offending statement.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// Browser environment failure (missing window, failed DOM call).
    Web(String),
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AssetLoad { path, reason } => {
                write!(f, "failed to load asset '{path}': {reason}")
            }
            Self::UnsupportedFormat(what) => {
                write!(f, "unsupported model format: {what}")
            }
            Self::ObjParse { line, reason } => {
                write!(f, "OBJ parse error at line {line}: {reason}")
            }
            Self::Web(msg) => write!(f, "web error: {msg}"),
        }
    }
}

impl std::error::Error for StoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_asset_path() {
        let err = StoryError::AssetLoad {
            path: "./models/DNA.fbx".to_owned(),
            reason: "404".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("./models/DNA.fbx"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn io_errors_expose_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StoryError::from(io);
        assert!(err.source().is_some());
        assert!(StoryError::Web("x".to_owned()).source().is_none());
    }
}
