//! Errors for style registry validation and stylesheet loading.
//!
//! These are configuration errors. Rendering itself never fails; a missing
//! style at render time is a warning, not one of these.

use std::io;
use std::path::{Path, PathBuf};

/// Error returned by [`Styles::validate`](crate::Styles::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleValidationError {
    /// An alias references a style that doesn't exist.
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },

    /// Following aliases leads back to a name already on the path.
    #[error("cycle detected in style aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Error type for stylesheet parsing and loading failures.
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    /// The document is not valid YAML or not a mapping of style names.
    #[error("Failed to parse stylesheet{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Invalid color '{value}' for style '{style}'{}", location(.path))]
    InvalidColor {
        style: String,
        value: String,
        path: Option<PathBuf>,
    },

    #[error("Unknown attribute '{attribute}' in style '{style}'{}", location(.path))]
    UnknownAttribute {
        style: String,
        attribute: String,
        path: Option<PathBuf>,
    },

    /// A shorthand string such as `"yellow bold"` that could not be read.
    #[error("Invalid shorthand '{value}' for style '{style}'{}", location(.path))]
    InvalidShorthand {
        style: String,
        value: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid definition for style '{style}'{}: {message}", location(.path))]
    InvalidDefinition {
        style: String,
        message: String,
        path: Option<PathBuf>,
    },

    /// Dangling alias or alias cycle.
    #[error("Invalid style aliases{}: {source}", location(.path))]
    AliasError {
        #[source]
        source: StyleValidationError,
        path: Option<PathBuf>,
    },

    #[error("Failed to read stylesheet {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StylesheetError {
    /// Attaches the file the stylesheet was read from.
    pub(crate) fn with_path(mut self, file: &Path) -> Self {
        match &mut self {
            StylesheetError::Parse { path, .. }
            | StylesheetError::InvalidColor { path, .. }
            | StylesheetError::UnknownAttribute { path, .. }
            | StylesheetError::InvalidShorthand { path, .. }
            | StylesheetError::InvalidDefinition { path, .. }
            | StylesheetError::AliasError { path, .. } => *path = Some(file.to_path_buf()),
            StylesheetError::Load { .. } => {}
        }
        self
    }

    /// Path of the stylesheet that failed, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StylesheetError::Parse { path, .. }
            | StylesheetError::InvalidColor { path, .. }
            | StylesheetError::UnknownAttribute { path, .. }
            | StylesheetError::InvalidShorthand { path, .. }
            | StylesheetError::InvalidDefinition { path, .. }
            | StylesheetError::AliasError { path, .. } => path.as_deref(),
            StylesheetError::Load { path, .. } => Some(path),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
