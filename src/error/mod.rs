// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              RelError (~24 bytes)
//!                     |
//!     +---------+-----+-----+---------+
//!     |         |     |     |         |
//!     v         v     v     v         v
//!   Bail      Cfg  Comp  Archive  Fs / Io / Other
//!             Box   Box    Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config    ReadError, ParseError, DuplicateComponent, ...
//!   Component BuildFailed, MissingArtifact, Interrupted
//!   Archive   Create, Append, Zip
//!   Fs        NotFound, IoError
//!
//! All variants boxed => RelError fits in 24 bytes.
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RelError`].
pub type RelResult<T> = std::result::Result<T, RelError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum RelError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Component build or collection error.
    #[error("component error: {0}")]
    Component(#[from] Box<ComponentError>),

    /// Archive construction error.
    #[error("archive error: {0}")]
    Archive(#[from] Box<ArchiveError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`RelError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> RelError {
    RelError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RelError {
                fn from(err: $error) -> Self {
                    RelError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ComponentError => Component,
    ArchiveError => Archive,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Two components share the same name.
    #[error("duplicate component name '{0}'")]
    DuplicateComponent(String),

    /// A component's source directory does not exist.
    #[error("source directory for component '{name}' not found: {path}")]
    MissingSourceDir { name: String, path: PathBuf },

    /// A component declares an empty build or clean command.
    #[error("component '{name}' has an empty {command} command")]
    EmptyCommand { name: String, command: String },
}

// --- Component Errors ---

/// Errors raised while building or collecting a component.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// A component's build command exited non-zero. Fatal: the pipeline
    /// aborts and no collection or archiving happens.
    #[error("component '{name}' build failed with exit code {exit_code}")]
    BuildFailed { name: String, exit_code: i32 },

    /// A component's build reported success but the declared artifact path
    /// is absent. Signals a contract violation between the registry and the
    /// component's layout.
    #[error("component '{name}' produced no artifacts at {expected}")]
    MissingArtifact { name: String, expected: PathBuf },

    /// The pipeline was interrupted while this component was running.
    #[error("component '{0}' was interrupted")]
    Interrupted(String),
}

// --- Archive Errors ---

/// Archive construction errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Failed to create the archive file itself.
    #[error("failed to create archive '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to append an entry to an archive.
    #[error("failed to archive entry '{entry}': {source}")]
    Append {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    /// Error from the zip encoder.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error against the path it occurred on.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}
