//! Error types for the `pebble` CLI
//!
//! Validation failures are reported through [`CliError`]. Filesystem failures
//! are not part of this enum: they travel as [`anyhow::Error`] with context
//! attached and abort the running command.

use std::path::PathBuf;

use thiserror::Error;

use crate::project::ENTRY_POINT;

/// Validation errors raised before a command mutates anything
#[derive(Debug, Error)]
pub enum CliError {
    /// A required argument is missing or malformed
    #[error("{0}")]
    Usage(String),

    /// The scaffold or artifact target is already occupied
    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// No command with this name is registered
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `generate` was asked for an artifact kind it does not know
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// The working directory is not a project root
    #[error("No {} found in the current directory", ENTRY_POINT)]
    MissingEntryPoint,
}

impl CliError {
    /// Follow-up advice printed under the error message
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Usage(_) | Self::UnknownCommand(_) => "Run 'pebble help' to see available commands",
            Self::AlreadyExists(_) => "Choose a different name or remove the existing path",
            Self::UnknownType(_) => "Valid types are: controller, model, template",
            Self::MissingEntryPoint => {
                "Run this command from a project root, or create one with 'pebble new <name>'"
            }
        }
    }
}
