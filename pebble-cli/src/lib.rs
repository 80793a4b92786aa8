//! Pebble CLI library
//!
//! Scaffolds new Pebble projects, generates controllers, models and
//! templates inside an existing project, and launches the development
//! server.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pebble new <name>` | Create a new project |
//! | `pebble generate <type> <name>` | Generate a controller, model or template |
//! | `pebble server` | Hand off to the development server |
//! | `pebble routes` | Route listing (not implemented, prints a notice) |
//! | `pebble version` | Show the CLI version |
//! | `pebble help` | Show help |

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod fs_writer;
pub mod observability;
pub mod project;
pub mod templates;

pub use commands::{dispatch, GenerateCommand, NewCommand, ServerCommand};
pub use config::{PebbleConfig, ServerConfig};
pub use error::CliError;
pub use templates::{TemplateId, TemplateRenderer};
