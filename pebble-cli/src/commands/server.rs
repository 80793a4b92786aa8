//! Development server command
//!
//! Resolves the network configuration and hands the process over to the
//! configured PSGI server (`plackup` by default). On Unix the CLI process is
//! replaced with `exec`, so the server's exit status becomes the CLI's. On
//! other platforms the server is spawned and waited for, and its exit code
//! is forwarded.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::config::{PebbleConfig, ServerConfig};
use crate::error::CliError;
use crate::project::{self, ENTRY_POINT};

/// Flags accepted by `pebble server`
#[derive(Debug, Default, Parser)]
#[command(name = "pebble server", no_binary_name = true, disable_help_flag = true)]
pub struct ServerArgs {
    /// Port to listen on (default: 5678)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Interface to bind (default: 0.0.0.0)
    #[arg(short = 'h', long)]
    pub host: Option<String>,

    /// Restart when lib/ or templates/ change
    #[arg(short, long)]
    pub reload: bool,
}

impl ServerArgs {
    /// Parse the arguments that follow `server`
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Usage`] for unknown flags or invalid values.
    pub fn parse_args(args: &[String]) -> Result<Self, CliError> {
        Self::try_parse_from(args).map_err(|e| CliError::Usage(e.to_string().trim_end().to_string()))
    }

    /// Apply these flags on top of the loaded configuration
    pub fn apply(self, config: &mut ServerConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if self.reload {
            config.reload = true;
        }
    }
}

/// Start the development server for the project in `project_root`
pub struct ServerCommand {
    config: ServerConfig,
    project_root: PathBuf,
}

impl ServerCommand {
    /// Validate the project and resolve the server configuration
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingEntryPoint`] if `project_root` has no
    /// `app.psgi`, [`CliError::Usage`] for bad flags, or an error if the
    /// configuration cannot be loaded.
    pub fn new(args: &[String], project_root: &Path) -> Result<Self> {
        project::require_entry_point(project_root)?;

        let flags = ServerArgs::parse_args(args)?;
        let mut config = PebbleConfig::load_from(project_root)?.server;
        flags.apply(&mut config);

        Ok(Self {
            config,
            project_root: project_root.to_path_buf(),
        })
    }

    /// The resolved server configuration
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the server process invocation
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.config.runner);
        command
            .current_dir(&self.project_root)
            .arg("--host")
            .arg(&self.config.host)
            .arg("--port")
            .arg(self.config.port.to_string());

        if self.config.reload {
            command.arg("-R").arg(self.config.watch.join(","));
        }

        command.arg(ENTRY_POINT);
        command
    }

    /// Print the binding and hand off to the server process
    ///
    /// On Unix this only returns if the server could not be started.
    ///
    /// # Errors
    ///
    /// Returns an error if the server process cannot be started.
    pub fn execute(&self) -> Result<i32> {
        let ServerConfig {
            host, port, reload, ..
        } = &self.config;

        println!(
            "{} {}",
            style("Starting").green().bold(),
            style("development server...").bold()
        );
        println!();
        println!("  Host: {}", style(host).cyan());
        println!("  Port: {}", style(port).cyan());
        println!(
            "  URL:  {}",
            style(format!("http://{host}:{port}")).cyan().underlined()
        );
        if *reload {
            println!(
                "{}",
                style(format!(
                    "Hot reload enabled. Watching {} for changes...",
                    self.config.watch.join(", ")
                ))
                .green()
            );
        }
        println!();
        std::io::stdout().flush().context("Failed to flush stdout")?;

        info!(runner = %self.config.runner, %host, port, reload, "handing off to server process");
        hand_off(self.command(), &self.config.runner)
    }
}

#[cfg(unix)]
fn hand_off(mut command: Command, runner: &str) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure
    let err = command.exec();
    Err(anyhow::Error::new(err).context(format!("Failed to start {runner}")))
}

#[cfg(not(unix))]
fn hand_off(mut command: Command, runner: &str) -> Result<i32> {
    let status = command
        .status()
        .with_context(|| format!("Failed to start {runner}"))?;

    Ok(status.code().unwrap_or(1))
}

/// Handler for `pebble server [--port P] [--host H] [--reload]`
///
/// # Errors
///
/// See [`ServerCommand::new`] and [`ServerCommand::execute`].
pub fn run(args: &[String]) -> Result<i32> {
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    ServerCommand::new(args, &working_dir)?.execute()
}
