//! CLI command implementations
//!
//! Commands live in a fixed registry built at compile time. The dispatcher
//! looks up the first argument by name and hands the remaining arguments to
//! that command's handler, which validates them itself.

use anyhow::Result;
use console::style;

use crate::error::CliError;

pub mod generate;
pub mod new;
pub mod routes;
pub mod server;

pub use generate::GenerateCommand;
pub use new::NewCommand;
pub use server::ServerCommand;

/// Command handler: receives the arguments after the command name and
/// returns the process exit status
pub type Handler = fn(&[String]) -> Result<i32>;

/// A registered command
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// Name typed on the command line
    pub name: &'static str,
    /// Argument synopsis shown in help
    pub usage: &'static str,
    /// One-line description
    pub summary: &'static str,
    /// Function invoked with the remaining arguments
    pub handler: Handler,
}

/// Every command `pebble` understands, in help order
pub static COMMANDS: &[Command] = &[
    Command {
        name: "new",
        usage: "new <name>",
        summary: "Create a new Pebble project",
        handler: new::run,
    },
    Command {
        name: "generate",
        usage: "generate <controller|model|template> <name>",
        summary: "Generate a controller, model or template",
        handler: generate::run,
    },
    Command {
        name: "server",
        usage: "server [--port P] [--host H] [--reload]",
        summary: "Start the development server",
        handler: server::run,
    },
    Command {
        name: "routes",
        usage: "routes",
        summary: "List application routes",
        handler: routes::run,
    },
    Command {
        name: "version",
        usage: "version",
        summary: "Show the CLI version",
        handler: version,
    },
    Command {
        name: "help",
        usage: "help [command]",
        summary: "Show this help",
        handler: help,
    },
];

/// Look up a registered command
#[must_use]
pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Dispatch a raw argument list (without the program name)
///
/// No arguments prints help.
///
/// # Errors
///
/// Returns [`CliError::UnknownCommand`] for an unregistered name, or
/// whatever the selected handler returns.
pub fn dispatch(args: &[String]) -> Result<i32> {
    let Some((name, rest)) = args.split_first() else {
        return help(&[]);
    };

    let command = find(name).ok_or_else(|| CliError::UnknownCommand(name.clone()))?;
    tracing::debug!(command = command.name, args = ?rest, "dispatching");

    (command.handler)(rest)
}

/// Handler for `pebble version`
///
/// # Errors
///
/// Never fails.
pub fn version(_args: &[String]) -> Result<i32> {
    println!("pebble {}", env!("CARGO_PKG_VERSION"));
    Ok(0)
}

/// Handler for `pebble help [command]`
///
/// Asking about an unregistered command prints a note followed by the full
/// command table.
///
/// # Errors
///
/// Never fails.
pub fn help(args: &[String]) -> Result<i32> {
    if let Some(name) = args.first() {
        if let Some(command) = find(name) {
            println!("{}", style(command.summary).bold());
            println!();
            println!("Usage: pebble {}", command.usage);
            return Ok(0);
        }

        println!("{} {}", style("No such command:").yellow().bold(), name);
        println!();
    }

    print_overview();
    Ok(0)
}

fn print_overview() {
    println!(
        "{} {}",
        style("pebble").cyan().bold(),
        style(env!("CARGO_PKG_VERSION")).dim()
    );
    println!("CLI tool for the Pebble web micro-framework");
    println!();
    println!("{} pebble <command> [arguments]", style("Usage:").bold());
    println!();
    println!("{}", style("Commands:").bold());

    let width = COMMANDS
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0);
    for command in COMMANDS {
        println!(
            "  {:<width$}  {}",
            style(command.usage).green(),
            command.summary
        );
    }
    println!();
    println!("Run 'pebble help <command>' for details on a single command.");
}
