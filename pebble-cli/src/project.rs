//! Project layout conventions shared by every command

use std::path::{Component, Path};

use crate::error::CliError;

/// File whose presence marks a directory as a Pebble project root
pub const ENTRY_POINT: &str = "app.psgi";

/// Per-project tool configuration, read by `pebble server`
pub const CONFIG_FILE: &str = "pebble.toml";

/// Port the development server binds to unless configured otherwise
pub const DEFAULT_PORT: u16 = 5678;

/// Host the development server binds to unless configured otherwise
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Derive the Perl namespace for an application name
///
/// Only the first character is upper-cased; the rest is kept verbatim so
/// `new` and `generate` always agree on `lib/<Namespace>`.
#[must_use]
pub fn namespace_for(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Derive the namespace from the last segment of a project directory
///
/// # Errors
///
/// Returns [`CliError::Usage`] if the path has no final segment (e.g. `/`).
pub fn namespace_from_dir(dir: &Path) -> Result<String, CliError> {
    dir.file_name()
        .map(|segment| namespace_for(&segment.to_string_lossy()))
        .filter(|namespace| !namespace.is_empty())
        .ok_or_else(|| {
            CliError::Usage(format!(
                "Cannot derive a project namespace from '{}'",
                dir.display()
            ))
        })
}

/// Ensure `name` is a single plain path segment
///
/// Names become file or directory names under the working directory, so
/// separators, `.`/`..` and absolute paths are refused.
///
/// # Errors
///
/// Returns [`CliError::Usage`] naming `what` if `name` would resolve
/// outside its parent directory.
pub fn require_plain_name(name: &str, what: &str) -> Result<(), CliError> {
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(segment)), None) if segment == name
    );

    if single && !name.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(CliError::Usage(format!(
            "Invalid {what} '{name}': use a plain name without path separators"
        )))
    }
}

/// Ensure `dir` is a project root
///
/// # Errors
///
/// Returns [`CliError::MissingEntryPoint`] if `dir` has no entry-point file.
pub fn require_entry_point(dir: &Path) -> Result<(), CliError> {
    if dir.join(ENTRY_POINT).is_file() {
        Ok(())
    } else {
        Err(CliError::MissingEntryPoint)
    }
}
