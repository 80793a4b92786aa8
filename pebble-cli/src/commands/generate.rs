//! Code generation commands (controllers, models, templates)

use anyhow::{Context, Result};
use console::{style, Emoji};
use convert_case::{Case, Casing};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::CliError;
use crate::fs_writer;
use crate::project;
use crate::templates::{substitutions, SubstitutionMap, TemplateId, TemplateRenderer};

static SUCCESS: Emoji = Emoji("✓", "√");

/// Kinds of artifact `pebble generate` can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `lib/<Namespace>/Controller/<Name>.pm`
    Controller,
    /// `lib/<Namespace>/Model/<Name>.pm`
    Model,
    /// `templates/<Name>.tt`
    Template,
}

impl ArtifactKind {
    const fn template_id(self) -> TemplateId {
        match self {
            Self::Controller => TemplateId::Controller,
            Self::Model => TemplateId::Model,
            Self::Template => TemplateId::Fragment,
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "controller" => Ok(Self::Controller),
            "model" => Ok(Self::Model),
            "template" => Ok(Self::Template),
            other => Err(CliError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Template => "template",
        })
    }
}

/// A single artifact to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// What to generate
    pub kind: ArtifactKind,
    /// Artifact name as given on the command line
    pub name: String,
    /// Project namespace the artifact belongs to
    pub namespace: String,
}

impl ArtifactRequest {
    /// Path of the generated file, relative to the project root
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        match self.kind {
            ArtifactKind::Controller => PathBuf::from("lib")
                .join(&self.namespace)
                .join("Controller")
                .join(format!("{}.pm", self.name)),
            ArtifactKind::Model => PathBuf::from("lib")
                .join(&self.namespace)
                .join("Model")
                .join(format!("{}.pm", self.name)),
            ArtifactKind::Template => {
                PathBuf::from("templates").join(format!("{}.tt", self.name))
            }
        }
    }

    /// Placeholder values for this artifact's template
    #[must_use]
    pub fn substitutions(&self) -> SubstitutionMap {
        match self.kind {
            ArtifactKind::Controller => substitutions(&[
                ("namespace", self.namespace.as_str()),
                ("name", self.name.as_str()),
                ("route", self.route().as_str()),
            ]),
            ArtifactKind::Model => substitutions(&[
                ("namespace", self.namespace.as_str()),
                ("name", self.name.as_str()),
            ]),
            ArtifactKind::Template => substitutions(&[("name", self.name.as_str())]),
        }
    }

    /// Render the artifact's source
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String> {
        renderer.render(self.kind.template_id(), &self.substitutions())
    }

    /// Fully qualified Perl package name
    fn package(&self) -> String {
        match self.kind {
            ArtifactKind::Controller => format!("{}::Controller::{}", self.namespace, self.name),
            ArtifactKind::Model => format!("{}::Model::{}", self.namespace, self.name),
            ArtifactKind::Template => self.name.clone(),
        }
    }

    /// URL path segment suggested for a controller
    fn route(&self) -> String {
        self.name.to_case(Case::Kebab)
    }
}

/// Generate one artifact inside an existing project
pub struct GenerateCommand {
    request: ArtifactRequest,
    project_root: PathBuf,
}

impl GenerateCommand {
    /// Validate the request
    ///
    /// The namespace is derived from the last segment of `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Usage`] if `kind` or `name` is empty, `name` is
    /// not a single path segment, or no namespace can be derived, and [`CliError::UnknownType`] for an
    /// unrecognised kind.
    pub fn new(kind: &str, name: &str, project_root: &Path) -> Result<Self, CliError> {
        if kind.is_empty() || name.is_empty() {
            return Err(CliError::Usage(
                "Type and name are required: pebble generate <controller|model|template> <name>"
                    .to_string(),
            ));
        }

        let kind = kind.parse::<ArtifactKind>()?;
        project::require_plain_name(name, "artifact name")?;
        let namespace = project::namespace_from_dir(project_root)?;

        Ok(Self {
            request: ArtifactRequest {
                kind,
                name: name.to_string(),
                namespace,
            },
            project_root: project_root.to_path_buf(),
        })
    }

    /// Use `namespace` instead of the one derived from the directory name
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.request.namespace = namespace.into();
        self
    }

    /// The artifact this command will generate
    #[must_use]
    pub const fn request(&self) -> &ArtifactRequest {
        &self.request
    }

    /// Execute the command, returning the path of the written file
    ///
    /// # Errors
    ///
    /// Returns [`CliError::AlreadyExists`] if the artifact file is already
    /// present, or an error if the file cannot be written.
    pub fn execute(&self) -> Result<PathBuf> {
        let relative = self.request.relative_path();
        let path = self.project_root.join(&relative);

        if fs_writer::is_occupied(&path) {
            return Err(CliError::AlreadyExists(relative).into());
        }

        println!(
            "\n{} Generating {}: {}",
            style("📦").bold(),
            self.request.kind,
            style(&self.request.name).cyan().bold()
        );

        let renderer = TemplateRenderer::new()?;
        let rendered = self.request.render(&renderer)?;

        if let Some(parent) = path.parent() {
            fs_writer::create_dir(parent)?;
        }
        fs_writer::write_file(&path, &rendered)?;
        debug!(kind = %self.request.kind, path = %path.display(), "artifact generated");

        println!();
        println!(
            "  {} Created {} file: {}",
            SUCCESS,
            self.request.kind,
            style(relative.display()).green()
        );

        self.print_usage();

        Ok(path)
    }

    fn print_usage(&self) {
        let request = &self.request;
        let package = request.package();
        let var = request.name.to_case(Case::Snake);

        println!();
        println!("{}", style("Next steps:").bold().underlined());

        match request.kind {
            ArtifactKind::Controller => {
                let route = request.route();
                println!("  1. Load the controller in {}:", project::ENTRY_POINT);
                println!("     {}", style(format!("use {package};")).cyan());
                println!("     {}", style(format!("my ${var} = {package}->new;")).cyan());
                println!();
                println!("  2. Route requests to it:");
                println!(
                    "     {}",
                    style(format!("$app->get('/{route}' => sub {{ ${var}->index(@_) }});")).cyan()
                );
                println!(
                    "     {}",
                    style(format!("$app->get('/{route}/:id' => sub {{ ${var}->show(@_) }});"))
                        .cyan()
                );
            }
            ArtifactKind::Model => {
                println!("  1. Load the model in {}:", project::ENTRY_POINT);
                println!("     {}", style(format!("use {package};")).cyan());
                println!("     {}", style(format!("my ${var} = {package}->new;")).cyan());
                println!();
                println!("  2. Use it from your routes:");
                println!(
                    "     {}",
                    style(format!("my $record = ${var}->create({{ name => 'example' }});")).cyan()
                );
                println!("     {}", style(format!("my $all = ${var}->all;")).cyan());
            }
            ArtifactKind::Template => {
                let title = request.name.to_case(Case::Title);
                println!("  Render it from a route handler:");
                println!(
                    "     {}",
                    style(format!(
                        "return $c->render('{}.tt', {{ title => '{title}' }});",
                        request.name
                    ))
                    .cyan()
                );
            }
        }
        println!();
    }
}

/// Handler for `pebble generate <type> <name>`
///
/// # Errors
///
/// See [`GenerateCommand::new`] and [`GenerateCommand::execute`].
pub fn run(args: &[String]) -> Result<i32> {
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    run_in(&working_dir, args)
}

/// Run `pebble generate` against an explicit project root
///
/// # Errors
///
/// See [`GenerateCommand::new`] and [`GenerateCommand::execute`].
pub fn run_in(project_root: &Path, args: &[String]) -> Result<i32> {
    let arg = |index: usize| args.get(index).map_or("", String::as_str);

    let cmd = GenerateCommand::new(arg(0), arg(1), project_root)?;
    cmd.execute()?;

    Ok(0)
}
