//! Project scaffolding command

use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::fs_writer;
use crate::project::{self, CONFIG_FILE, DEFAULT_PORT};
use crate::templates::{substitutions, SubstitutionMap, TemplateId, TemplateRenderer};

static CREATED: Emoji = Emoji("✓ ", "+ ");

/// One file of a new project
#[derive(Debug, Clone)]
pub struct FileSpec {
    /// Path relative to the project root
    pub path: PathBuf,
    /// Template the contents are rendered from
    pub template: TemplateId,
    /// Values for the template's placeholders
    pub vars: SubstitutionMap,
}

/// Everything `pebble new` creates, in creation order
///
/// Directories come before the files that live in them.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Application name, also the root directory name
    pub app_name: String,
    /// Namespace used under `lib/`
    pub namespace: String,
    /// Directories relative to the project root; the empty path is the root
    pub directories: Vec<PathBuf>,
    /// Files relative to the project root
    pub files: Vec<FileSpec>,
}

impl ProjectSpec {
    /// Build the layout for an application named `app_name`
    #[must_use]
    pub fn for_app(app_name: &str) -> Self {
        let namespace = project::namespace_for(app_name);
        let lib = PathBuf::from("lib").join(&namespace);

        let directories = vec![
            PathBuf::new(),
            PathBuf::from("lib"),
            lib.clone(),
            lib.join("Controller"),
            lib.join("Model"),
            PathBuf::from("templates"),
            PathBuf::from("templates/layouts"),
            PathBuf::from("public"),
            PathBuf::from("public/css"),
            PathBuf::from("public/js"),
            PathBuf::from("t"),
        ];

        let named = substitutions(&[("app_name", app_name)]);
        let file = |path: &str, template: TemplateId, vars: &SubstitutionMap| FileSpec {
            path: PathBuf::from(path),
            template,
            vars: vars.clone(),
        };
        let none = SubstitutionMap::new();

        let files = vec![
            file(project::ENTRY_POINT, TemplateId::EntryPoint, &named),
            file("cpanfile", TemplateId::Manifest, &none),
            file(".gitignore", TemplateId::GitIgnore, &none),
            file("README.md", TemplateId::Readme, &named),
            file("templates/layouts/main.tt", TemplateId::Layout, &named),
            file("public/css/style.css", TemplateId::Stylesheet, &none),
            file("templates/index.tt", TemplateId::HomePage, &named),
            file("t/01-basic.t", TemplateId::TestStub, &named),
            file(CONFIG_FILE, TemplateId::Config, &named),
        ];

        Self {
            app_name: app_name.to_string(),
            namespace,
            directories,
            files,
        }
    }
}

/// Create a new Pebble project
pub struct NewCommand {
    spec: ProjectSpec,
    output_dir: PathBuf,
}

impl NewCommand {
    /// Validate the target and prepare the project layout
    ///
    /// # Arguments
    ///
    /// * `name` - Project name, also the directory created under `working_dir`
    /// * `working_dir` - Directory the project is created in
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Usage`] for an empty name or one that is not a
    /// single path segment, and
    /// [`CliError::AlreadyExists`] if `working_dir/name` is occupied.
    pub fn new(name: &str, working_dir: &Path) -> Result<Self, CliError> {
        if name.is_empty() {
            return Err(CliError::Usage(
                "Project name is required: pebble new <name>".to_string(),
            ));
        }

        project::require_plain_name(name, "project name")?;

        let output_dir = working_dir.join(name);
        if fs_writer::is_occupied(&output_dir) {
            return Err(CliError::AlreadyExists(PathBuf::from(name)));
        }

        Ok(Self {
            spec: ProjectSpec::for_app(name),
            output_dir,
        })
    }

    /// The layout this command will create
    #[must_use]
    pub const fn spec(&self) -> &ProjectSpec {
        &self.spec
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error on the first directory or file that cannot be
    /// written. Whatever was created before the failure is left in place.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style("Pebble project:").bold(),
            style(&self.spec.app_name).cyan().bold()
        );
        println!();

        let renderer = TemplateRenderer::new()?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Creating project structure...");
        self.create_structure(&spinner)?;

        spinner.set_message("Generating project files...");
        self.generate_files(&renderer, &spinner)?;

        spinner.finish_and_clear();

        self.print_success();

        Ok(())
    }

    /// Create directory structure
    fn create_structure(&self, spinner: &ProgressBar) -> Result<()> {
        for dir in &self.spec.directories {
            fs_writer::create_dir(&self.output_dir.join(dir))?;
            self.report(spinner, dir);
        }

        Ok(())
    }

    /// Render and write every project file
    fn generate_files(&self, renderer: &TemplateRenderer, spinner: &ProgressBar) -> Result<()> {
        for file in &self.spec.files {
            let contents = renderer.render(file.template, &file.vars)?;
            fs_writer::write_file(&self.output_dir.join(&file.path), &contents)?;
            self.report(spinner, &file.path);
        }

        Ok(())
    }

    fn report(&self, spinner: &ProgressBar, relative: &Path) {
        let shown = Path::new(&self.spec.app_name).join(relative);
        spinner.suspend(|| {
            println!("  {}{}", style(&CREATED).green(), shown.display());
        });
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!();
        println!("{}", style("✓ Project created successfully!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", self.spec.app_name)).cyan()
        );
        println!();
        println!("  {} Install dependencies:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style("cpanm --installdeps .").cyan());
        println!();
        println!("  {} Start development server:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("pebble server --reload").cyan());
        println!();
        println!("  {} Open in browser:", style("4.").cyan());
        println!(
            "     {}",
            style(format!("http://localhost:{DEFAULT_PORT}")).cyan().underlined()
        );
        println!();
    }
}

/// Handler for `pebble new <name> [options...]`
///
/// # Errors
///
/// See [`NewCommand::new`] and [`NewCommand::execute`].
pub fn run(args: &[String]) -> Result<i32> {
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    run_in(&working_dir, args)
}

/// Run `pebble new` against an explicit working directory
///
/// # Errors
///
/// See [`NewCommand::new`] and [`NewCommand::execute`].
pub fn run_in(working_dir: &Path, args: &[String]) -> Result<i32> {
    let (name, options) = match args {
        [name, options @ ..] => (name.as_str(), options),
        [] => ("", args),
    };

    if !options.is_empty() {
        warn!(?options, "ignoring options, `new` does not take any yet");
    }

    let cmd = NewCommand::new(name, working_dir)?;
    debug!(target_dir = %cmd.output_dir.display(), "scaffolding project");
    cmd.execute()?;

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_spec_layout() {
        let spec = ProjectSpec::for_app("blog");

        assert_eq!(spec.namespace, "Blog");
        assert_eq!(spec.directories.len(), 11);
        assert_eq!(spec.files.len(), 9);
        assert!(spec.directories.contains(&PathBuf::from("lib/Blog/Controller")));
        assert!(spec.directories.contains(&PathBuf::from("lib/Blog/Model")));
    }

    #[test]
    fn test_spec_directories_precede_their_files() {
        let spec = ProjectSpec::for_app("blog");

        for file in &spec.files {
            let parent = file.path.parent().unwrap();
            assert!(
                spec.directories.iter().any(|dir| dir == parent),
                "no directory planned for {}",
                file.path.display()
            );
        }
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let result = NewCommand::new("", temp_dir.path());
        assert!(matches!(result, Err(CliError::Usage(_))));
    }

    #[test]
    fn test_new_rejects_names_leaving_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let work = temp_dir.path().join("work");
        fs::create_dir(&work).unwrap();

        for name in ["../escaped", "nested/blog", ".."] {
            let result = NewCommand::new(name, &work);
            assert!(matches!(result, Err(CliError::Usage(_))), "{name}");
        }
        assert!(!temp_dir.path().join("escaped").exists());
    }

    #[test]
    fn test_new_rejects_existing_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("blog"), "").unwrap();

        let result = NewCommand::new("blog", temp_dir.path());
        assert!(matches!(result, Err(CliError::AlreadyExists(_))));
    }

    #[test]
    fn test_new_accepts_free_name() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = NewCommand::new("blog", temp_dir.path()).unwrap();
        assert_eq!(cmd.spec().app_name, "blog");
        assert!(!temp_dir.path().join("blog").exists());
    }
}
