//! Template rendering
//!
//! Every file the CLI writes comes from a literal template stored in
//! [`files`] or [`components`]. Templates are registered once with
//! Handlebars under a [`TemplateId`] and rendered against a
//! [`SubstitutionMap`].
//!
//! Values are injected verbatim: no HTML or code escaping is performed, so
//! template authors are responsible for keeping substituted content safe.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use handlebars::Handlebars;

pub mod components;
pub mod files;

/// Placeholder key to replacement value
pub type SubstitutionMap = BTreeMap<String, String>;

/// Build a [`SubstitutionMap`] from key/value pairs
#[must_use]
pub fn substitutions(pairs: &[(&str, &str)]) -> SubstitutionMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// Identifies one of the built-in templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// `app.psgi`
    EntryPoint,
    /// `cpanfile`
    Manifest,
    /// `.gitignore`
    GitIgnore,
    /// `README.md`
    Readme,
    /// `templates/layouts/main.tt`
    Layout,
    /// `public/css/style.css`
    Stylesheet,
    /// `templates/index.tt`
    HomePage,
    /// `t/01-basic.t`
    TestStub,
    /// `pebble.toml`
    Config,
    /// Generated controller class
    Controller,
    /// Generated model class
    Model,
    /// Generated page fragment
    Fragment,
}

impl TemplateId {
    /// All templates, in registration order
    pub const ALL: [Self; 12] = [
        Self::EntryPoint,
        Self::Manifest,
        Self::GitIgnore,
        Self::Readme,
        Self::Layout,
        Self::Stylesheet,
        Self::HomePage,
        Self::TestStub,
        Self::Config,
        Self::Controller,
        Self::Model,
        Self::Fragment,
    ];

    /// Name the template is registered under
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EntryPoint => "entry_point",
            Self::Manifest => "manifest",
            Self::GitIgnore => "gitignore",
            Self::Readme => "readme",
            Self::Layout => "layout",
            Self::Stylesheet => "stylesheet",
            Self::HomePage => "home_page",
            Self::TestStub => "test_stub",
            Self::Config => "config",
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Fragment => "fragment",
        }
    }

    /// Literal template text
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::EntryPoint => files::ENTRY_POINT,
            Self::Manifest => files::MANIFEST,
            Self::GitIgnore => files::GITIGNORE,
            Self::Readme => files::README_MD,
            Self::Layout => files::TEMPLATE_LAYOUT,
            Self::Stylesheet => files::STATIC_CSS,
            Self::HomePage => files::TEMPLATE_HOME,
            Self::TestStub => files::TEST_BASIC,
            Self::Config => files::CONFIG_TOML,
            Self::Controller => components::CONTROLLER,
            Self::Model => components::MODEL,
            Self::Fragment => components::FRAGMENT,
        }
    }

    /// Keys that must be present in the substitution map
    #[must_use]
    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::EntryPoint
            | Self::Readme
            | Self::Layout
            | Self::HomePage
            | Self::TestStub
            | Self::Config => &["app_name"],
            Self::Manifest | Self::GitIgnore | Self::Stylesheet => &[],
            Self::Controller => &["namespace", "name", "route"],
            Self::Model => &["namespace", "name"],
            Self::Fragment => &["name"],
        }
    }
}

/// Renders built-in templates
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Register every built-in template
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated files are code and markup, not HTML-escaped output
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for id in TemplateId::ALL {
            handlebars
                .register_template_string(id.name(), id.source())
                .with_context(|| format!("Failed to register template: {}", id.name()))?;
        }

        Ok(Self { handlebars })
    }

    /// Render a template
    ///
    /// # Errors
    ///
    /// Returns an error if a key required by the template is missing from
    /// `vars`, or if rendering fails.
    pub fn render(&self, id: TemplateId, vars: &SubstitutionMap) -> Result<String> {
        if let Some(missing) = id
            .required_keys()
            .iter()
            .find(|key| !vars.contains_key(**key))
        {
            bail!(
                "Template '{}' requires placeholder '{missing}'",
                id.name()
            );
        }

        self.handlebars
            .render(id.name(), vars)
            .with_context(|| format!("Failed to render template: {}", id.name()))
    }
}
