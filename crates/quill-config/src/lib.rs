//! Configuration management for quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [content]
//! posts_dir = "content/posts"
//! pages_dir = "pages"
//!
//! [build]
//! output_dir = "public"
//!
//! [[site.sections]]
//! name = "Home"
//! href = "/"
//! ```
//!
//! Relative paths are resolved against the directory containing the config
//! file. When no `[[site.sections]]` entries are declared, the navigation
//! sections are derived from the page directory at build time.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use quill_site::{Section, SectionSource};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override posts content directory.
    pub posts_dir: Option<PathBuf>,
    /// Override pages directory.
    pub pages_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Build configuration.
    build: BuildConfigRaw,
    /// Site configuration.
    site: SiteConfigRaw,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: Paths,
    /// Declared navigation sections, if any (set after loading).
    #[serde(skip)]
    sections: Option<Vec<Section>>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    posts_dir: Option<String>,
    pages_dir: Option<String>,
}

/// Raw build configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    sections: Option<Vec<Section>>,
}

/// Resolved directory paths.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Paths {
    /// Directory of markdown posts.
    pub posts_dir: PathBuf,
    /// Page directory whose subdirectories become navigation sections.
    pub pages_dir: PathBuf,
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration.
    ///
    /// When `config_path` is `None`, searches for `quill.toml` in the
    /// current directory and its parents, falling back to defaults relative
    /// to the working directory.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// The navigation section source: declared list if configured,
    /// otherwise derived from the page directory.
    #[must_use]
    pub fn section_source(&self) -> SectionSource {
        match &self.sections {
            Some(sections) => SectionSource::Declared(sections.clone()),
            None => SectionSource::Derived,
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(posts_dir) = &settings.posts_dir {
            self.paths.posts_dir.clone_from(posts_dir);
        }
        if let Some(pages_dir) = &settings.pages_dir {
            self.paths.pages_dir.clone_from(pages_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            build: BuildConfigRaw::default(),
            site: SiteConfigRaw::default(),
            paths: Paths {
                posts_dir: base.join("content/posts"),
                pages_dir: base.join("pages"),
                output_dir: base.join("public"),
            },
            sections: None,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve raw string paths against the config file's directory.
    fn resolve(&mut self, base: &Path) {
        let defaults = Self::default_with_base(base);
        self.paths = Paths {
            posts_dir: resolve_path(self.content.posts_dir.as_deref(), base)
                .unwrap_or(defaults.paths.posts_dir),
            pages_dir: resolve_path(self.content.pages_dir.as_deref(), base)
                .unwrap_or(defaults.paths.pages_dir),
            output_dir: resolve_path(self.build.output_dir.as_deref(), base)
                .unwrap_or(defaults.paths.output_dir),
        };
        self.sections = self.site.sections.take();
    }
}

/// Resolve an optional raw path string against a base directory.
fn resolve_path(raw: Option<&str>, base: &Path) -> Option<PathBuf> {
    let raw = raw?;
    let path = Path::new(raw);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(base.join(path))
    }
}
