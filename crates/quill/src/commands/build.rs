//! `quill build` command implementation.
//!
//! Bakes the content pipeline's outputs into a static directory:
//!
//! - `posts/<id>/index.html` for every publishable post (rendered body)
//! - `posts/index.json` with the date-sorted listing
//! - `sections.json` with the navigation sections
//!
//! Drafts are skipped during generation but remain loadable by id; the
//! presentational wrapper around the rendered bodies is the page layer's
//! concern, not ours.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use quill_config::{CliSettings, Config};
use quill_content::PostStore;
use quill_storage::{FsStorage, Storage};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (default: public/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Markdown posts directory (overrides config).
    #[arg(short, long)]
    posts_dir: Option<PathBuf>,

    /// Page directory for section derivation (overrides config).
    #[arg(long)]
    pages_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            posts_dir: self.posts_dir.clone(),
            pages_dir: self.pages_dir.clone(),
            output_dir: self.output_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!("Posts: {}", config.paths.posts_dir.display()));
        output.info(&format!("Output: {}", config.paths.output_dir.display()));

        let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.paths.posts_dir.clone()));
        let store = PostStore::new(storage);

        let pages = FsStorage::new(config.paths.pages_dir.clone());
        let sections = config.section_source().resolve(&pages)?;

        let out = &config.paths.output_dir;
        let posts_out = out.join("posts");
        fs::create_dir_all(&posts_out)?;

        // Detail pages: publishable posts only
        let publishable = store.publishable_ids()?;
        for path in &publishable {
            let post = store.load(&path.id)?;
            let page_dir = posts_out.join(&path.id);
            fs::create_dir_all(&page_dir)?;
            fs::write(page_dir.join("index.html"), &post.html)?;
            tracing::debug!(id = %path.id, href = %path.href, "Generated detail page");
        }

        // Listing manifest, newest first
        let listing = store.sorted_listing()?;
        fs::write(
            posts_out.join("index.json"),
            serde_json::to_string_pretty(&listing)?,
        )?;

        // Navigation sections
        fs::write(
            out.join("sections.json"),
            serde_json::to_string_pretty(&sections)?,
        )?;

        let drafts = store.all_ids()?.len() - publishable.len();
        if drafts > 0 {
            output.warning(&format!("Skipped {drafts} draft post(s)"));
        }

        output.success(&format!(
            "Built {} post(s) and {} section(s) to {}",
            publishable.len(),
            sections.len(),
            out.display()
        ));
        Ok(())
    }
}
