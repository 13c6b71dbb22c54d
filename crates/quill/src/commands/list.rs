//! `quill list` command implementation.
//!
//! Prints the publishable post listing to the terminal, newest first,
//! mirroring what the listing page consumes.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use quill_config::{CliSettings, Config};
use quill_content::PostStore;
use quill_storage::{FsStorage, Storage};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Markdown posts directory (overrides config).
    #[arg(short, long)]
    posts_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            posts_dir: self.posts_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.paths.posts_dir.clone()));
        let store = PostStore::new(storage);

        let listing = store.sorted_listing()?;
        for post in &listing {
            let date = post.meta.date.as_deref().unwrap_or("          ");
            let title = post.meta.title.as_deref().unwrap_or(&post.id);
            output.info(&format!("{date}  {:<24}  {title}", post.id));
        }

        let drafts = store.all_ids()?.len() - listing.len();
        if drafts > 0 {
            output.warning(&format!("{drafts} draft post(s) not listed"));
        }

        output.success(&format!("{} publishable post(s)", listing.len()));
        Ok(())
    }
}
