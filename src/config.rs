//! Startup configuration: command line, then `SONGBOOK_*` environment
//! variables, then `config.json` in the songbook config directory, then
//! compiled defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::app::state::DEFAULT_PERFORMER_VISIBLE_COUNT;
use crate::catalog::CatalogSource;
use crate::facet::visibility::clamp_visible_count;

pub const DEFAULT_CATALOG: &str = "data/song.json";

#[derive(Debug, Parser)]
#[command(version, about = "Browse a song catalog with faceted search")]
pub struct Args {
    /// Catalog JSON file or http(s) URL
    #[arg(short, long, env = "SONGBOOK_CATALOG")]
    pub catalog: Option<String>,

    /// Performer chips shown before "show all" (1-50)
    #[arg(short = 'n', long, env = "SONGBOOK_PERFORMER_SLOTS")]
    pub performer_slots: Option<usize>,

    /// Reload the catalog when the file changes on disk
    #[arg(short, long, env = "SONGBOOK_WATCH")]
    pub watch: bool,

    /// Where to write logs
    #[arg(long, env = "SONGBOOK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, env = "SONGBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// The optional `config.json`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub catalog: Option<String>,
    pub performer_visible_count: Option<usize>,
    pub watch: Option<bool>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// A missing file is `Ok(None)`; an unreadable or malformed one is an error.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        let config = serde_json::from_str(&data)
            .with_context(|| format!("malformed config {}", path.display()))?;
        Ok(Some(config))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog: CatalogSource,
    pub performer_visible_count: usize,
    pub watch: bool,
    pub log_file: PathBuf,
}

impl Config {
    pub fn resolve(args: &Args, file: &FileConfig) -> Self {
        let catalog = args
            .catalog
            .as_deref()
            .or(file.catalog.as_deref())
            .unwrap_or(DEFAULT_CATALOG);
        let slots = args
            .performer_slots
            .or(file.performer_visible_count)
            .unwrap_or(DEFAULT_PERFORMER_VISIBLE_COUNT);

        Self {
            catalog: CatalogSource::parse(catalog),
            performer_visible_count: clamp_visible_count(slots),
            watch: args.watch || file.watch.unwrap_or(false),
            log_file: args
                .log_file
                .clone()
                .or_else(|| file.log_file.clone())
                .unwrap_or_else(|| config_dir().join("songbook.log")),
        }
    }

    pub fn config_path(args: &Args) -> PathBuf {
        args.config
            .clone()
            .unwrap_or_else(|| config_dir().join("config.json"))
    }
}

pub fn config_dir() -> PathBuf {
    let base = if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(config)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".config")
    } else {
        PathBuf::from(".")
    };
    base.join("songbook")
}
