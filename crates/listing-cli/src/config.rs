//! Optional TOML configuration.
//!
//! ```toml
//! [sources]
//! hints = "source/procedure_hints.csv"
//! direct_cards = "source/dpc_cards.csv"
//!
//! [output]
//! dir = "surgeon_listings"
//!
//! [roster]
//! include_best_practice_owners = false
//! ```
//!
//! Missing keys fall back to the defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use listing_model::ListingOptions;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "listings.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn parse_config(path: &Path, content: &str) -> Result<ListingOptions, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load listing options.
///
/// An explicit path must exist and parse. Without one, [`DEFAULT_CONFIG_FILE`]
/// in `base_dir` is used when present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, base_dir: &Path) -> Result<ListingOptions, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (base_dir.join(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            let options = parse_config(&path, &content)?;
            info!(path = %path.display(), "loaded configuration");
            Ok(options)
        }
        Err(source) if !required && source.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(ListingOptions::default())
        }
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}
