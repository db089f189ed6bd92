//! Message catalogs loaded from TOML or JSON.
//!
//! File shape (TOML shown; JSON mirrors it):
//!
//! ```toml
//! locale = "de"
//!
//! [messages]
//! "Hello" = "Hallo"
//! "Hi %(name)s" = "Hallo %(name)s"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Translator;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("parsing JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported catalog format {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// msgid -> translation map for one locale. Unknown msgids translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            messages: HashMap::new(),
        }
    }

    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(msgid.into(), translation.into());
    }

    pub fn lookup(&self, msgid: &str) -> Option<&str> {
        self.messages.get(msgid).map(String::as_str)
    }

    /// Loads a catalog, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog: Catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&data).map_err(|source| CatalogError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => serde_json::from_str(&data).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(
            "loaded {} messages for locale {:?} from {}",
            catalog.messages.len(),
            catalog.locale,
            path.display()
        );
        Ok(catalog)
    }
}

impl Translator for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        self.lookup(msgid).unwrap_or(msgid).to_string()
    }
}
