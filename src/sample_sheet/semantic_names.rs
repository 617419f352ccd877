// src/sample_sheet/semantic_names.rs
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Raw sample identifier -> display name, read from a JSON object.
#[derive(Debug, Default, Clone)]
pub struct SemanticNames {
    names: HashMap<String, String>,
}

impl SemanticNames {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let names: HashMap<String, String> =
            serde_json::from_str(&text).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!("loaded {} semantic names from {}", names.len(), path.display());
        Ok(SemanticNames { names })
    }

    pub fn from_map(names: HashMap<String, String>) -> Self {
        SemanticNames { names }
    }

    /// A miss is an error; the raw identifier is never used as a fallback.
    pub fn resolve(&self, sample_id: &str) -> Result<&str> {
        self.names
            .get(sample_id)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownSample { sample: sample_id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
