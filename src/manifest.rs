//! Pipeline configuration: which topics to generate and which files to patch.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use scene_forge_core::models::Topic;

use crate::{content, pacing};

const APP_NAME: &str = "scene-forge";
const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Topics to assemble, in emission order.
    pub topics: Vec<Topic>,
    /// Files to lengthen, in processing order. Relative paths resolve
    /// against the scene directory.
    #[serde(default)]
    pub patch_targets: Vec<String>,
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            topics: content::builtin_topics(),
            patch_targets: pacing::DEFAULT_TARGETS
                .iter()
                .map(|target| target.to_string())
                .collect(),
        }
    }
}

impl SceneManifest {
    /// Resolve the manifest for this run.
    ///
    /// An explicit path must exist and parse. Without one, the user's config
    /// directory is consulted, then the built-in manifest is used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match get_manifest_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;

        let manifest = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))?;

        Ok(manifest)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }
}

fn get_manifest_path() -> Option<PathBuf> {
    let mut path = config_dir()?;
    path.push(APP_NAME);
    path.push(MANIFEST_FILE);
    Some(path)
}
