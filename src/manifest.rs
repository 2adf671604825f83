//! Icon manifest fragment for browser extensions
//!
//! This module defines the subset of an extension `manifest.json` that refers to
//! icons, so the generated files can be pasted into (or merged with) a manifest.
//! The same size-to-file map is used for both the top-level `icons` key and the
//! toolbar action's `default_icon`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the manifest fragment written next to the icons
pub const MANIFEST_FILE: &str = "icons.json";

/// Map of icon size in pixels to file name, ordered by size
pub type IconMap = BTreeMap<u32, String>;

/// Root structure of the manifest fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    /// Icons used by the browser for the extension itself
    pub icons: IconMap,

    /// Toolbar action icons
    pub action: Action,
}

/// The `action` section of an extension manifest
#[derive(Serialize, Debug, Clone, Default)]
pub struct Action {
    /// Icons shown on the toolbar button
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub default_icon: IconMap,
}

impl IconManifest {
    /// Creates an empty manifest fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an icon under both `icons` and `action.default_icon`
    ///
    /// # Arguments
    /// * `size` - Side length of the icon in pixels
    /// * `filename` - File name relative to the manifest
    pub fn add_icon(&mut self, size: u32, filename: String) {
        self.action.default_icon.insert(size, filename.clone());
        self.icons.insert(size, filename);
    }
}

/// Write the manifest fragment into `dir`
///
/// # Returns
/// The path of the written file
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_manifest(dir: &Path, manifest: &IconManifest) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;

    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest {}", path.display()))?;

    Ok(path)
}
