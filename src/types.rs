use serde::{Deserialize, Serialize};

use crate::config::ScanDefaultsConfig;

/// A single entry of the manifest tree.
///
/// Serialized with an internal `type` tag (`"folder"` / `"file"`), so a folder
/// always carries a `children` array (possibly empty) while a file never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder {
        name: String,
        path: String,
        children: Vec<Node>,
    },
    File {
        name: String,
        path: String,
    },
}

impl Node {
    /// Display name, the final path segment.
    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => name,
        }
    }

    /// Web-facing identifier, forward-slash separated, no leading/trailing slash.
    pub fn path(&self) -> &str {
        match self {
            Node::Folder { path, .. } | Node::File { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Recognized file extension including the leading dot, matched case-insensitively.
    pub extension: String,
    /// Whether symlinked entries are resolved and classified by their target.
    pub follow_symlinks: bool,
    /// Glob patterns; matching entries are skipped before classification.
    pub excludes: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { extension: ".pdf".to_string(), follow_symlinks: false, excludes: vec![] }
    }
}

impl From<&ScanDefaultsConfig> for ScanOptions {
    fn from(cfg: &ScanDefaultsConfig) -> Self {
        Self {
            extension: cfg.extension.clone(),
            follow_symlinks: cfg.follow_symlinks,
            excludes: cfg.excludes.clone(),
        }
    }
}

/// Counters accumulated over one run; reported via the log, never serialized
/// into the artifact.
#[derive(Debug, Default, Clone)]
pub struct ScanSummary {
    pub total_dirs: u64,
    pub total_files: u64,
    /// Entries silently skipped: wrong extension, special file types, excluded
    /// or symlinked entries.
    pub skipped: u64,
    /// Unreadable directories, failed stats and unresolvable roots.
    pub warnings: u64,
}
