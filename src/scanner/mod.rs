use std::fs;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::TreeConfig;
use crate::error::{AppError, AppResult};
use crate::types::{Node, ScanOptions, ScanSummary};

/// Assembles the full forest from the configured root directory names.
///
/// The base container must exist as a directory; otherwise the run aborts
/// before any traversal. Root names are processed in configured order, never
/// re-sorted. A root that resolves to nothing is skipped with a warning and
/// the run continues.
pub fn build_forest(
    base_location: &Path,
    tree: &TreeConfig,
    options: &ScanOptions,
    summary: &mut ScanSummary,
) -> AppResult<Vec<Node>> {
    let globs = build_globset(&options.excludes)?;

    if !base_location.is_dir() {
        return Err(AppError::BaseDirMissing {
            base_dir: tree.base_dir.clone(),
            expected: base_location.to_path_buf(),
            roots: tree.roots.join(", "),
        });
    }

    let mut forest = Vec::with_capacity(tree.roots.len());
    for name in &tree.roots {
        let root_path = base_location.join(name);
        let root_web_path = join_web_path(&tree.base_dir, name);
        if root_path.is_dir() {
            summary.total_dirs += 1;
            let children = scan_directory(&root_path, &root_web_path, options, &globs, summary);
            forest.push(Node::Folder { name: name.clone(), path: root_web_path, children });
        } else if root_path.is_file() && matches_extension(name, &options.extension) {
            // Wurzel kann auch eine Datei direkt im Container sein
            summary.total_files += 1;
            forest.push(Node::File { name: name.clone(), path: root_web_path });
        } else {
            summary.warnings += 1;
            tracing::warn!(
                "Content root '{}' not found or not a directory/{} file at '{}'",
                name,
                options.extension,
                root_path.display()
            );
        }
    }
    Ok(forest)
}

/// Recursively scans one directory into an ordered list of nodes.
///
/// Entries are sorted ascending by name (byte order) before processing, so
/// folders and files stay interleaved exactly as listed. Unrecognized entries
/// are skipped silently. An unreadable directory yields an empty list and a
/// warning; siblings and ancestors continue normally.
pub fn scan_directory(
    dir: &Path,
    web_base: &str,
    options: &ScanOptions,
    globs: &GlobSet,
    summary: &mut ScanSummary,
) -> Vec<Node> {
    let rd = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            summary.warnings += 1;
            tracing::warn!("Error accessing {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries: Vec<(String, fs::DirEntry)> =
        rd.flatten().map(|e| (e.file_name().to_string_lossy().into_owned(), e)).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut items = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        let path = entry.path();
        if matches_excludes(&path, globs) {
            summary.skipped += 1;
            continue;
        }

        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                summary.warnings += 1;
                tracing::warn!("Failed to stat {}: {}", path.display(), e);
                continue;
            }
        };

        // Symlinks nur auf Wunsch auflösen; sonst wie andere Sondereinträge überspringen
        let (is_dir, is_file) = if file_type.is_symlink() {
            if !options.follow_symlinks {
                summary.skipped += 1;
                tracing::debug!("Skipping symlink {}", path.display());
                continue;
            }
            match fs::metadata(&path) {
                Ok(md) => (md.is_dir(), md.is_file()),
                Err(e) => {
                    summary.warnings += 1;
                    tracing::warn!("Failed to resolve symlink {}: {}", path.display(), e);
                    continue;
                }
            }
        } else {
            (file_type.is_dir(), file_type.is_file())
        };

        let item_web_path = join_web_path(web_base, &name);
        if is_dir {
            summary.total_dirs += 1;
            let children = scan_directory(&path, &item_web_path, options, globs, summary);
            items.push(Node::Folder { name, path: item_web_path, children });
        } else if is_file && matches_extension(&name, &options.extension) {
            summary.total_files += 1;
            items.push(Node::File { name, path: item_web_path });
        } else {
            // Falsche Endung oder Sondereintrag: bewusst still überspringen
            summary.skipped += 1;
            tracing::debug!("Skipping {}", path.display());
        }
    }
    items
}

/// Joins a web base path and an entry name with a single forward slash,
/// trimming stray leading/trailing slashes from both parts.
pub fn join_web_path(base: &str, name: &str) -> String {
    let base = base.trim_matches('/');
    let name = name.trim_matches('/');
    if base.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

/// Case-insensitive extension match on the file name.
pub fn matches_extension(name: &str, extension: &str) -> bool {
    name.to_lowercase().ends_with(&extension.to_lowercase())
}

pub fn build_globset(patterns: &[String]) -> AppResult<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        if p.trim().is_empty() {
            continue;
        }
        // Normalisiere Backslashes zu Slashes, damit Muster plattformunabhängig mit
        // der Pfadnormalisierung in `matches_excludes` (\\ -> /) übereinstimmen.
        let norm = p.trim().replace('\\', "/");
        let g = Glob::new(&norm)?;
        b.add(g);
    }
    Ok(b.build()?)
}

pub fn matches_excludes(path: &Path, set: &GlobSet) -> bool {
    if set.is_empty() {
        return false;
    }
    let s = path.to_string_lossy().replace('\\', "/");
    set.is_match(&s)
}
