//! Playable file discovery.

use car_common::consts::MEDIA_EXTENSIONS;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// `true` when `path` has a playable extension (case-insensitive).
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

/// Every playable file below `root`, recursively, sorted by path.
///
/// Unreadable entries are skipped.
pub fn find_media_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| {
            entry
                .map_err(|e| debug!("Skipping media entry: {}", e))
                .ok()
        })
        .filter(|entry| entry.file_type().is_file() && is_media_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}
