//! DirectoryTable - sorted snapshot of one directory level

use std::env;
use std::fs;
use std::path::Path;

use super::entry::{Entry, EntryKind};

/// A sorted snapshot of one directory's surviving entries.
///
/// Built once per traversal frame and consumed entirely by it. For the
/// traversal root the table holds exactly one entry (the root path itself);
/// for every other level it holds the directory's children, minus entries
/// removed by the filter policy.
#[derive(Debug)]
pub struct DirectoryTable {
    entries: Vec<Entry>,
}

impl DirectoryTable {
    /// Build the table for one directory level.
    ///
    /// Root scans classify `path` itself and never filter it. Non-root scans
    /// open `path`, change the working directory into it (children are then
    /// classified by bare name, and recursion uses relative paths), and
    /// enumerate its members.
    ///
    /// Returns `None` when the level cannot be entered at all: the root
    /// cannot be classified, or the directory cannot be opened or chdir'd
    /// into. The caller must not recurse in that case. An empty table is a
    /// different outcome - the frame descended and found nothing.
    pub fn build(path: &str, key: Option<&str>, is_root: bool) -> Option<Self> {
        if is_root {
            let kind = classify(Path::new(path))?;
            return Some(Self {
                entries: vec![Entry::new(path, kind)],
            });
        }

        let reader = match fs::read_dir(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("sfind: {}: {}", path, e);
                return None;
            }
        };
        if let Err(e) = env::set_current_dir(path) {
            eprintln!("sfind: {}: {}", path, e);
            return None;
        }

        let mut entries = Vec::new();
        for dent in reader {
            let dent = match dent {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("sfind: {}: {}", path, e);
                    continue;
                }
            };
            // read_dir never yields `.` or `..`
            let name = dent.file_name().to_string_lossy().into_owned();
            let Some(kind) = classify(Path::new(&name)) else {
                continue;
            };
            if !keep_entry(&name, kind, key) {
                continue;
            }
            entries.push(Entry::new(name, kind));
        }

        sort_entries(&mut entries);
        Some(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classify a path without following symlinks. A stat failure is reported
/// and yields `None`; the caller skips that entry.
fn classify(path: &Path) -> Option<EntryKind> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => Some(EntryKind::Directory),
        Ok(_) => Some(EntryKind::NonDirectory),
        Err(e) => {
            eprintln!("sfind: {}: {}", path.display(), e);
            None
        }
    }
}

/// Filter policy at table-build time: a non-empty key excludes only
/// non-directory entries whose name lacks the key as a substring.
/// Directories always survive the build so deeper matches stay reachable;
/// whether a directory is itself reported is decided at dispatch time.
fn keep_entry(name: &str, kind: EntryKind, key: Option<&str>) -> bool {
    match key {
        Some(k) if kind == EntryKind::NonDirectory => name.contains(k),
        _ => true,
    }
}

/// Case-insensitive ascending order; std's stable sort keeps enumeration
/// order on names that fold equal.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}
