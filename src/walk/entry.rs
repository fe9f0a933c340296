//! Directory entry types

/// Classification of a directory entry, determined without following
/// symbolic links (`lstat` semantics): a symlink to a directory counts as
/// `NonDirectory` and is never descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    NonDirectory,
}

/// One member of a scanned directory: a bare name (no path separators for
/// non-root entries) plus its kind.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
