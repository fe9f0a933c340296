//! Incremental path reconstruction for the traversal

use std::path::Path;

/// A single growable buffer holding the path currently being materialized.
///
/// The traversal shares one `PathBuffer` across all recursion frames. Each
/// frame remembers the offset (prefix length) established by its caller and
/// appends entry names at that offset, so sibling entries overwrite each
/// other and only one full path exists at a time.
#[derive(Debug, Default)]
pub struct PathBuffer {
    buf: String,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Append `segment` at byte `offset`, inserting a `/` separator unless
    /// the offset is 0 or the byte just before it is already a separator.
    ///
    /// Returns the new offset (the length of the reconstructed path). The
    /// root call uses `offset = 0` and writes its path verbatim.
    pub fn extend(&mut self, segment: &str, offset: usize) -> usize {
        self.buf.truncate(offset);
        if offset > 0 && !self.buf.ends_with('/') {
            self.buf.push('/');
        }
        self.buf.push_str(segment);
        self.buf.len()
    }

    /// The currently materialized path.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.buf)
    }
}
