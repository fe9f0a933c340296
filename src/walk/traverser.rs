//! Traverser - the recursive control loop

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::dispatch::{Action, Dispatcher};

use super::entry::EntryKind;
use super::path_buffer::PathBuffer;
use super::table::DirectoryTable;

/// Everything decided before the walk starts: the filter key, the action to
/// take on matches, and the working directory the program was invoked from
/// (children of `--exec` are run from there, not from wherever the
/// traversal has descended to).
#[derive(Debug)]
pub struct TraversalContext {
    pub key: Option<String>,
    pub action: Action,
    pub start_dir: PathBuf,
}

/// Depth-first recursive walker.
///
/// Each frame builds one `DirectoryTable`, extends the shared `PathBuffer`
/// per entry, dispatches matches in sorted order, and recurses into
/// subdirectories. Table building chdirs into the directory so children
/// resolve by bare name; the frame chdirs back out (`..`) on unwind, so the
/// working directory round-trips across arbitrary depth. Frames are
/// strictly sequential - only one path is ever materialized.
pub struct Traverser<W: Write> {
    key: Option<String>,
    dispatcher: Dispatcher<W>,
    buffer: PathBuffer,
}

impl<W: Write> Traverser<W> {
    pub fn new(ctx: TraversalContext, out: W) -> Self {
        Self {
            key: ctx.key,
            dispatcher: Dispatcher::new(ctx.action, ctx.start_dir, out),
            buffer: PathBuffer::new(),
        }
    }

    /// Walk the tree rooted at `root`. A root that is a plain file is
    /// dispatched once with no recursion; an inaccessible root is a no-op.
    pub fn run(&mut self, root: &str) -> io::Result<()> {
        self.walk(root, 0, true)
    }

    fn walk(&mut self, path: &str, offset: usize, is_root: bool) -> io::Result<()> {
        let Some(table) = DirectoryTable::build(path, self.key.as_deref(), is_root) else {
            return Ok(());
        };

        for entry in table.entries() {
            let new_offset = self.buffer.extend(&entry.name, offset);
            match entry.kind {
                EntryKind::NonDirectory => {
                    // Table filtering already vetted the name.
                    self.dispatcher.dispatch(self.buffer.as_str())?;
                }
                EntryKind::Directory => {
                    // The key gates whether a directory is reported, never
                    // whether it is walked: matches deeper down must still
                    // be reachable.
                    if self.matches_key(&entry.name) {
                        self.dispatcher.dispatch(self.buffer.as_str())?;
                    }
                    self.walk(&entry.name, new_offset, false)?;
                }
            }
        }

        // Non-root frames entered `path` during table building; undo that.
        // The root frame never descended, so it has nothing to restore.
        if !is_root {
            if let Err(e) = env::set_current_dir("..") {
                eprintln!("sfind: ..: {}", e);
            }
        }
        Ok(())
    }

    fn matches_key(&self, name: &str) -> bool {
        match self.key.as_deref() {
            None => true,
            Some(k) => name.contains(k),
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.dispatcher.into_output()
    }
}
