//! Recursive directory traversal
//!
//! One `DirectoryTable` is built per directory level, its entries are
//! visited in case-insensitive sorted order, and the shared `PathBuffer`
//! reconstructs the full path for each entry as the `Traverser` descends.
//! Traversal is synchronous and depth-first; the working directory follows
//! the descent and is restored on unwind.

mod entry;
mod path_buffer;
mod table;
mod traverser;

pub use entry::{Entry, EntryKind};
pub use path_buffer::PathBuffer;
pub use table::DirectoryTable;
pub use traverser::{TraversalContext, Traverser};
