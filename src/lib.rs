//! Sfind - a minimal recursive find: substring match, then print or exec

pub mod dispatch;
pub mod error;
pub mod rlimit;
pub mod walk;

pub use dispatch::{Action, CommandTemplate, Dispatcher};
pub use error::Error;
pub use walk::{DirectoryTable, Entry, EntryKind, PathBuffer, TraversalContext, Traverser};
