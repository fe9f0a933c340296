use std::io;
use thiserror::Error;

/// Fatal, run-ending failures.
///
/// Everything recoverable (unreadable subdirectory, unstattable entry,
/// spawn failure for one match) is reported to stderr where it happens and
/// the walk continues; only these variants abort the program.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no closing ';' for --exec command")]
    UnterminatedExec,

    #[error("cannot resolve starting directory")]
    StartDir(#[source] io::Error),

    #[error("cannot set process limit")]
    ProcessLimit(#[source] io::Error),

    #[error("error writing output")]
    Output(#[source] io::Error),
}
