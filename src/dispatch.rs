//! Per-match dispatch: print the path, or run a command with `{}` replaced

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A parsed `--exec` command: the argument vector (program name first) plus
/// the indices of every literal `{}` argument.
///
/// Slot indices are fixed once built. Dispatch never mutates the template;
/// each match materializes a fresh argv with all slots set to the same path.
#[derive(Debug, Clone)]
pub struct CommandTemplate {
    argv: Vec<String>,
    slots: Vec<usize>,
}

impl CommandTemplate {
    pub fn new(argv: Vec<String>) -> Self {
        let slots = argv
            .iter()
            .enumerate()
            .filter(|(_, a)| a.as_str() == "{}")
            .map(|(i, _)| i)
            .collect();
        Self { argv, slots }
    }

    /// A template with no arguments at all; dispatching it is a no-op.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Build the argv for one dispatch, with every slot overwritten by `path`.
    fn materialize(&self, path: &str) -> Vec<String> {
        let mut argv = self.argv.clone();
        for &i in &self.slots {
            argv[i] = path.to_string();
        }
        argv
    }
}

/// What to do with a matched path.
#[derive(Debug, Clone)]
pub enum Action {
    Print,
    Exec(CommandTemplate),
}

/// Executes the configured action against each matched path.
///
/// In exec mode the child's working directory is reset to `start_dir` (the
/// directory the program was invoked from) because the traversal has
/// chdir'd deep into the tree by the time a match fires; a relative program
/// path must still resolve where the user typed it. The parent waits for
/// each child before continuing, so at most one command is ever in flight.
pub struct Dispatcher<W: Write> {
    action: Action,
    start_dir: PathBuf,
    out: W,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(action: Action, start_dir: PathBuf, out: W) -> Self {
        Self {
            action,
            start_dir,
            out,
        }
    }

    /// Dispatch one matched path. Only output-stream failures propagate;
    /// exec failures are reported and the traversal moves on.
    pub fn dispatch(&mut self, path: &str) -> io::Result<()> {
        match &self.action {
            Action::Print => self.report(path),
            Action::Exec(template) => {
                run(path, template, &self.start_dir);
                Ok(())
            }
        }
    }

    fn report(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "{}", path)
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.out
    }
}

/// Spawn the templated command for one match and wait for it.
///
/// Child stdio is inherited and its exit status is not folded into ours; a
/// command that cannot be spawned (or whose program does not exist) is
/// reported and skipped.
fn run(path: &str, template: &CommandTemplate, start_dir: &Path) {
    if template.is_empty() {
        return;
    }
    let argv = template.materialize(path);
    match Command::new(&argv[0])
        .args(&argv[1..])
        .current_dir(start_dir)
        .status()
    {
        Ok(_) => {}
        Err(e) => eprintln!("sfind: {}: {}", argv[0], e),
    }
}
