//! CLI entry point for sfind

use std::env;
use std::io;
use std::process;

use clap::Parser;
use sfind::{Action, CommandTemplate, Error, TraversalContext, Traverser, rlimit};

#[derive(Parser, Debug)]
#[command(name = "sfind")]
#[command(about = "A minimal recursive find: substring match, then print or exec")]
#[command(version)]
struct Args {
    /// Directory or file to start from
    #[arg(default_value = ".")]
    path: String,

    /// Case-sensitive substring that entry names must contain
    #[arg(short = 'n', long = "name", value_name = "SUBSTRING")]
    name: Option<String>,

    /// Print each matched path, one per line
    #[arg(short = 'p', long = "print", conflicts_with = "exec")]
    print: bool,

    /// Run a command per match; the list ends at a literal ';' and every
    /// bare '{}' argument is replaced with the matched path
    #[arg(
        short = 'x',
        long = "exec",
        value_name = "CMD",
        num_args = 1..,
        value_terminator = ";",
        allow_hyphen_values = true
    )]
    exec: Vec<String>,

    /// Soft cap on simultaneously alive processes (RLIMIT_NPROC)
    #[arg(long = "proc-limit", value_name = "N", default_value_t = rlimit::DEFAULT_PROC_LIMIT)]
    proc_limit: u64,
}

fn run(args: Args) -> Result<(), Error> {
    let action = if !args.exec.is_empty() {
        // clap stops the value list at ';' but doesn't require one; the
        // original tool treats a missing terminator as a usage error.
        if !env::args().skip(1).any(|a| a == ";") {
            return Err(Error::UnterminatedExec);
        }
        Action::Exec(CommandTemplate::new(args.exec))
    } else if args.print {
        Action::Print
    } else {
        // Neither --print nor --exec: exit silently with success. A quirk
        // of the original tool, preserved on purpose.
        return Ok(());
    };

    rlimit::limit_processes(args.proc_limit).map_err(Error::ProcessLimit)?;
    let start_dir = env::current_dir().map_err(Error::StartDir)?;

    let ctx = TraversalContext {
        key: args.name,
        action,
        start_dir,
    };
    let mut traverser = Traverser::new(ctx, io::stdout().lock());
    traverser.run(&args.path).map_err(Error::Output)
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        match std::error::Error::source(&e) {
            Some(src) => eprintln!("sfind: {}: {}", e, src),
            None => eprintln!("sfind: {}", e),
        }
        process::exit(1);
    }
}
