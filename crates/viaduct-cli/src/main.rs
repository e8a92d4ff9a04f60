// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Console front end: argument parsing, logger setup, board loading,
//! solver invocation, and result rendering. Unrecognized arguments print
//! the generated usage message and perform no search.

use clap::{ArgGroup, Parser};
use log::debug;
use std::path::PathBuf;
use std::time::Duration;
use viaduct_collections::DoublyLinkedList;
use viaduct_model::{Board, BoardError};
use viaduct_search::{
    LogMonitor, NoOpMonitor, StateStore, TraceMonitor, TraceResult, TraceSolver,
};

/// Exit code for a malformed board file (sysexits EX_DATAERR).
const EXIT_BAD_BOARD: i32 = 65;
/// Exit code for an unreadable input file (sysexits EX_NOINPUT).
const EXIT_NO_INPUT: i32 = 66;

/// Search for the shortest traces between the two components of a circuit
/// board file.
#[derive(Parser, Debug)]
#[command(name = "viaduct", version)]
#[command(group(ArgGroup::new("storage").required(true).args(["stack", "queue"])))]
#[command(group(ArgGroup::new("mode").required(true).args(["console", "gui"])))]
struct Args {
    /// Use a stack frontier (depth-first search).
    #[arg(short = 's')]
    stack: bool,

    /// Use a queue frontier (breadth-first search).
    #[arg(short = 'q')]
    queue: bool,

    /// Print results to the console.
    #[arg(short = 'c')]
    console: bool,

    /// Show results in a GUI (not available).
    #[arg(short = 'g')]
    gui: bool,

    /// Board input file.
    file: PathBuf,

    /// Print search progress and statistics.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let level = if args.verbose { "debug" } else { "warn" };
    let _logger = match flexi_logger::Logger::try_with_env_or_str(level) {
        Ok(logger) => logger.start().ok(),
        Err(_) => None,
    };

    if args.gui {
        println!("GUI output is not available.");
        return 0;
    }

    let board = match Board::from_path(&args.file) {
        Ok(board) => board,
        Err(BoardError::Io(e)) => {
            eprintln!("cannot read {}: {}", args.file.display(), e);
            return EXIT_NO_INPUT;
        }
        Err(e) => {
            eprintln!("invalid board file: {}", e);
            return EXIT_BAD_BOARD;
        }
    };

    let frontier = if args.stack {
        StateStore::stack(DoublyLinkedList::new())
    } else {
        StateStore::queue(DoublyLinkedList::new())
    };
    debug!(
        "running {} search over {}",
        frontier.discipline(),
        args.file.display()
    );

    let mut log_monitor;
    let mut noop_monitor;
    let monitor: &mut dyn TraceMonitor = if args.verbose {
        log_monitor = LogMonitor::new(Duration::from_millis(500), 0xFF);
        &mut log_monitor
    } else {
        noop_monitor = NoOpMonitor;
        &mut noop_monitor
    };

    let mut solver = TraceSolver::new(frontier);
    let outcome = solver.solve(&board, monitor);

    match &outcome.result {
        TraceResult::Complete(set) => {
            println!("Best traces found (length {}):", set.length());
            for trace in set {
                println!("{}", trace);
            }
        }
        TraceResult::NoConnection => {
            debug!("search ended: {}", outcome.reason);
            println!("No connection is possible between the two components.");
        }
    }
    if args.verbose {
        print!("{}", outcome.statistics);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn test_accepts_the_documented_surface() {
        let args = Args::try_parse_from(["viaduct", "-s", "-c", "board.dat"]).expect("valid");
        assert!(args.stack && !args.queue);
        assert!(args.console && !args.gui);
        assert_eq!(args.file.to_str(), Some("board.dat"));
        assert!(!args.verbose);

        let args = Args::try_parse_from(["viaduct", "-q", "-c", "--verbose", "board.dat"])
            .expect("valid");
        assert!(args.queue);
        assert!(args.verbose);
    }

    #[test]
    fn test_requires_exactly_one_storage_flag() {
        assert!(Args::try_parse_from(["viaduct", "-c", "board.dat"]).is_err());
        assert!(Args::try_parse_from(["viaduct", "-s", "-q", "-c", "board.dat"]).is_err());
    }

    #[test]
    fn test_requires_exactly_one_mode_flag() {
        assert!(Args::try_parse_from(["viaduct", "-s", "board.dat"]).is_err());
        assert!(Args::try_parse_from(["viaduct", "-s", "-c", "-g", "board.dat"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flags_and_missing_file() {
        assert!(Args::try_parse_from(["viaduct", "-s", "-c"]).is_err());
        assert!(Args::try_parse_from(["viaduct", "-x", "-c", "board.dat"]).is_err());
    }

    #[test]
    fn test_gui_flag_parses() {
        let args = Args::try_parse_from(["viaduct", "-q", "-g", "board.dat"]).expect("valid");
        assert!(args.gui && !args.console);
    }
}
