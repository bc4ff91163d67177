//! Interactive shell: reads edge lists from standard in, one per line, and prints the size
//! of a maximum independent set for each of them.
//!
//! `cargo run --bin mis_shell -- --strict` refuses graphs that are neither a tree nor a
//! single cycle instead of guessing.

use std::error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use outerplanar_mis::config::{DEFAULT_EXIT_KEYWORD, DEFAULT_PROMPT, RESULT_LABEL};
use outerplanar_mis::error::USAGE_EXAMPLE;
use outerplanar_mis::output::draw_graph;
use outerplanar_mis::{CyclePolicy, SolverConfig, input, solve};

#[derive(Parser, Debug)]
#[command(name = "mis_shell", about = "MIS calculator for outerplanar graphs (trees and cycles)")]
struct Args {
    /// Fail on cyclic graphs that are not exactly one simple cycle.
    #[arg(long)]
    strict: bool,

    /// Word that ends the session (case-insensitive).
    #[arg(long, default_value = DEFAULT_EXIT_KEYWORD)]
    exit_keyword: String,

    /// Text printed before every input line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Also print every parsed graph in DOT format.
    #[arg(long)]
    dot: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = SolverConfig {
        cycle_policy: if args.strict {
            CyclePolicy::Strict
        } else {
            CyclePolicy::Lenient
        },
    };
    info!(?config, "starting shell");

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    writeln!(stdout, "\nMIS calculator for outerplanar graphs (trees and cycles)")?;
    writeln!(
        stdout,
        "Enter edges like '{}' or '{}' to quit.\n",
        USAGE_EXAMPLE, args.exit_keyword
    )?;

    let mut line = String::new();
    loop {
        write!(stdout, "{}", args.prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim();
        if entry.eq_ignore_ascii_case(args.exit_keyword.trim()) {
            break;
        }

        if args.dot {
            if let Ok(graph) = input::from_str(entry) {
                write!(stdout, "{}", draw_graph(&graph))?;
            }
        }

        match solve(entry, &config) {
            Ok(mis) => writeln!(stdout, " {} {}\n", RESULT_LABEL, mis)?,
            Err(e) => writeln!(stdout, " {} {}\n", RESULT_LABEL, e)?,
        }
    }

    Ok(())
}
