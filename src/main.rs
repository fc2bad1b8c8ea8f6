use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use snakelet::{
    EXIT_KEYWORD,
    config::{Config, IndexPolicy, OperatorScan},
    interpreter::session::Session,
    run_source,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// snakelet is a tiny interpreter for assignments, lists and prints, one
/// command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the commands of a script file instead of starting the prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Looks for the arithmetic operator only outside brackets and quotes,
    /// and treats a leading `-` as the sign of a number.
    #[arg(long)]
    top_level_operators: bool,

    /// Rejects list indices that are not complete integer literals instead of
    /// reading them best-effort.
    #[arg(long)]
    strict_index: bool,

    /// Raises the log level on stderr (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn config(&self) -> Config {
        Config { operator_scan: if self.top_level_operators {
                     OperatorScan::TopLevel
                 } else {
                     OperatorScan::FirstMatch
                 },
                 index_policy:  if self.strict_index {
                     IndexPolicy::Strict
                 } else {
                     IndexPolicy::Lenient
                 }, }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.config();
    tracing::info!(?config, "starting");

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                 eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                           path.display());
                                                 std::process::exit(1);
                                             });

        for response in run_source(&script, config) {
            println!("{response}");
        }
        return;
    }

    if let Err(e) = repl(Session::new(config)) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Reads commands from stdin until `exit` or end of input.
fn repl(mut session: Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    writeln!(stdout, "snakelet interpreter (type '{EXIT_KEYWORD}' to quit)")?;

    loop {
        write!(stdout, ">>> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = line.trim_end_matches(['\n', '\r']);
        if command.trim() == EXIT_KEYWORD {
            writeln!(stdout, "Exiting interpreter.")?;
            break;
        }

        for response in session.execute(command) {
            writeln!(stdout, "{response}")?;
        }
    }

    Ok(())
}
