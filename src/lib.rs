//! # snakelet
//!
//! snakelet is a tiny dynamically typed command interpreter written in Rust.
//! It evaluates one command per line: assignments, list appends, list element
//! assignments and prints, over integers, floats, characters, text and nested
//! lists. Values are never shared: reading a variable copies it, and storing
//! a value hands ownership to the variable or list slot.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    interpreter::session::{Response, Session},
};

/// Parsing options.
///
/// Declares the `Config` struct and the two behaviours it controls: how an
/// expression is searched for its operator, and how list indices are read.
/// The defaults reproduce the classic behaviour of the language. Also holds
/// the name and text length limits.
pub mod config;
/// Provides the diagnostics reported while running commands.
///
/// Every failure is a `RuntimeError` belonging to one `ErrorKind`. None of
/// them is fatal: a failing command reports its diagnostic and leaves the
/// session unchanged.
///
/// # Responsibilities
/// - Defines one variant per failure mode.
/// - Maps each variant to the category shown to the user.
/// - Implements `Display` and `std::error::Error`.
pub mod error;
/// Orchestrates command execution.
///
/// This module ties together command classification, expression evaluation,
/// values, variables and sessions.
///
/// # Responsibilities
/// - Classifies command lines.
/// - Evaluates expressions into values.
/// - Stores variables and runs commands against them.
pub mod interpreter;
/// General numeric helpers.
///
/// Float formatting in the `%g` style and checked index conversion.
pub mod util;

/// The line that ends a script or an interactive session.
pub const EXIT_KEYWORD: &str = "exit";

/// Runs a script in a fresh session and returns every response.
///
/// Each line is one command. Execution stops before a line that reads
/// `exit`.
///
/// # Example
/// ```
/// use snakelet::{config::Config, run_source};
///
/// let script = "c = []\nappend(c, \"x\")\nappend(c, \"y\")\nprint(c)";
/// let responses = run_source(script, Config::default());
///
/// let lines: Vec<String> = responses.iter().map(ToString::to_string).collect();
/// assert_eq!(lines,
///            vec!["Successfully appended value.",
///                 "Successfully appended value.",
///                 "[\"x\", \"y\"]"]);
/// ```
pub fn run_source(source: &str, config: Config) -> Vec<Response> {
    let mut session = Session::new(config);

    source.lines()
          .take_while(|line| line.trim() != EXIT_KEYWORD)
          .flat_map(|line| session.execute(line))
          .collect()
}
