/// The command module classifies command lines.
///
/// A command line is one of `print(name)`, `append(list, expr)`,
/// `list[index] = expr`, `name = expr`, or blank. Classification only looks
/// at the shape of the line; nothing is evaluated yet.
pub mod command;
/// The evaluator module turns expression text into values.
///
/// The evaluator resolves operands (literals, variables, list literals and
/// list indexing), applies at most one binary arithmetic operator, and
/// records a diagnostic for every failure instead of returning an error.
///
/// # Responsibilities
/// - Parses numeric, character, text and list literals.
/// - Reads variables and list elements by copy.
/// - Performs integer and float arithmetic without implicit coercion.
pub mod evaluator;
/// The lexer module recognises numeric literals.
///
/// Numbers are read best-effort: only the leading number of a slice counts,
/// so `12abc` reads as `12` and `3.5.1` as `3.5`.
pub mod lexer;
/// The session module runs classified commands.
///
/// A session owns the variable table and hands each command to its handler,
/// collecting the printed output, notices and diagnostics it produces.
pub mod session;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Defines the owned `List` storage behind `Value::List`.
/// - Renders values in their canonical textual form.
pub mod value;
/// The variables module stores named values.
///
/// Also holds the rule deciding which names are valid variable names.
pub mod variables;
