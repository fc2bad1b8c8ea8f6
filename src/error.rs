/// Diagnostic categories.
///
/// Every reported failure belongs to exactly one [`ErrorKind`]. The kind is
/// the prefix users see in front of each diagnostic, such as `NameError` or
/// `ValueError`.
pub mod kind;
/// Runtime diagnostics.
///
/// Contains every failure the evaluator and the command handlers can report:
/// malformed commands and operands, unknown variables, type mismatches,
/// out-of-range indices, division by zero, and failed allocations. None of
/// them is fatal; they are reported and the session moves on to the next
/// command.
pub mod runtime_error;

pub use kind::ErrorKind;
pub use runtime_error::RuntimeError;
