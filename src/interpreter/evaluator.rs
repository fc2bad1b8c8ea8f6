/// Arithmetic on two resolved operands.
///
/// Both operands must share a variant, and that variant must be `Integer` or
/// `Float`. There is no promotion between the two.
pub mod arithmetic;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, its entry point `evaluate`, and the collection of
/// diagnostics produced while evaluating.
pub mod core;

/// Operand resolution.
///
/// Turns a single operand into a value: list literals, list indexing,
/// variable references and scalar literals.
pub mod operand;

/// Scanning helpers.
///
/// Operator search, bracket-aware splitting, and index parsing shared by the
/// evaluator and the command handlers.
pub mod utils;
