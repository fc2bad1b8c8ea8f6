use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents every diagnostic that can be reported while running a command.
pub enum RuntimeError {
    /// An expression was empty after trimming.
    EmptyExpression,
    /// One side of a binary operator was empty.
    MissingOperand {
        /// The operator whose operand is missing.
        operator: char,
    },
    /// An operand matched none of the literal, list or variable forms.
    UnrecognizedOperand {
        /// The offending operand text.
        operand: String,
    },
    /// A `[` without a matching `]` in a list access or list assignment.
    MismatchedBrackets,
    /// Text followed the closing `]` of a list access.
    TrailingAfterIndex {
        /// The unexpected trailing text.
        trailing: String,
    },
    /// An index was not a complete integer literal (strict index policy).
    InvalidIndex {
        /// The index text as written.
        index: String,
    },
    /// `print(...)` was malformed.
    InvalidPrintSyntax,
    /// `append(...)` was malformed.
    InvalidAppendSyntax,
    /// `append(...)` did not separate the list name and the value by a comma.
    MissingAppendComma,
    /// The left-hand side of an assignment is not a valid variable name.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// The command matched no known form.
    UnrecognizedCommand,
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to index or append to a variable that does not hold a list.
    NotAList {
        /// The name of the variable.
        name: String,
    },
    /// Arithmetic operands have mismatched or unsupported variants.
    MismatchedOperands {
        /// Variant name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: char,
        /// Variant name of the right operand.
        right:    &'static str,
    },
    /// Tried to access a list element outside the list.
    IndexOutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the list.
        len:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// A numeric literal does not fit the target type.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
    /// Memory could not be reserved.
    AllocationFailed {
        /// What was being allocated.
        what: &'static str,
    },
}

impl RuntimeError {
    /// Returns the category this diagnostic is reported under.
    ///
    /// # Example
    /// ```
    /// use snakelet::error::{ErrorKind, RuntimeError};
    ///
    /// assert_eq!(RuntimeError::DivisionByZero.kind(), ErrorKind::Value);
    /// assert_eq!(RuntimeError::UnknownVariable { name: "x".into() }.kind(),
    ///            ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression
            | Self::MissingOperand { .. }
            | Self::UnrecognizedOperand { .. }
            | Self::MismatchedBrackets
            | Self::TrailingAfterIndex { .. }
            | Self::InvalidIndex { .. }
            | Self::InvalidPrintSyntax
            | Self::InvalidAppendSyntax
            | Self::MissingAppendComma
            | Self::InvalidVariableName { .. }
            | Self::UnrecognizedCommand => ErrorKind::Syntax,
            Self::UnknownVariable { .. } => ErrorKind::Name,
            Self::NotAList { .. } | Self::MismatchedOperands { .. } => ErrorKind::Type,
            Self::IndexOutOfBounds { .. }
            | Self::DivisionByZero
            | Self::Overflow
            | Self::LiteralTooLarge { .. } => ErrorKind::Value,
            Self::AllocationFailed { .. } => ErrorKind::Resource,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.kind())?;

        match self {
            Self::EmptyExpression => write!(f, "Empty expression."),
            Self::MissingOperand { operator } => {
                write!(f, "Missing operand for '{operator}'.")
            },
            Self::UnrecognizedOperand { operand } => {
                write!(f, "Unrecognized operand '{operand}'.")
            },
            Self::MismatchedBrackets => write!(f, "Mismatched brackets in list access."),
            Self::TrailingAfterIndex { trailing } => {
                write!(f, "Unexpected '{trailing}' after list index.")
            },
            Self::InvalidIndex { index } => write!(f, "Invalid list index '{index}'."),
            Self::InvalidPrintSyntax => write!(f, "Invalid print syntax. Usage: print(variable)"),
            Self::InvalidAppendSyntax => {
                write!(f, "Invalid append syntax. Usage: append(listVar, value)")
            },
            Self::MissingAppendComma => write!(f, "Invalid append syntax. Missing comma."),
            Self::InvalidVariableName { name } => write!(f, "Invalid variable name '{name}'."),
            Self::UnrecognizedCommand => write!(f, "Unrecognized command or invalid syntax."),
            Self::UnknownVariable { name } => write!(f, "Variable '{name}' not found."),
            Self::NotAList { name } => write!(f, "Variable '{name}' is not a list."),
            Self::MismatchedOperands { left, operator, right } => write!(f,
                                                                         "Mismatched or unsupported types for arithmetic operation: {left} {operator} {right}."),
            Self::IndexOutOfBounds { index, len } => write!(f,
                                                            "List index {index} out of bounds for list of length {len}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { literal } => write!(f, "Literal '{literal}' is too large."),
            Self::AllocationFailed { what } => write!(f, "Failed to allocate memory for {what}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
