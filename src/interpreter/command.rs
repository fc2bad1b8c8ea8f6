use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{find_top_level, split_index_access},
    },
};

/// A classified command, borrowing its parts from the command line.
///
/// All parts are trimmed. Expressions are kept as text; they are evaluated
/// only when the command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `print(name)`
    Print {
        /// The variable to print.
        name: &'a str,
    },
    /// `append(list, expr)`
    Append {
        /// The list variable to grow.
        list:  &'a str,
        /// The expression whose value is appended.
        value: &'a str,
    },
    /// `list[index] = expr`
    IndexedAssignment {
        /// The list variable to update.
        list:  &'a str,
        /// The index text between the brackets.
        index: &'a str,
        /// The expression whose value is stored.
        value: &'a str,
    },
    /// `name = expr`
    Assignment {
        /// The target variable, not yet validated.
        name:  &'a str,
        /// The expression whose value is stored.
        value: &'a str,
    },
    /// A blank line.
    Empty,
}

impl<'a> Command<'a> {
    /// Classifies one command line.
    ///
    /// The checks run in priority order: `print(`, `append(`, any `=`, and
    /// finally the unrecognized case. A blank line is [`Command::Empty`].
    ///
    /// # Errors
    /// - `RuntimeError::InvalidPrintSyntax` / `InvalidAppendSyntax` if a call
    ///   does not end with `)`.
    /// - `RuntimeError::MissingAppendComma` if `append` has a single argument.
    /// - `RuntimeError::MismatchedBrackets` / `TrailingAfterIndex` for a
    ///   malformed indexed assignment target.
    /// - `RuntimeError::UnrecognizedCommand` if nothing matches.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::command::Command;
    ///
    /// assert_eq!(Command::classify("  print( xs ) ").unwrap(),
    ///            Command::Print { name: "xs" });
    /// assert_eq!(Command::classify("append(xs, [1, 2])").unwrap(),
    ///            Command::Append { list:  "xs",
    ///                              value: "[1, 2]", });
    /// assert_eq!(Command::classify("xs[1] = 99").unwrap(),
    ///            Command::IndexedAssignment { list:  "xs",
    ///                                         index: "1",
    ///                                         value: "99", });
    /// assert_eq!(Command::classify("").unwrap(), Command::Empty);
    /// assert!(Command::classify("hello").is_err());
    /// ```
    pub fn classify(line: &'a str) -> EvalResult<Self> {
        let line = line.trim();

        if line.starts_with("print(") {
            let name = call_arguments(line, "print(").ok_or(RuntimeError::InvalidPrintSyntax)?;
            return Ok(Self::Print { name: name.trim() });
        }

        if line.starts_with("append(") {
            let arguments =
                call_arguments(line, "append(").ok_or(RuntimeError::InvalidAppendSyntax)?;
            let comma = find_top_level(arguments, ',').ok_or(RuntimeError::MissingAppendComma)?;

            return Ok(Self::Append { list:  arguments[..comma].trim(),
                                     value: arguments[comma + 1..].trim(), });
        }

        if let Some((lhs, rhs)) = line.split_once('=') {
            let (lhs, value) = (lhs.trim(), rhs.trim());

            if lhs.contains('[') {
                let access = split_index_access(lhs)?;
                return Ok(Self::IndexedAssignment { list: access.name,
                                                    index: access.index,
                                                    value });
            }

            return Ok(Self::Assignment { name: lhs,
                                         value });
        }

        if line.is_empty() {
            Ok(Self::Empty)
        } else {
            Err(RuntimeError::UnrecognizedCommand)
        }
    }
}

/// Returns the text between a call prefix such as `print(` and the final `)`.
fn call_arguments<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?.strip_suffix(')')
}
