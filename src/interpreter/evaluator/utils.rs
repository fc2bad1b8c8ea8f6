use std::{iter::Peekable, str::CharIndices};

use crate::{
    config::{IndexPolicy, OperatorScan},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{NumberToken, leading_number},
    },
};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the operator written as `c`, if any.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Iterates over the characters of a slice that sit outside every `[...]`
/// pair and every `"..."` or `'.'` literal.
///
/// Bracket and quote characters themselves are never yielded. Unbalanced
/// closing brackets are ignored.
pub struct TopLevel<'a> {
    chars: Peekable<CharIndices<'a>>,
    depth: usize,
}

impl<'a> TopLevel<'a> {
    /// Starts scanning `text` from its first character.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.char_indices().peekable(),
               depth: 0, }
    }

    fn skip_text_literal(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '"' {
                break;
            }
        }
    }

    fn skip_char_literal(&mut self) {
        self.chars.next();
        if let Some(&(_, '\'')) = self.chars.peek() {
            self.chars.next();
        }
    }
}

impl Iterator for TopLevel<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, c)) = self.chars.next() {
            match c {
                '[' => self.depth += 1,
                ']' => self.depth = self.depth.saturating_sub(1),
                '"' => self.skip_text_literal(),
                '\'' => self.skip_char_literal(),
                _ if self.depth == 0 => return Some((index, c)),
                _ => {},
            }
        }

        None
    }
}

/// Finds the binary operator of a trimmed expression.
///
/// # Parameters
/// - `expr`: The trimmed expression.
/// - `scan`: Whether the first operator character anywhere counts, or only
///   one at the top level that is not a leading sign.
///
/// # Returns
/// The byte position and the operator, or `None` for a single operand.
///
/// # Example
/// ```
/// use snakelet::{
///     config::OperatorScan,
///     interpreter::evaluator::utils::{Operator, find_operator},
/// };
///
/// assert_eq!(find_operator("1 + 2", OperatorScan::FirstMatch),
///            Some((2, Operator::Add)));
/// assert_eq!(find_operator("-5 - 3", OperatorScan::FirstMatch),
///            Some((0, Operator::Sub)));
/// assert_eq!(find_operator("-5 - 3", OperatorScan::TopLevel),
///            Some((3, Operator::Sub)));
/// assert_eq!(find_operator("[1, -2]", OperatorScan::TopLevel), None);
/// ```
#[must_use]
pub fn find_operator(expr: &str, scan: OperatorScan) -> Option<(usize, Operator)> {
    let as_operator = |(index, c): (usize, char)| Operator::from_char(c).map(|op| (index, op));

    match scan {
        OperatorScan::FirstMatch => expr.char_indices().find_map(as_operator),
        OperatorScan::TopLevel => TopLevel::new(expr).filter(|&(index, c)| !(index == 0 && c == '-'))
                                                     .find_map(as_operator),
    }
}

/// Returns the byte position of the first `separator` at the top level of
/// `text`.
///
/// # Example
/// ```
/// use snakelet::interpreter::evaluator::utils::find_top_level;
///
/// assert_eq!(find_top_level("xs, [1, 2]", ','), Some(2));
/// assert_eq!(find_top_level("[1, 2]", ','), None);
/// ```
#[must_use]
pub fn find_top_level(text: &str, separator: char) -> Option<usize> {
    TopLevel::new(text).find(|&(_, c)| c == separator)
                       .map(|(index, _)| index)
}

/// Splits `text` at every top-level `separator`.
///
/// Separators nested inside brackets or literals do not split, so nested
/// list literals stay intact. Segments are returned untrimmed.
///
/// # Example
/// ```
/// use snakelet::interpreter::evaluator::utils::split_top_level;
///
/// assert_eq!(split_top_level("1, [2, 3], 4", ','), vec!["1", " [2, 3]", " 4"]);
/// assert_eq!(split_top_level("\"a,b\", 'c'", ','), vec!["\"a,b\"", " 'c'"]);
/// assert_eq!(split_top_level("", ','), vec![""]);
/// ```
#[must_use]
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (index, _) in TopLevel::new(text).filter(|&(_, c)| c == separator) {
        segments.push(&text[start..index]);
        start = index + separator.len_utf8();
    }

    segments.push(&text[start..]);
    segments
}

/// A `name[index]` form, split into its trimmed parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexAccess<'a> {
    /// The variable name before `[`.
    pub name:  &'a str,
    /// The text between `[` and its matching `]`.
    pub index: &'a str,
}

/// Splits a list access such as `xs[2]` into name and index.
///
/// The index ends at the `]` that matches the first `[`.
///
/// # Errors
/// - `RuntimeError::MismatchedBrackets` if there is no `[` or it is never
///   closed.
/// - `RuntimeError::TrailingAfterIndex` if anything but whitespace follows the
///   closing bracket.
///
/// # Example
/// ```
/// use snakelet::interpreter::evaluator::utils::{IndexAccess, split_index_access};
///
/// assert_eq!(split_index_access(" xs [ 2 ] ").unwrap(),
///            IndexAccess { name: "xs", index: "2" });
/// assert!(split_index_access("xs[2").is_err());
/// assert!(split_index_access("xs[2]x").is_err());
/// ```
pub fn split_index_access(text: &str) -> EvalResult<IndexAccess<'_>> {
    let open = text.find('[').ok_or(RuntimeError::MismatchedBrackets)?;

    let mut depth = 0_usize;
    let close = text[open..].char_indices()
                            .find_map(|(offset, c)| {
                                match c {
                                    '[' => depth += 1,
                                    ']' => {
                                        depth = depth.saturating_sub(1);
                                        if depth == 0 {
                                            return Some(open + offset);
                                        }
                                    },
                                    _ => {},
                                }
                                None
                            })
                            .ok_or(RuntimeError::MismatchedBrackets)?;

    let trailing = text[close + 1..].trim();
    if !trailing.is_empty() {
        return Err(RuntimeError::TrailingAfterIndex { trailing: trailing.to_string(), });
    }

    Ok(IndexAccess { name:  text[..open].trim(),
                     index: text[open + 1..close].trim(), })
}

/// Turns index text into an integer according to `policy`.
///
/// Under [`IndexPolicy::Lenient`] the longest leading integer is used, any
/// fractional part is cut off, and text that does not start with a number is
/// index `0`. Under [`IndexPolicy::Strict`] the whole text must be an integer.
///
/// # Errors
/// - `RuntimeError::LiteralTooLarge` if the leading digits do not fit in
///   `i64` (lenient).
/// - `RuntimeError::InvalidIndex` if the text is not an integer (strict).
///
/// # Example
/// ```
/// use snakelet::{config::IndexPolicy, interpreter::evaluator::utils::parse_index};
///
/// assert_eq!(parse_index("2", IndexPolicy::Lenient).unwrap(), 2);
/// assert_eq!(parse_index("1.9", IndexPolicy::Lenient).unwrap(), 1);
/// assert_eq!(parse_index("abc", IndexPolicy::Lenient).unwrap(), 0);
/// assert!(parse_index("abc", IndexPolicy::Strict).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn parse_index(text: &str, policy: IndexPolicy) -> EvalResult<i64> {
    match policy {
        IndexPolicy::Lenient => match leading_number(text) {
            Some(Ok(NumberToken::Integer(n))) => Ok(n),
            Some(Ok(NumberToken::Real(r))) => Ok(r.trunc() as i64),
            Some(Err(literal)) => Err(RuntimeError::LiteralTooLarge { literal: literal.to_string(), }),
            None => Ok(0),
        },
        IndexPolicy::Strict => text.parse()
                                   .map_err(|_| RuntimeError::InvalidIndex { index: text.to_string(), }),
    }
}
