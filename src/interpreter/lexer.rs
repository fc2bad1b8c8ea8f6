use logos::Logos;

/// A numeric literal recognised at the start of an operand or an index.
///
/// Only the leading number of a slice is ever lexed; whatever follows it is
/// ignored, which gives operands such as `12abc` the value `12`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum NumberToken {
    /// Literals with a decimal point, such as `3.14`, `-0.5` or `2.`.
    #[regex(r"-?[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Literals without a decimal point, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
}

impl NumberToken {
    /// Returns the token as an `f64`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }
}

/// Lexes the longest number at the start of `text`.
///
/// # Returns
/// - `None`: `text` does not start with a number.
/// - `Some(Ok(token))`: the leading number.
/// - `Some(Err(slice))`: the leading digits do not fit in the target type;
///   `slice` is the offending literal.
///
/// # Example
/// ```
/// use snakelet::interpreter::lexer::{NumberToken, leading_number};
///
/// assert_eq!(leading_number("42"), Some(Ok(NumberToken::Integer(42))));
/// assert_eq!(leading_number("-2.5"), Some(Ok(NumberToken::Real(-2.5))));
/// assert_eq!(leading_number("7abc"), Some(Ok(NumberToken::Integer(7))));
/// assert_eq!(leading_number("abc"), None);
/// assert!(matches!(leading_number("99999999999999999999"), Some(Err(_))));
/// ```
#[must_use]
pub fn leading_number(text: &str) -> Option<Result<NumberToken, &str>> {
    let mut lexer = NumberToken::lexer(text);

    match lexer.next()? {
        Ok(token) => Some(Ok(token)),
        Err(()) => {
            let slice = lexer.slice();
            slice.bytes().any(|b| b.is_ascii_digit()).then_some(Err(slice))
        },
    }
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<NumberToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice. Literals outside
/// the `i64` range produce a lexer error.
fn parse_integer(lex: &logos::Lexer<NumberToken>) -> Option<i64> {
    lex.slice().parse().ok()
}
