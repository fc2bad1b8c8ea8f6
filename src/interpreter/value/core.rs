use crate::{
    config::MAX_TEXT_LEN,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::list::List},
    util::num::{FLOAT_SIGNIFICANT_DIGITS, format_general},
};

/// Represents a runtime value in the interpreter.
///
/// Every variant owns its payload outright. Cloning a value is a deep copy:
/// a cloned `Text` has its own buffer and a cloned `List` has its own
/// elements, all the way down. Values are cloned whenever they leave storage
/// (a variable or a list slot) and moved whenever they enter it, so stored
/// data is never aliased by an operand.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit IEEE float.
    Float(f64),
    /// A single character.
    Char(char),
    /// A text value of at most [`MAX_TEXT_LEN`] characters when created from a
    /// literal.
    Text(String),
    /// An owned list of values.
    List(List),
    /// No value. Produced when evaluation fails, and printed as `None`.
    #[default]
    Empty,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v.into())
    }
}

impl Value {
    /// Builds a `Text` value from the contents of a string literal, keeping at
    /// most [`MAX_TEXT_LEN`] characters.
    ///
    /// # Errors
    /// Returns `RuntimeError::AllocationFailed` if the text buffer cannot be
    /// reserved.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::value::core::Value;
    ///
    /// let short = Value::text_literal("hello").unwrap();
    /// assert_eq!(short, Value::Text("hello".to_string()));
    ///
    /// let long = Value::text_literal(&"x".repeat(80)).unwrap();
    /// assert_eq!(long, Value::Text("x".repeat(50)));
    /// ```
    pub fn text_literal(content: &str) -> EvalResult<Self> {
        let mut text = String::new();
        text.try_reserve(content.len().min(MAX_TEXT_LEN * 4))
            .map_err(|_| RuntimeError::AllocationFailed { what: "string" })?;
        text.extend(content.chars().take(MAX_TEXT_LEN));
        Ok(Self::Text(text))
    }

    /// Returns an independent copy of the value, duplicating every owned
    /// sub-structure.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Returns the name of the variant, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Char(_) => "Char",
            Self::Text(_) => "Text",
            Self::List(_) => "List",
            Self::Empty => "None",
        }
    }

    /// Returns `true` if the value is [`Empty`](Value::Empty).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the list payload, if this is a list.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the list payload mutably, if this is a list.
    #[must_use]
    pub const fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{}", format_general(*r, FLOAT_SIGNIFICANT_DIGITS)),
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::List(list) => write!(f, "{list}"),
            Self::Empty => write!(f, "None"),
        }
    }
}
