use std::collections::HashMap;

use crate::{
    config::MAX_NAME_LEN,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, list::List},
    },
};

/// Returns `true` if `name` may be used as a variable name.
///
/// A valid name is 1 to [`MAX_NAME_LEN`] characters long, starts with an
/// ASCII letter, and continues with ASCII letters, digits or underscores.
///
/// # Example
/// ```
/// use snakelet::interpreter::variables::is_valid_name;
///
/// assert!(is_valid_name("a_2"));
/// assert!(is_valid_name("total"));
/// assert!(!is_valid_name("_ok"));
/// assert!(!is_valid_name("1bad"));
/// assert!(!is_valid_name("abcdefghijklmnop"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();

    name.len() <= MAX_NAME_LEN
    && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Maps variable names to the values they own.
///
/// Lookup is by exact name. The table never validates names itself; the
/// command handlers check [`is_valid_name`] before creating a variable.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    variables: HashMap<String, Value>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the value bound to `name` for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.variables.get_mut(name)
    }

    /// Returns the list bound to `name`.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name` is not bound.
    /// - `RuntimeError::NotAList` if it is bound to something other than a
    ///   list.
    pub fn find_list(&self, name: &str) -> EvalResult<&List> {
        self.find(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })?
            .as_list()
            .ok_or_else(|| RuntimeError::NotAList { name: name.to_string() })
    }

    /// Returns the list bound to `name` for in-place mutation.
    ///
    /// # Errors
    /// Same as [`find_list`](VariableTable::find_list).
    pub fn find_list_mut(&mut self, name: &str) -> EvalResult<&mut List> {
        self.find_mut(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })?
            .as_list_mut()
            .ok_or_else(|| RuntimeError::NotAList { name: name.to_string() })
    }

    /// Returns the slot for `name`, inserting an `Empty` value if the name is
    /// not bound yet.
    pub fn create(&mut self, name: &str) -> &mut Value {
        self.variables.entry(name.to_string()).or_default()
    }

    /// Binds `name` to `value`, dropping whatever it held before.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::{value::core::Value, variables::VariableTable};
    ///
    /// let mut table = VariableTable::new();
    /// table.assign("x", Value::Integer(1));
    /// table.assign("x", Value::Text("one".into()));
    ///
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.find("x"), Some(&Value::Text("one".into())));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) {
        *self.create(name) = value;
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
