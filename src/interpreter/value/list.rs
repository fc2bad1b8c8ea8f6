use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// An ordered, growable sequence of owned values.
///
/// Insertion order is the visible order and indices start at `0`. A `List`
/// is owned by exactly one `Value::List`; copies are made with
/// [`List::deep_copy`] and never share elements with the original.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<Value>,
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect(), }
    }
}

impl<'a> IntoIterator for &'a List {
    type IntoIter = std::slice::Iter<'a, Value>;
    type Item = &'a Value;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl List {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Appends an already owned value at the tail.
    ///
    /// The value is stored as given; callers hand over a freshly evaluated
    /// value, so no copy is made here.
    ///
    /// # Errors
    /// Returns `RuntimeError::AllocationFailed` if room for the new element
    /// cannot be reserved. The list is unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::value::{core::Value, list::List};
    ///
    /// let mut list = List::new();
    /// list.append(Value::Integer(1)).unwrap();
    /// list.append(Value::Char('x')).unwrap();
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.to_string(), "[1, 'x']");
    /// ```
    pub fn append(&mut self, value: Value) -> EvalResult<()> {
        self.items
            .try_reserve(1)
            .map_err(|_| RuntimeError::AllocationFailed { what: "list node" })?;
        self.items.push(value);
        Ok(())
    }

    /// Returns the element at `index`, or `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Replaces the element at `index`, dropping the value stored there
    /// before.
    ///
    /// # Errors
    /// Returns `RuntimeError::IndexOutOfBounds` if `index` is not below
    /// [`len`](List::len). The incoming value is dropped and the list is
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::value::{core::Value, list::List};
    ///
    /// let mut list: List = vec![Value::Integer(10), Value::Integer(20)].into();
    /// list.set(1, Value::Integer(99)).unwrap();
    /// assert_eq!(list.to_string(), "[10, 99]");
    ///
    /// assert!(list.set(5, Value::Integer(0)).is_err());
    /// assert_eq!(list.to_string(), "[10, 99]");
    /// ```
    pub fn set(&mut self, index: usize, value: Value) -> EvalResult<()> {
        let len = self.items.len();
        let slot = self.items
                       .get_mut(index)
                       .ok_or_else(|| RuntimeError::IndexOutOfBounds { index:
                                                                           i64::try_from(index).unwrap_or(i64::MAX),
                                                                       len })?;
        *slot = value;
        Ok(())
    }

    /// Returns a copy of the list in which every element, including nested
    /// lists, is duplicated.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::value::{core::Value, list::List};
    ///
    /// let inner: List = vec![Value::Integer(2)].into();
    /// let original: List = vec![Value::Integer(1), Value::List(inner)].into();
    ///
    /// let mut copy = original.deep_copy();
    /// copy.append(Value::Integer(3)).unwrap();
    ///
    /// assert_eq!(original.to_string(), "[1, [2]]");
    /// assert_eq!(copy.to_string(), "[1, [2], 3]");
    /// ```
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, value) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{value}")?;
        }

        write!(f, "]")
    }
}
