use crate::{
    config::Config,
    error::RuntimeError,
    interpreter::{evaluator::utils::find_operator, value::core::Value, variables::VariableTable},
};

/// Result type used by the evaluator.
///
/// All fallible evaluation steps return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates expression text against a variable table.
///
/// The evaluator only reads variables; every value it returns is an
/// independent copy of whatever it read. Failures never escape
/// [`evaluate`](Evaluator::evaluate): they are recorded as diagnostics, in
/// the order they happen, and the failed expression yields
/// [`Value::Empty`].
///
/// ## Usage
///
/// An `Evaluator` lives for one command. The command handler evaluates its
/// argument strings, then takes the diagnostics with
/// [`into_diagnostics`](Evaluator::into_diagnostics), which also releases
/// the borrow of the variable table so the result can be stored.
pub struct Evaluator<'a> {
    pub(super) variables: &'a VariableTable,
    pub(super) config:    Config,
    diagnostics:          Vec<RuntimeError>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator reading from `variables`.
    #[must_use]
    pub const fn new(variables: &'a VariableTable, config: Config) -> Self {
        Self { variables,
               config,
               diagnostics: Vec::new() }
    }

    /// Evaluates an expression: one operand, or two operands joined by one of
    /// `+ - * /`.
    ///
    /// Returns `Value::Empty` if the expression is malformed or cannot be
    /// computed; the reason is recorded as a diagnostic.
    ///
    /// # Example
    /// ```
    /// use snakelet::{
    ///     config::Config,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value, variables::VariableTable},
    /// };
    ///
    /// let mut variables = VariableTable::new();
    /// variables.assign("x", Value::Integer(7));
    ///
    /// let mut evaluator = Evaluator::new(&variables, Config::default());
    /// assert_eq!(evaluator.evaluate("x / 2"), Value::Integer(3));
    /// assert_eq!(evaluator.evaluate("7.0 / 2.0"), Value::Float(3.5));
    /// assert_eq!(evaluator.evaluate("x / 0"), Value::Empty);
    ///
    /// assert_eq!(evaluator.diagnostics().len(), 1);
    /// ```
    pub fn evaluate(&mut self, expr: &str) -> Value {
        match self.try_evaluate(expr) {
            Ok(value) => value,
            Err(error) => {
                self.report(error);
                Value::Empty
            },
        }
    }

    fn try_evaluate(&mut self, expr: &str) -> EvalResult<Value> {
        let expr = expr.trim();
        tracing::trace!(expr, "evaluating expression");

        if expr.is_empty() {
            return Err(RuntimeError::EmptyExpression);
        }

        let Some((position, operator)) = find_operator(expr, self.config.operator_scan) else {
            return self.resolve_operand(expr);
        };

        let left = self.operand_or_empty(&expr[..position], operator.symbol());
        let right = self.operand_or_empty(&expr[position + 1..], operator.symbol());

        if left.is_empty() || right.is_empty() {
            return Ok(Value::Empty);
        }

        Self::eval_arithmetic(operator, &left, &right)
    }

    /// Resolves one side of a binary expression, reporting any failure
    /// immediately so that both sides get their diagnostics.
    fn operand_or_empty(&mut self, text: &str, operator: char) -> Value {
        let text = text.trim();
        let resolved = if text.is_empty() {
            Err(RuntimeError::MissingOperand { operator })
        } else {
            self.resolve_operand(text)
        };

        resolved.unwrap_or_else(|error| {
                    self.report(error);
                    Value::Empty
                })
    }

    /// Records a diagnostic.
    pub fn report(&mut self, error: RuntimeError) {
        tracing::debug!(%error, "diagnostic reported");
        self.diagnostics.push(error);
    }

    /// Diagnostics recorded so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> &[RuntimeError] {
        &self.diagnostics
    }

    /// Consumes the evaluator and returns its diagnostics, oldest first.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<RuntimeError> {
        self.diagnostics
    }
}
