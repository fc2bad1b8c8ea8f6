use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::Operator,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Applies a binary arithmetic operator to two values.
    ///
    /// Both values must be `Integer`, or both must be `Float`. Integer
    /// division truncates toward zero. Dividing by zero, and integer results
    /// outside the `i64` range, are errors.
    ///
    /// # Errors
    /// - `RuntimeError::MismatchedOperands` for any other pairing.
    /// - `RuntimeError::DivisionByZero` if the divisor is `0` or `0.0`.
    /// - `RuntimeError::Overflow` if an integer result does not fit.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::{
    ///     evaluator::{core::Evaluator, utils::Operator},
    ///     value::core::Value,
    /// };
    ///
    /// let sum = Evaluator::eval_arithmetic(Operator::Add, &Value::Integer(1), &Value::Integer(2));
    /// assert_eq!(sum.unwrap(), Value::Integer(3));
    ///
    /// let mixed = Evaluator::eval_arithmetic(Operator::Add,
    ///                                        &Value::Integer(1),
    ///                                        &Value::Float(2.0));
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_arithmetic(operator: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Operator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match operator {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero);
                        }
                        a.checked_div(*b)
                    },
                };

                result.map(Integer).ok_or(RuntimeError::Overflow)
            },
            (Float(a), Float(b)) => Ok(Float(match operator {
                                                 Add => a + b,
                                                 Sub => a - b,
                                                 Mul => a * b,
                                                 Div => {
                                                     if *b == 0.0 {
                                                         return Err(RuntimeError::DivisionByZero);
                                                     }
                                                     a / b
                                                 },
                                             })),
            _ => Err(RuntimeError::MismatchedOperands { left:     left.type_name(),
                                                        operator: operator.symbol(),
                                                        right:    right.type_name(), }),
        }
    }
}
