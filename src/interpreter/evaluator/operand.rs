use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::{parse_index, split_index_access, split_top_level},
        },
        lexer::{NumberToken, leading_number},
        value::{core::Value, list::List},
        variables::is_valid_name,
    },
    util::num::checked_index,
};

impl Evaluator<'_> {
    /// Resolves a single trimmed operand into a value.
    ///
    /// The forms are tried in this order:
    /// 1. `[a, b, ...]`: a list literal.
    /// 2. `name[index]`: one element of a list variable.
    /// 3. `name`: a variable.
    /// 4. `12`, `-3`, `2.5`: a number. Text containing `.` is a float.
    /// 5. `'c'`: a character.
    /// 6. `"text"`: a text value.
    ///
    /// Values read from variables are copies; the stored value is never
    /// handed out.
    ///
    /// # Errors
    /// Returns the error of the matching form. If no form matches, returns
    /// `RuntimeError::UnknownVariable` for text shaped like a variable name
    /// and `RuntimeError::UnrecognizedOperand` otherwise.
    pub fn resolve_operand(&mut self, text: &str) -> EvalResult<Value> {
        tracing::trace!(operand = text, "resolving operand");

        if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
            return self.eval_list_literal(&text[1..text.len() - 1]);
        }

        if text.contains('[') {
            return self.eval_index_access(text);
        }

        if let Some(value) = self.variables.find(text) {
            return Ok(value.deep_copy());
        }

        if starts_like_number(text) {
            return eval_number(text);
        }

        if let Some(c) = char_literal(text) {
            return Ok(Value::Char(c));
        }

        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return Value::text_literal(&text[1..text.len() - 1]);
        }

        if is_valid_name(text) {
            return Err(RuntimeError::UnknownVariable { name: text.to_string() });
        }

        Err(RuntimeError::UnrecognizedOperand { operand: text.to_string(), })
    }

    /// Builds a list from the contents of a list literal.
    ///
    /// The contents are split at top-level commas, so nested literals stay
    /// whole. Blank segments are skipped. Each segment is a full expression;
    /// a segment that fails is reported and stored as `Empty`.
    fn eval_list_literal(&mut self, contents: &str) -> EvalResult<Value> {
        let mut list = List::new();

        for segment in split_top_level(contents, ',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let element = self.evaluate(segment);
            list.append(element)?;
        }

        Ok(Value::List(list))
    }

    /// Reads one element of a list variable, as a copy.
    fn eval_index_access(&self, text: &str) -> EvalResult<Value> {
        let access = split_index_access(text)?;
        let list = self.variables.find_list(access.name)?;
        let index = parse_index(access.index, self.config.index_policy)?;
        let position = checked_index(index, list.len())?;

        list.get(position)
            .map(Value::deep_copy)
            .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                    len: list.len() })
    }
}

/// A number starts with a digit, or with `-` directly followed by a digit.
fn starts_like_number(text: &str) -> bool {
    let mut bytes = text.bytes();

    match bytes.next() {
        Some(b'-') => bytes.next().is_some_and(|b| b.is_ascii_digit()),
        Some(b) => b.is_ascii_digit(),
        None => false,
    }
}

/// Reads the leading number of `text`. Anything after it is ignored.
fn eval_number(text: &str) -> EvalResult<Value> {
    match leading_number(text) {
        Some(Ok(NumberToken::Integer(n))) if !text.contains('.') => Ok(Value::Integer(n)),
        Some(Ok(token)) => Ok(Value::Float(token.as_real())),
        Some(Err(literal)) => Err(RuntimeError::LiteralTooLarge { literal: literal.to_string(), }),
        None => Err(RuntimeError::UnrecognizedOperand { operand: text.to_string(), }),
    }
}

/// Returns the character of a `'c'` literal.
fn char_literal(text: &str) -> Option<char> {
    let mut chars = text.chars();

    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some('\''), Some(c), Some('\''), None) => Some(c),
        _ => None,
    }
}
