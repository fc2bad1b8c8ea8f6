use crate::{
    config::Config,
    error::RuntimeError,
    interpreter::{
        command::Command,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::parse_index,
        },
        value::core::Value,
        variables::{VariableTable, is_valid_name},
    },
    util::num::checked_index,
};

/// One line of feedback produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The rendered value of a `print`.
    Output(String),
    /// Confirmation that `append` stored its value.
    Appended,
    /// A non-fatal error.
    Diagnostic(RuntimeError),
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Output(text) => write!(f, "{text}"),
            Self::Appended => write!(f, "Successfully appended value."),
            Self::Diagnostic(error) => write!(f, "{error}"),
        }
    }
}

/// An interpreter session: a variable table plus the options it is parsed
/// with.
///
/// Sessions are independent of each other. Every command either completes or
/// leaves the session exactly as it was; a failed assignment or append never
/// mutates its target.
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: VariableTable,
    config:    Config,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { variables: VariableTable::new(),
               config }
    }

    /// The variables defined so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// The options this session parses with.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Runs one command line and returns its responses in order.
    ///
    /// Diagnostics raised while evaluating come first, followed by the
    /// command's own output or error, if any. Blank lines and successful
    /// assignments produce no response.
    ///
    /// # Example
    /// ```
    /// use snakelet::interpreter::session::{Response, Session};
    ///
    /// let mut session = Session::default();
    /// assert!(session.execute("a = [10, 20, 30]").is_empty());
    /// assert!(session.execute("a[1] = 99").is_empty());
    ///
    /// assert_eq!(session.execute("print(a)"),
    ///            vec![Response::Output("[10, 99, 30]".to_string())]);
    /// ```
    pub fn execute(&mut self, line: &str) -> Vec<Response> {
        let mut responses = Vec::new();

        let outcome = Command::classify(line).and_then(|command| {
                                                  tracing::debug!(?command, "dispatching command");
                                                  self.dispatch(command, &mut responses)
                                              });

        match outcome {
            Ok(Some(response)) => responses.push(response),
            Ok(None) => {},
            Err(error) => {
                tracing::debug!(%error, "command failed");
                responses.push(Response::Diagnostic(error));
            },
        }

        responses
    }

    fn dispatch(&mut self,
                command: Command<'_>,
                responses: &mut Vec<Response>)
                -> EvalResult<Option<Response>> {
        match command {
            Command::Print { name } => self.print(name),
            Command::Append { list, value } => self.append(list, value, responses),
            Command::IndexedAssignment { list, index, value } => {
                self.assign_index(list, index, value, responses)
            },
            Command::Assignment { name, value } => self.assign(name, value, responses),
            Command::Empty => Ok(None),
        }
    }

    fn print(&self, name: &str) -> EvalResult<Option<Response>> {
        let value = self.variables
                        .find(name)
                        .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })?;

        Ok(Some(Response::Output(value.to_string())))
    }

    fn append(&mut self,
              list: &str,
              value: &str,
              responses: &mut Vec<Response>)
              -> EvalResult<Option<Response>> {
        self.variables.find_list(list)?;

        let Some(value) = self.evaluate(value, responses) else {
            return Ok(None);
        };

        self.variables.find_list_mut(list)?.append(value)?;
        Ok(Some(Response::Appended))
    }

    fn assign_index(&mut self,
                    list: &str,
                    index: &str,
                    value: &str,
                    responses: &mut Vec<Response>)
                    -> EvalResult<Option<Response>> {
        self.variables.find_list(list)?;
        let index = parse_index(index, self.config.index_policy)?;

        let Some(value) = self.evaluate(value, responses) else {
            return Ok(None);
        };

        let target = self.variables.find_list_mut(list)?;
        let position = checked_index(index, target.len())?;
        target.set(position, value)?;
        Ok(None)
    }

    fn assign(&mut self,
              name: &str,
              value: &str,
              responses: &mut Vec<Response>)
              -> EvalResult<Option<Response>> {
        if !is_valid_name(name) {
            return Err(RuntimeError::InvalidVariableName { name: name.to_string() });
        }

        let Some(value) = self.evaluate(value, responses) else {
            return Ok(None);
        };

        self.variables.assign(name, value);
        Ok(None)
    }

    /// Evaluates `expr` against the current variables, moving its
    /// diagnostics into `responses`. Returns `None` if the result is empty.
    fn evaluate(&self, expr: &str, responses: &mut Vec<Response>) -> Option<Value> {
        let mut evaluator = Evaluator::new(&self.variables, self.config);
        let value = evaluator.evaluate(expr);

        responses.extend(evaluator.into_diagnostics()
                                  .into_iter()
                                  .map(Response::Diagnostic));

        (!value.is_empty()).then_some(value)
    }
}
