/// Longest accepted variable name.
pub const MAX_NAME_LEN: usize = 15;
/// Longest text payload produced from a string literal; longer literals are
/// truncated.
pub const MAX_TEXT_LEN: usize = 50;

/// How an expression is searched for its binary operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperatorScan {
    /// The first `+`, `-`, `*` or `/` anywhere in the expression is the
    /// operator, including one inside brackets, quotes, or a leading sign.
    /// `-5 - 3` therefore splits at the sign and yields no value.
    #[default]
    FirstMatch,
    /// Operator characters inside `[...]`, `"..."` or `'...'` are skipped, and
    /// so is a `-` that begins the expression.
    TopLevel,
}

/// How the text between `[` and `]` is turned into an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Reads the longest leading integer and ignores the rest; text without a
    /// leading integer is index `0`.
    #[default]
    Lenient,
    /// The trimmed index must be a complete integer literal.
    Strict,
}

/// Options that change how a session parses commands.
///
/// The default configuration reproduces the classic behaviour of the
/// language. Both options exist because the classic behaviour has sharp
/// edges that some scripts rely on.
///
/// # Example
/// ```
/// use snakelet::config::{Config, IndexPolicy, OperatorScan};
///
/// let config = Config::default();
/// assert_eq!(config.operator_scan, OperatorScan::FirstMatch);
/// assert_eq!(config.index_policy, IndexPolicy::Lenient);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Operator search mode.
    pub operator_scan: OperatorScan,
    /// Index parsing mode.
    pub index_policy:  IndexPolicy,
}
