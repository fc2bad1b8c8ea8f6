/// The category a [`RuntimeError`](super::RuntimeError) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed command or operand shape.
    Syntax,
    /// Reference to a variable that does not exist.
    Name,
    /// Operand or target has the wrong variant.
    Type,
    /// Out-of-range index, division by zero, or a number that does not fit.
    Value,
    /// Memory for a list slot or a text buffer could not be reserved.
    Resource,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "SyntaxError",
            Self::Name => "NameError",
            Self::Type => "TypeError",
            Self::Value => "ValueError",
            Self::Resource => "ResourceError",
        };
        f.write_str(name)
    }
}
