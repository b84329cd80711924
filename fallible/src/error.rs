/// A result with the [`Error`] error by default.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A failure tied to the argument that caused it.
///
/// Renders as `"{argument} - {problem}"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{argument} - {problem}")]
pub struct ArgError {
    argument: i64,
    problem: String,
}

impl ArgError {
    /// Creates an error rejecting `argument` because of `problem`.
    pub fn new(argument: i64, problem: impl Into<String>) -> Self {
        Self {
            argument,
            problem: problem.into(),
        }
    }

    /// The rejected argument.
    pub fn argument(&self) -> i64 {
        self.argument
    }

    /// Describes why the argument was rejected.
    pub fn problem(&self) -> &str {
        &self.problem
    }
}

/// Any failure a computation may report.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A failure known only by its message.
    #[error("{0}")]
    Generic(String),

    /// A failure with inspectable detail.
    #[error(transparent)]
    Structured(#[from] ArgError),
}

impl Error {
    /// Create an instance of [`Self::Generic`].
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }

    /// Returns the structured detail if this is a [`Self::Structured`] failure.
    pub fn as_structured(&self) -> Option<&ArgError> {
        match self {
            Error::Structured(arg_error) => Some(arg_error),
            Error::Generic(_) => None,
        }
    }
}
