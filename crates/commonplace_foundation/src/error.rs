//! Error types for the commonplace helpers.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for commonplace operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the operation that failed, keeping any context already set.
    #[must_use]
    pub fn in_operation(self, operation: &str) -> Self {
        if self.context.is_some() {
            return self;
        }
        self.with_context(ErrorContext::new().with_operation(operation))
    }

    /// Returns the name of the operation that failed, if one was recorded.
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        self.context.as_ref()?.operation.as_deref()
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an unsupported granularity error.
    #[must_use]
    pub fn unsupported_granularity(granularity: &'static str, point: &'static str) -> Self {
        Self::new(ErrorKind::UnsupportedGranularity { granularity, point })
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDate(message.into()))
    }

    /// Creates an invalid format error.
    #[must_use]
    pub fn invalid_format(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange(message.into()))
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument violated a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A granularity was requested that the calendar point cannot step by.
    #[error("unsupported granularity: {granularity} cannot step a {point}")]
    UnsupportedGranularity {
        /// The requested granularity.
        granularity: &'static str,
        /// The kind of calendar point.
        point: &'static str,
    },

    /// Date or time components do not name a real calendar point.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A format or parse pattern could not be applied.
    #[error("invalid format `{pattern}`: {message}")]
    InvalidFormat {
        /// The pattern that was used.
        pattern: String,
        /// What went wrong.
        message: String,
    },

    /// Calendar arithmetic left the representable range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Semantic limit exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),
}

/// Semantic limits that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// An interval would materialize more points than allowed.
    MaxIntervalPoints {
        /// The configured limit.
        limit: usize,
        /// The number of points the request would produce.
        requested: u64,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxIntervalPoints { limit, requested } => {
                write!(f, "max interval points ({limit}) exceeded: {requested} requested")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The public operation that failed, such as `interval` or `parse_date`.
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        Ok(())
    }
}

/// Result type alias using the commonplace error.
pub type Result<T> = std::result::Result<T, Error>;
