use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A diff that finds differences is not an error. These kinds cover the
/// cases where a comparison could not be carried out at all, so that callers
/// can surface them distinctly from an ordinary assertion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A cost callback returned a negative cost
    InvalidCostModel,
    /// Configuration text could not be parsed
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidCostModel => "ERR_INVALID_COST_MODEL",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable classification for programmatic handling plus the
/// operation and message context for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure sites inside diffcheck, converted into [`ExError`] at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffCheckError {
    /// A cost callback produced a negative value
    #[error("{callback} cost at {at} is negative: {cost}")]
    NegativeCost {
        callback: &'static str,
        at: String,
        cost: i64,
    },

    /// Configuration text failed to parse
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A file could not be read
    #[error("Cannot read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Input could not be decoded
    #[error("Cannot decode {what}: {reason}")]
    Decode { what: String, reason: String },
}

impl From<DiffCheckError> for ExError {
    fn from(err: DiffCheckError) -> Self {
        let message = err.to_string();
        match err {
            DiffCheckError::NegativeCost { .. } => ExError::new(ExErrorKind::InvalidCostModel)
                .with_op("align")
                .with_message(message),
            DiffCheckError::InvalidConfig { .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(message),
            DiffCheckError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            DiffCheckError::Decode { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
