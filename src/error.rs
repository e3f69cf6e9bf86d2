//! Error types for advised method calls.

/// Result type for method and advice invocations.
pub type Result<T> = std::result::Result<T, AopError>;

/// Errors that can occur while registering or invoking advised methods.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AopError {
    /// The chain reached a method name that was never defined on the target.
    #[error("no method named `{0}` on target")]
    MissingMethod(String),

    /// The chain reached a slot that holds a plain value instead of a method.
    #[error("`{0}` is not callable")]
    NotCallable(String),

    /// Attempted to redefine a slot that already has advice installed.
    #[error("`{0}` already has advice installed")]
    AlreadyAdvised(String),

    /// Raised by advice or by the original method during a call.
    #[error("invocation failed: {0}")]
    Invocation(String),
}

impl AopError {
    /// Create an invocation error from any message.
    pub fn invocation(message: impl Into<String>) -> Self {
        AopError::Invocation(message.into())
    }

    /// Returns the error message.
    pub fn message(&self) -> String {
        match self {
            AopError::MissingMethod(name) => name.clone(),
            AopError::NotCallable(name) => name.clone(),
            AopError::AlreadyAdvised(name) => name.clone(),
            AopError::Invocation(msg) => msg.clone(),
        }
    }

    /// Returns true if the method slot itself was unusable.
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            AopError::MissingMethod(_) | AopError::NotCallable(_) | AopError::AlreadyAdvised(_)
        )
    }

    /// Returns true if advice or the original method raised the error.
    pub fn is_invocation_error(&self) -> bool {
        matches!(self, AopError::Invocation(_))
    }
}
