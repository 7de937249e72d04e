/// Failure of a single handler invocation.
///
/// The cause is the application's error string, kept verbatim. A failure ends
/// the current invocation only; the host decides how it is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFailure {
    cause: String,
}

impl InvocationFailure {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn into_cause(self) -> String {
        self.cause
    }
}

impl std::fmt::Display for InvocationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.cause)
    }
}

impl std::error::Error for InvocationFailure {}

/// Converts a string-typed handler result into the canonical failure channel.
pub fn propagate_error<R>(result: Result<R, String>) -> Result<R, InvocationFailure> {
    result.map_err(InvocationFailure::new)
}
