use lambda_runtime::Context;

/// Read-only invocation metadata that handlers and the host rely on.
pub trait RequestScope {
    fn request_id(&self) -> &str;

    /// Invocation deadline in epoch milliseconds.
    fn deadline_ms(&self) -> u64;

    fn invoked_function_arn(&self) -> &str;
}

impl RequestScope for Context {
    fn request_id(&self) -> &str {
        &self.request_id
    }

    fn deadline_ms(&self) -> u64 {
        self.deadline
    }

    fn invoked_function_arn(&self) -> &str {
        &self.invoked_function_arn
    }
}

pub fn remaining_time_ms(scope: &impl RequestScope, now_ms: u64) -> u64 {
    scope.deadline_ms().saturating_sub(now_ms)
}

pub fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
