use std::io::Write;
use std::sync::Arc;

use handler_adapters_lambda::adapters::audit_sink::AuditSink;
use handler_adapters_lambda::config::HostConfig;
use handler_adapters_lambda::handlers::audit::audit_handler;
use handler_adapters_lambda::host::dispatch;
use lambda_runtime::{service_fn, Context, Error, LambdaEvent};
use serde_json::Value;

struct StdoutAuditSink;

impl AuditSink for StdoutAuditSink {
    fn append(&self, line: &str) -> Result<(), String> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")
            .and_then(|_| stdout.flush())
            .map_err(|error| format!("failed to write audit record: {error}"))
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Arc::new(HostConfig::from_env()?);
    let handler = Arc::new(audit_handler::<Context, _>(Arc::new(StdoutAuditSink)));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        let config = Arc::clone(&config);
        async move { dispatch(handler.as_ref(), &config, event).await }
    }))
    .await
}
