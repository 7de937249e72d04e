use std::sync::Arc;

use handler_adapters_lambda::config::HostConfig;
use handler_adapters_lambda::handlers::greeting::greeting_handler;
use handler_adapters_lambda::host::dispatch;
use lambda_runtime::{service_fn, Context, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Arc::new(HostConfig::from_env()?);
    let handler = Arc::new(greeting_handler::<Context>());

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        let config = Arc::clone(&config);
        async move { dispatch(handler.as_ref(), &config, event).await }
    }))
    .await
}
