use std::time::Instant;

use handler_adapters_core::Handler;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::json;

use crate::config::HostConfig;
use crate::logging::{log_error, log_info};
use crate::scope::{now_ms, remaining_time_ms, RequestScope};

/// Registers a canonical handler behind `lambda_runtime::run(service_fn(..))`.
pub async fn dispatch<H, E>(
    handler: &H,
    config: &HostConfig,
    event: LambdaEvent<E>,
) -> Result<H::Output, Error>
where
    H: Handler<Context, E>,
{
    let context = event.context;
    invoke(handler, config, &context, event.payload).await
}

/// Runs one invocation and reports its outcome.
///
/// A failed invocation surfaces as a `lambda_runtime::Error` whose message is
/// the handler's error string, unchanged. The process keeps serving.
pub async fn invoke<H, C, E>(
    handler: &H,
    config: &HostConfig,
    context: &C,
    payload: E,
) -> Result<H::Output, Error>
where
    H: Handler<C, E>,
    C: RequestScope,
{
    let started_at = Instant::now();

    match handler.call(context, payload).await {
        Ok(output) => {
            if config.log_successes {
                log_info(
                    &config.component,
                    "invocation_succeeded",
                    json!({
                        "request_id": context.request_id(),
                        "duration_ms": started_at.elapsed().as_millis(),
                    }),
                );
            }
            Ok(output)
        }
        Err(failure) => {
            log_error(
                &config.component,
                "invocation_failed",
                json!({
                    "request_id": context.request_id(),
                    "function_arn": context.invoked_function_arn(),
                    "duration_ms": started_at.elapsed().as_millis(),
                    "remaining_ms": remaining_time_ms(context, now_ms()),
                    "error": failure.cause(),
                }),
            );
            Err(Error::from(failure))
        }
    }
}
