use std::sync::Arc;

use handler_adapters_core::{with_io_interface, Handler};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapters::audit_sink::AuditSink;
use crate::scope::RequestScope;

pub const NON_OBJECT_EVENT_ERROR: &str = "audit event must be a JSON object";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditRecord {
    pub request_id: String,
    pub function_arn: String,
    pub recorded_at: String,
    pub event: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditReceipt {
    pub status: String,
    pub request_id: String,
    pub fields_recorded: usize,
}

/// Effectful handler that appends every event to an audit sink.
///
/// The record is written before the event is validated, so rejected events
/// still leave a trace in the sink.
pub fn audit_handler<C, S>(sink: Arc<S>) -> impl Handler<C, Value, Output = AuditReceipt>
where
    C: RequestScope,
    S: AuditSink + Send + Sync + 'static,
{
    with_io_interface(move |context: &C, event: Value| {
        let sink = Arc::clone(&sink);
        let record = AuditRecord {
            request_id: context.request_id().to_string(),
            function_arn: context.invoked_function_arn().to_string(),
            recorded_at: chrono::Utc::now().to_rfc3339(),
            event,
        };
        async move { record_event(sink.as_ref(), record) }
    })
}

fn record_event(sink: &impl AuditSink, record: AuditRecord) -> Result<AuditReceipt, String> {
    let line = serde_json::to_string(&record)
        .map_err(|error| format!("failed to serialize audit record: {error}"))?;
    sink.append(&line)?;

    let Some(fields) = record.event.as_object() else {
        return Err(NON_OBJECT_EVENT_ERROR.to_string());
    };

    Ok(AuditReceipt {
        status: "recorded".to_string(),
        fields_recorded: fields.len(),
        request_id: record.request_id,
    })
}
