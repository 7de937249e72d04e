use serde_json::{json, Value};

/// Writes one structured info line to stderr.
pub fn log_info(component: &str, event: &str, details: Value) {
    eprintln!("{}", info_line(component, event, details));
}

/// Writes one structured error line to stderr.
pub fn log_error(component: &str, event: &str, details: Value) {
    eprintln!("{}", error_line(component, event, details));
}

pub fn info_line(component: &str, event: &str, details: Value) -> Value {
    json!({
        "component": component,
        "event": event,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "details": details,
    })
}

pub fn error_line(component: &str, event: &str, details: Value) -> Value {
    json!({
        "component": component,
        "level": "error",
        "event": event,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "details": details,
    })
}
