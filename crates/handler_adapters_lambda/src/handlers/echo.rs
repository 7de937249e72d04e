use handler_adapters_core::{with_pure_interface, without_context, Handler};
use serde_json::Value;

pub fn echo(event: Value) -> Value {
    event
}

pub fn echo_handler<C>() -> impl Handler<C, Value, Output = Value> {
    with_pure_interface(without_context::<C, Value, Value, _>(echo))
}
