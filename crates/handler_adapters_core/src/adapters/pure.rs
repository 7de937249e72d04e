use std::future::{ready, Future};

use crate::failure::InvocationFailure;
use crate::handler::Handler;

/// Canonical handler over a pure `(context, event) -> result` function.
#[derive(Debug, Clone, Copy)]
pub struct PureInterface<F> {
    handler: F,
}

pub fn with_pure_interface<C, E, R, F>(handler: F) -> PureInterface<F>
where
    F: Fn(&C, E) -> R,
{
    PureInterface { handler }
}

impl<C, E, R, F> Handler<C, E> for PureInterface<F>
where
    F: Fn(&C, E) -> R,
    R: Send,
{
    type Output = R;

    fn call(
        &self,
        context: &C,
        event: E,
    ) -> impl Future<Output = Result<R, InvocationFailure>> + Send {
        ready(Ok((self.handler)(context, event)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::without_context;

    #[tokio::test]
    async fn yields_handler_result_for_context_and_event() {
        let handler = with_pure_interface(|context: &u32, event: u32| context + event);

        let output = handler.call(&40, 2).await;
        assert_eq!(output, Ok(42));
    }

    #[tokio::test]
    async fn composes_with_context_free_identity() {
        let handler = with_pure_interface(without_context::<u64, &str, &str, _>(|event| event));

        assert_eq!(handler.call(&0, "x").await, Ok("x"));
        assert_eq!(handler.call(&u64::MAX, "x").await, Ok("x"));
    }
}
