use std::future::{ready, Future};

use crate::failure::{propagate_error, InvocationFailure};
use crate::handler::Handler;

/// Canonical handler over a `(context, event) -> Result<R, String>` function.
#[derive(Debug, Clone, Copy)]
pub struct FallibleInterface<F> {
    handler: F,
}

pub fn with_fallible_interface<C, E, R, F>(handler: F) -> FallibleInterface<F>
where
    F: Fn(&C, E) -> Result<R, String>,
{
    FallibleInterface { handler }
}

impl<C, E, R, F> Handler<C, E> for FallibleInterface<F>
where
    F: Fn(&C, E) -> Result<R, String>,
    R: Send,
{
    type Output = R;

    fn call(
        &self,
        context: &C,
        event: E,
    ) -> impl Future<Output = Result<R, InvocationFailure>> + Send {
        ready(propagate_error((self.handler)(context, event)))
    }
}
