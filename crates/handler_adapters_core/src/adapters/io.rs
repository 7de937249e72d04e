use std::future::Future;

use crate::failure::{propagate_error, InvocationFailure};
use crate::handler::Handler;

/// Canonical handler over an effectful `(context, event) -> future` function.
///
/// The action is built from the borrowed context when the handler is called,
/// then driven to completion before its result goes through
/// [`propagate_error`]. Side effects of a failing action have therefore
/// already happened when the failure surfaces. Panics raised by the action are
/// not caught here.
#[derive(Debug, Clone, Copy)]
pub struct IoInterface<F> {
    handler: F,
}

pub fn with_io_interface<C, E, R, F, Fut>(handler: F) -> IoInterface<F>
where
    F: Fn(&C, E) -> Fut,
    Fut: Future<Output = Result<R, String>> + Send,
{
    IoInterface { handler }
}

impl<C, E, R, F, Fut> Handler<C, E> for IoInterface<F>
where
    F: Fn(&C, E) -> Fut,
    Fut: Future<Output = Result<R, String>> + Send,
{
    type Output = R;

    fn call(
        &self,
        context: &C,
        event: E,
    ) -> impl Future<Output = Result<R, InvocationFailure>> + Send {
        let action = (self.handler)(context, event);
        async move { propagate_error(action.await) }
    }
}
