use std::future::Future;

use crate::failure::InvocationFailure;

/// The canonical dispatch contract: the only shape a host invokes directly.
///
/// `C` is the request-scoped context, borrowed read-only for one invocation.
/// `E` is the incoming event. Both are opaque to implementations in this
/// crate and are forwarded unchanged.
pub trait Handler<C, E> {
    type Output;

    fn call(
        &self,
        context: &C,
        event: E,
    ) -> impl Future<Output = Result<Self::Output, InvocationFailure>> + Send;
}
