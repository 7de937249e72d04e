/// Lifts a context-free handler into a `(context, event)` handler that ignores
/// the context.
///
/// `R` is left open, so the result composes with every lifting adapter: a
/// plain value, a `Result<_, String>`, or a future.
pub fn without_context<C, E, R, G>(handler: G) -> impl Fn(&C, E) -> R
where
    G: Fn(E) -> R,
{
    move |_context: &C, event: E| handler(event)
}
