//! Handler shape adapters for a single canonical dispatch contract.
//!
//! This crate owns the canonical [`Handler`] contract and the adapters that
//! lift simpler handler shapes into it. It intentionally excludes runtime
//! host, serialization, and configuration concerns; those live in
//! `handler_adapters_lambda`.
//!
//! | Authored shape | Adapter |
//! |---|---|
//! | `Fn(&C, E) -> R` | [`with_pure_interface`] |
//! | `Fn(&C, E) -> Result<R, String>` | [`with_fallible_interface`] |
//! | `Fn(&C, E) -> impl Future<Output = Result<R, String>>` | [`with_io_interface`] |
//! | `Fn(E) -> R` | [`without_context`], then any of the above |

pub mod adapters;
pub mod failure;
pub mod handler;

pub use adapters::{
    with_fallible_interface, with_io_interface, with_pure_interface, without_context,
    FallibleInterface, IoInterface, PureInterface,
};
pub use failure::{propagate_error, InvocationFailure};
pub use handler::Handler;
