//! One adapter per authored handler shape.
//!
//! Adapters are applied once when handlers are wired and hold nothing but the
//! wrapped function.

pub mod fallible;
pub mod io;
pub mod pure;
pub mod without_context;

pub use fallible::{with_fallible_interface, FallibleInterface};
pub use io::{with_io_interface, IoInterface};
pub use pure::{with_pure_interface, PureInterface};
pub use without_context::without_context;
