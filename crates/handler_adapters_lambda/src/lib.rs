//! Lambda host binding for canonical handlers.
//!
//! This crate owns runtime integration details (registration with
//! `lambda_runtime`, request scope access, host configuration, structured
//! logging) and the example handlers shipped as Lambda binaries. Shape
//! adaptation itself lives in `handler_adapters_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod host;
pub mod logging;
pub mod scope;
