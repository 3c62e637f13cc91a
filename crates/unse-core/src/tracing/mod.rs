//! Observability for Unse.
//! `tracing` with `EnvFilter` driven by `UNSE_LOG`, plus span helpers.

pub mod setup;
pub mod spans;

pub use setup::{default_directive, init_tracing, init_tracing_from, init_tracing_with_default};
