//! Observability for rxgate.
//! `tracing` crate with `EnvFilter`, level controlled by `RXGATE_LOG`.

pub mod setup;

pub use setup::init_tracing;
