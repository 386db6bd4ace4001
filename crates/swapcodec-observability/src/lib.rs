//! # swapcodec-observability
//!
//! Structured logging for SwapCodec.
//!
//! The library crates only emit `tracing` events (table builds, method
//! resolution, batch progress); binaries decide where they go by calling
//! [`init_tracing`] once at startup.
//!
//! Log levels are configurable per component, and output is either
//! human-readable text or JSON lines compatible with ELK, Loki, CloudWatch.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
