//! # swapcodec-core
//!
//! Core types shared across the SwapCodec crates: ABI type descriptors,
//! decoded values and calls, and the decode error taxonomy.
//! The EVM decoder and the router interpreter are built on top of the
//! definitions here.

pub mod call;
pub mod error;
pub mod types;
pub mod value;

pub use call::{DecodedCall, DecodedParam};
pub use error::{BatchDecodeError, DecodeError};
pub use types::{TypeTag, WORD};
pub use value::Value;
