//! # swapcodec-evm
//!
//! EVM calldata decoding for SwapCodec.
//!
//! ## Implementation notes
//! - Selector = keccak256(canonical signature)[..4], computed with `tiny-keccak`
//! - `SelectorTable` maps selectors to method descriptors, built once per interface
//! - `abi` is a bounds-checked head/tail decoder; offsets resolve against the
//!   enclosing sequence, never the whole payload
//! - Interface JSON is read directly; alloy `Function`s convert via `interface`

pub mod abi;
pub mod batch;
pub mod call_decoder;
pub mod interface;
pub mod method;
pub mod selector;
pub mod table;

pub use batch::{chunked_decode, parallel_decode, BatchOutput, ErrorMode};
pub use call_decoder::{decode_transaction_input, decode_transaction_input_hex};
pub use method::{MethodDescriptor, Param};
pub use table::SelectorTable;
