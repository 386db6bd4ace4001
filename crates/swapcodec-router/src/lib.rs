//! # swapcodec-router
//!
//! Interprets decoded calls to a constant-product exchange router
//! (Uniswap V2 style) and renders them as one-line summaries.
//!
//! ```text
//! DecodedCall ──► RouterCall::from_call ──► describe ──► "Swapped ... 1.5 WETH (0x..) for USDC (0x..)"
//!                                             ▲
//!                                 TokenTable + SummaryConfig
//! ```
//!
//! Everything here is read-only over its inputs; a `TokenTable` can be
//! shared across threads and reused for any number of calls.

pub mod amount;
pub mod config;
pub mod describe;
pub mod router;
pub mod tokens;

pub use amount::format_amount;
pub use config::SummaryConfig;
pub use describe::{describe, describe_with};
pub use router::{RouterCall, SUPPORTED_METHODS};
pub use tokens::{Token, TokenTable};
