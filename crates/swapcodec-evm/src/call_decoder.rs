//! EVM function-call calldata decoder.
//!
//! Decodes a transaction `input` field against a [`SelectorTable`].
//!
//! # How it works
//! - First 4 bytes of calldata = keccak256(function_signature)[:4] (the selector)
//! - The selector picks the method descriptor; an unknown selector is an error,
//!   never a best-effort guess
//! - Remaining bytes = ABI-encoded inputs, decoded by [`crate::abi::decode`]

use swapcodec_core::{
    call::{DecodedCall, DecodedParam},
    error::DecodeError,
};
use tracing::debug;

use crate::abi;
use crate::selector::split_selector;
use crate::table::SelectorTable;

/// Decode full calldata (selector + payload) into a [`DecodedCall`].
///
/// # Errors
/// `CalldataTooShort`, `UnknownMethod`, or any ABI decode error. The table
/// is only read, so a failure here never affects later decodes.
pub fn decode_transaction_input(
    table: &SelectorTable,
    calldata: &[u8],
) -> Result<DecodedCall, DecodeError> {
    let (selector, payload) = split_selector(calldata).ok_or(DecodeError::CalldataTooShort {
        len: calldata.len(),
    })?;
    let method = table.resolve(selector)?;
    debug!(
        method = method.name(),
        selector = %method.selector_hex(),
        payload_len = payload.len(),
        "decoding call"
    );

    let values = abi::decode(&method.input_types(), payload)?;

    let inputs = method
        .inputs()
        .iter()
        .zip(values)
        .map(|(param, value)| DecodedParam {
            name: param.name.clone(),
            ty: param.ty.clone(),
            value,
        })
        .collect();

    Ok(DecodedCall {
        function_name: method.name().to_string(),
        selector,
        inputs,
    })
}

/// Same as [`decode_transaction_input`] for `0x`-prefixed (or bare) hex input.
pub fn decode_transaction_input_hex(
    table: &SelectorTable,
    calldata_hex: &str,
) -> Result<DecodedCall, DecodeError> {
    let trimmed = calldata_hex.trim();
    let bytes = hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))?;
    decode_transaction_input(table, &bytes)
}
