//! Rayon-powered batch decoding of independent transactions.
//!
//! Each calldata blob is decoded on its own against the shared, read-only
//! selector table. A decode either completes or fails as a unit; results
//! are reported in input order with their original indices.

use rayon::prelude::*;
use swapcodec_core::{call::DecodedCall, error::BatchDecodeError, error::DecodeError};
use tracing::info;

use crate::call_decoder::decode_transaction_input;
use crate::table::SelectorTable;

/// Controls how a batch reacts to individual decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Drop calls that fail to decode. Suitable for best-effort analytics.
    #[default]
    Skip,
    /// Collect decode errors alongside successes and return both at the end.
    Collect,
    /// Abort the entire batch on the first error (lowest index).
    Throw,
}

/// Output of a batch decode: `(input index, value)` pairs in input order.
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub calls: Vec<(usize, DecodedCall)>,
    /// Populated only when `ErrorMode::Collect` is used.
    pub errors: Vec<(usize, DecodeError)>,
}

/// Decode a slice of calldata blobs in parallel.
/// Returns `(successes, errors)`, each tagged with the input index.
pub fn parallel_decode<C: AsRef<[u8]> + Sync>(
    table: &SelectorTable,
    inputs: &[C],
) -> (Vec<(usize, DecodedCall)>, Vec<(usize, DecodeError)>) {
    let results: Vec<(usize, Result<DecodedCall, DecodeError>)> = inputs
        .par_iter()
        .enumerate()
        .map(|(idx, raw)| (idx, decode_transaction_input(table, raw.as_ref())))
        .collect();

    let mut calls = Vec::new();
    let mut errors = Vec::new();
    for (idx, r) in results {
        match r {
            Ok(call) => calls.push((idx, call)),
            Err(e) => errors.push((idx, e)),
        }
    }
    (calls, errors)
}

/// Chunk `inputs` into slices of at most `chunk_size` and decode each chunk
/// in parallel, applying `mode` to failures.
pub fn chunked_decode<C: AsRef<[u8]> + Sync>(
    table: &SelectorTable,
    inputs: &[C],
    chunk_size: usize,
    mode: ErrorMode,
) -> Result<BatchOutput, BatchDecodeError> {
    if chunk_size == 0 {
        return Err(BatchDecodeError::Other("chunk_size must be at least 1".into()));
    }
    info!(total = inputs.len(), chunk_size, ?mode, "batch decode started");

    let mut out = BatchOutput::default();
    let mut offset = 0;

    for chunk in inputs.chunks(chunk_size) {
        let (calls, errs) = parallel_decode(table, chunk);
        out.calls
            .extend(calls.into_iter().map(|(idx, call)| (offset + idx, call)));
        for (idx, err) in errs {
            match mode {
                ErrorMode::Skip => {}
                ErrorMode::Collect => out.errors.push((offset + idx, err)),
                ErrorMode::Throw => {
                    return Err(BatchDecodeError::ItemFailed {
                        index: offset + idx,
                        source: err,
                    })
                }
            }
        }
        offset += chunk.len();
    }

    info!(
        decoded = out.calls.len(),
        errors = out.errors.len(),
        "batch decode complete"
    );
    Ok(out)
}
