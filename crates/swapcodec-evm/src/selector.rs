//! EVM function selector computation.
//!
//! The selector of a function is the first four bytes of the keccak256 hash
//! of its canonical signature string, e.g.:
//!   keccak256("transfer(address,uint256)")[..4] → 0xa9059cbb
//!
//! The signature must be canonical: no spaces, no parameter names, aliases
//! like `uint` expanded to `uint256`, tuples written as `(T1,T2)`.

use tiny_keccak::{Hasher, Keccak};

/// keccak256 of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// Compute the 4-byte selector of a canonical signature string.
pub fn selector_of(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Split calldata into its selector and the ABI payload that follows it.
/// Returns `None` when there are fewer than four bytes.
pub fn split_selector(calldata: &[u8]) -> Option<([u8; 4], &[u8])> {
    let head: [u8; 4] = calldata.get(..4)?.try_into().ok()?;
    Some((head, &calldata[4..]))
}
