//! Types for decoded function calls.
//!
//! These are the output of decoding a transaction's `input` field against a
//! contract interface.

use crate::types::TypeTag;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One decoded argument, tagged with the ABI type it was decoded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedParam {
    /// Parameter name from the interface (`arg{i}` when the interface leaves it blank)
    pub name: String,
    pub ty: TypeTag,
    pub value: Value,
}

/// Result of decoding a function call's calldata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCall {
    /// Function name (e.g. "swapExactTokensForTokens")
    pub function_name: String,
    /// First 4 bytes of calldata (keccak256 of signature)
    pub selector: [u8; 4],
    /// Decoded input parameters in declaration order
    pub inputs: Vec<DecodedParam>,
}

impl DecodedCall {
    /// Selector as a hex string ("0xaabbccdd")
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }

    /// Look up a decoded input by name
    pub fn input(&self, name: &str) -> Option<&Value> {
        self.inputs
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Positional access
    pub fn arg(&self, index: usize) -> Option<&DecodedParam> {
        self.inputs.get(index)
    }

    /// The canonical signature this call was decoded with, e.g.
    /// `swapExactTokensForTokens(uint256,uint256,address[],address,uint256)`.
    pub fn signature(&self) -> String {
        let types: Vec<_> = self.inputs.iter().map(|p| p.ty.to_string()).collect();
        format!("{}({})", self.function_name, types.join(","))
    }
}
