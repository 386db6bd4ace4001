//! Decoded ABI values.
//!
//! A [`Value`] carries no type information of its own: the [`TypeTag`] it
//! was decoded against travels alongside it (see
//! [`DecodedParam`](crate::call::DecodedParam)), and nested elements take
//! their type from the enclosing array or tuple tag.
//!
//! [`TypeTag`]: crate::types::TypeTag

use alloy_primitives::{Address, I256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Uint(U256),
    Int(I256),
    Bool(bool),
    Address(Address),
    /// `bytesN`, exactly N bytes
    FixedBytes(Vec<u8>),
    Bytes(Vec<u8>),
    String(String),
    /// Elements of a fixed or dynamic array, in order
    Array(Vec<Value>),
    /// Tuple fields, in declaration order
    Tuple(Vec<Value>),
}

impl Value {
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            Value::Address(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Collect an `address[]` value into addresses. `None` if this is not an
    /// array or any element is not an address.
    pub fn as_address_array(&self) -> Option<Vec<Address>> {
        self.as_array()?.iter().map(Value::as_address).collect()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Address(a) => write!(f, "{a}"),
            Value::FixedBytes(b) | Value::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                let parts: Vec<_> = items.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Value::Tuple(fields) => {
                let parts: Vec<_> = fields.iter().map(|x| x.to_string()).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    #[test]
    fn address_array_accessor() {
        let path = Value::Array(vec![Value::Address(WETH), Value::Address(Address::ZERO)]);
        assert_eq!(path.as_address_array(), Some(vec![WETH, Address::ZERO]));

        let mixed = Value::Array(vec![Value::Address(WETH), Value::Bool(true)]);
        assert_eq!(mixed.as_address_array(), None);
        assert_eq!(Value::Bool(true).as_address_array(), None);
    }

    #[test]
    fn display_nested() {
        let v = Value::Tuple(vec![
            Value::Uint(U256::from(1_000u64)),
            Value::Array(vec![Value::Bool(true), Value::Bool(false)]),
            Value::Bytes(vec![0xab, 0xcd]),
        ]);
        assert_eq!(v.to_string(), "(1000, [true, false], 0xabcd)");
    }

    #[test]
    fn display_address_is_checksummed() {
        assert_eq!(
            Value::Address(WETH).to_string(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let v = Value::Array(vec![Value::Address(WETH), Value::Uint(U256::from(7u8))]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
