//! ABI type descriptors.
//!
//! A [`TypeTag`] is the parsed form of a Solidity ABI type string such as
//! `uint256`, `address[]` or `(uint256,address)[2]`. Besides identifying the
//! type it answers the one question the decoder keeps asking: is this value
//! stored inline in its head slot (static) or behind an offset (dynamic)?

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width in bytes of one ABI word.
pub const WORD: usize = 32;

/// A Solidity ABI type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TypeTag {
    /// Unsigned integer. Width in bits (8..=256, multiple of 8).
    Uint(u16),
    /// Signed two's-complement integer. Width in bits.
    Int(u16),
    /// Fixed-size byte string (`bytes1` .. `bytes32`). Length in bytes.
    FixedBytes(u8),
    /// 20-byte account address
    Address,
    Bool,
    /// Variable-length byte string
    Bytes,
    /// UTF-8 string
    String,
    /// `T[N]`
    FixedArray(Box<TypeTag>, usize),
    /// `T[]`
    DynamicArray(Box<TypeTag>),
    /// `(T1,...,Tn)`
    Tuple(Vec<TypeTag>),
}

impl TypeTag {
    /// Returns `true` if the encoded width depends on the payload, meaning
    /// the value is reached through an offset pointer.
    pub fn is_dynamic(&self) -> bool {
        match self {
            TypeTag::Bytes | TypeTag::String | TypeTag::DynamicArray(_) => true,
            TypeTag::FixedArray(elem, _) => elem.is_dynamic(),
            TypeTag::Tuple(fields) => fields.iter().any(TypeTag::is_dynamic),
            _ => false,
        }
    }

    pub fn is_static(&self) -> bool {
        !self.is_dynamic()
    }

    /// Number of bytes this type occupies in the head of its enclosing
    /// sequence: one word for dynamic types (the offset), the full inline
    /// width for static ones.
    pub fn head_size(&self) -> usize {
        match self {
            _ if self.is_dynamic() => WORD,
            TypeTag::FixedArray(elem, len) => elem.head_size().saturating_mul(*len),
            TypeTag::Tuple(fields) => fields.iter().map(TypeTag::head_size).sum(),
            _ => WORD,
        }
    }

    /// `true` for `address[]`, the shape of a router swap path.
    pub fn is_address_array(&self) -> bool {
        matches!(self, TypeTag::DynamicArray(elem) if **elem == TypeTag::Address)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Uint(bits) => write!(f, "uint{bits}"),
            TypeTag::Int(bits) => write!(f, "int{bits}"),
            TypeTag::FixedBytes(n) => write!(f, "bytes{n}"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::Bytes => write!(f, "bytes"),
            TypeTag::String => write!(f, "string"),
            TypeTag::FixedArray(elem, len) => write!(f, "{elem}[{len}]"),
            TypeTag::DynamicArray(elem) => write!(f, "{elem}[]"),
            TypeTag::Tuple(fields) => {
                let parts: Vec<_> = fields.iter().map(|t| t.to_string()).collect();
                write!(f, "({})", parts.join(","))
            }
        }
    }
}

impl FromStr for TypeTag {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s.trim()).map_err(|reason| DecodeError::InvalidTypeSyntax {
            ty: s.to_string(),
            reason,
        })
    }
}

impl From<TypeTag> for String {
    fn from(ty: TypeTag) -> Self {
        ty.to_string()
    }
}

impl TryFrom<String> for TypeTag {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

fn parse_type(s: &str) -> Result<TypeTag, String> {
    if s.is_empty() {
        return Err("empty type".into());
    }

    // Array suffixes bind last: `address[2][]` is a dynamic array of `address[2]`.
    if let Some(rest) = s.strip_suffix(']') {
        let open = rest.rfind('[').ok_or("unbalanced ']'")?;
        let elem = parse_type(rest[..open].trim_end())?;
        let len = rest[open + 1..].trim();
        if len.is_empty() {
            return Ok(TypeTag::DynamicArray(Box::new(elem)));
        }
        let n = parse_decimal(len).ok_or_else(|| format!("invalid array length '{len}'"))?;
        if n == 0 {
            return Err("fixed array length must be at least 1".into());
        }
        return Ok(TypeTag::FixedArray(Box::new(elem), n));
    }

    if let Some(body) = s.strip_prefix("tuple").unwrap_or(s).strip_prefix('(') {
        let body = body.strip_suffix(')').ok_or("unbalanced '('")?;
        let fields = split_components(body)?
            .into_iter()
            .map(parse_type)
            .collect::<Result<Vec<_>, _>>()?;
        if fields.is_empty() {
            return Err("empty tuple".into());
        }
        return Ok(TypeTag::Tuple(fields));
    }

    match s {
        "address" => return Ok(TypeTag::Address),
        "bool" => return Ok(TypeTag::Bool),
        "bytes" => return Ok(TypeTag::Bytes),
        "string" => return Ok(TypeTag::String),
        "uint" => return Ok(TypeTag::Uint(256)),
        "int" => return Ok(TypeTag::Int(256)),
        _ => {}
    }

    if let Some(bits) = s.strip_prefix("uint") {
        return int_width(bits).map(TypeTag::Uint);
    }
    if let Some(bits) = s.strip_prefix("int") {
        return int_width(bits).map(TypeTag::Int);
    }
    if let Some(len) = s.strip_prefix("bytes") {
        return match parse_decimal(len) {
            Some(n @ 1..=32) => Ok(TypeTag::FixedBytes(n as u8)),
            _ => Err(format!("invalid fixed bytes length '{len}'")),
        };
    }

    Err(format!("unknown type '{s}'"))
}

fn int_width(digits: &str) -> Result<u16, String> {
    match parse_decimal(digits) {
        Some(bits) if bits % 8 == 0 && (8..=256).contains(&bits) => Ok(bits as u16),
        _ => Err(format!("invalid integer width '{digits}'")),
    }
}

/// Plain decimal without sign or leading zeros.
fn parse_decimal(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }
    s.parse().ok()
}

/// Split a tuple or parameter-list body on commas that are not nested
/// inside parentheses. An empty (or all-whitespace) body yields no parts.
pub fn split_components(body: &str) -> Result<Vec<&str>, String> {
    if body.trim().is_empty() {
        return Ok(vec![]);
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or("unbalanced ')'")?,
            ',' if depth == 0 => {
                parts.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced '('".into());
    }
    parts.push(body[start..].trim());
    Ok(parts)
}
