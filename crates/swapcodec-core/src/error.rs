//! Error types for the SwapCodec decode pipeline.

use thiserror::Error;

/// Errors that can occur while building a selector table or decoding a call.
///
/// Every variant is local to the table build or to a single call: a failed
/// decode never leaves shared state behind.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A type string in the interface description is not valid ABI type syntax.
    #[error("invalid type syntax '{ty}': {reason}")]
    InvalidTypeSyntax { ty: String, reason: String },

    /// The interface description itself is malformed (bad JSON, duplicate selector, ...).
    #[error("invalid interface description: {reason}")]
    InvalidInterface { reason: String },

    /// The discriminator does not match any method in the selector table.
    #[error("unknown method selector 0x{}", hex::encode(selector))]
    UnknownMethod { selector: [u8; 4] },

    #[error("calldata too short: {len} bytes (need at least 4 for selector)")]
    CalldataTooShort { len: usize },

    /// A read would run past the end of the payload.
    #[error("truncated payload: need {needed} bytes at offset {offset}, payload has {len}")]
    TruncatedPayload {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// An offset pointer resolves to a position outside the payload.
    #[error("offset {offset} out of range (payload has {len} bytes)")]
    OffsetOutOfRange { offset: String, len: usize },

    /// The bytes were in range but do not form a valid value of the type.
    #[error("invalid {ty} value at offset {offset}: {reason}")]
    InvalidValue {
        ty: String,
        offset: usize,
        reason: String,
    },

    /// A decoded call does not have the arity or parameter types its
    /// router method requires.
    #[error("method '{method}' shape mismatch: {reason}")]
    MethodShapeMismatch { method: String, reason: String },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl DecodeError {
    /// Short machine-friendly tag for the error kind, used in logs and batch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidTypeSyntax { .. } => "invalid_type_syntax",
            DecodeError::InvalidInterface { .. } => "invalid_interface",
            DecodeError::UnknownMethod { .. } => "unknown_method",
            DecodeError::CalldataTooShort { .. } => "calldata_too_short",
            DecodeError::TruncatedPayload { .. } => "truncated_payload",
            DecodeError::OffsetOutOfRange { .. } => "offset_out_of_range",
            DecodeError::InvalidValue { .. } => "invalid_value",
            DecodeError::MethodShapeMismatch { .. } => "method_shape_mismatch",
            DecodeError::InvalidHex(_) => "invalid_hex",
            DecodeError::Io(_) => "io",
            DecodeError::Serde(_) => "serde",
        }
    }

    /// Whether the caller can skip this call and keep going.
    ///
    /// Interface and shape errors point at a broken setup rather than a bad
    /// transaction, so they are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            DecodeError::InvalidTypeSyntax { .. }
                | DecodeError::InvalidInterface { .. }
                | DecodeError::MethodShapeMismatch { .. }
        )
    }
}

/// Errors that can occur during batch decoding.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    #[error("Decode error at index {index}: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("{0}")]
    Other(String),
}
