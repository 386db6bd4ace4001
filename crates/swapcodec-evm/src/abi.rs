//! Head/tail ABI decoder.
//!
//! Solidity ABI encodes a parameter list as a *head* of 32-byte slots, one
//! per parameter, followed by a *tail* holding the contents of dynamic
//! values:
//! - a static value sits inline in its head slot(s)
//! - a dynamic value's head slot holds a byte offset to its content,
//!   measured from the start of the enclosing sequence (the "region base")
//! - `T[]` content is an element count followed by the elements encoded as
//!   a sequence of their own; `T[N]` and tuples are encoded as a sequence
//!   with no count
//!
//! The region base is the part that is easy to get wrong: offsets inside a
//! nested array or tuple are relative to the start of *that* sequence, not
//! to the start of the payload.
//!
//! All reads are bounds-checked. A read past the end of the payload is
//! `TruncatedPayload`; an offset pointer that lands outside the payload is
//! `OffsetOutOfRange`. Nothing is clamped or wrapped.

use alloy_primitives::{Address, I256, U256};
use swapcodec_core::{error::DecodeError, TypeTag, Value, WORD};

/// Decode an ABI-encoded parameter list (the calldata after the selector).
///
/// Returns one value per entry of `types`, in order. Bytes after the last
/// parameter's content are ignored.
pub fn decode(types: &[TypeTag], payload: &[u8]) -> Result<Vec<Value>, DecodeError> {
    Reader { data: payload }.fields(0, types)
}

/// Decode a payload holding a single parameter of type `ty`.
pub fn decode_single(ty: &TypeTag, payload: &[u8]) -> Result<Value, DecodeError> {
    let mut values = decode(std::slice::from_ref(ty), payload)?;
    Ok(values.remove(0))
}

struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn truncated(&self, offset: usize, needed: usize) -> DecodeError {
        DecodeError::TruncatedPayload {
            offset,
            needed,
            len: self.data.len(),
        }
    }

    /// Check that `needed` bytes are available at `offset`.
    fn ensure(&self, offset: usize, needed: usize) -> Result<(), DecodeError> {
        match offset.checked_add(needed) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(self.truncated(offset, needed)),
        }
    }

    fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(offset, len)?;
        Ok(&self.data[offset..offset + len])
    }

    fn word(&self, offset: usize) -> Result<[u8; WORD], DecodeError> {
        let slice = self.bytes(offset, WORD)?;
        slice.try_into().map_err(|_| self.truncated(offset, WORD))
    }

    /// A length or element count. Values too large for `usize` cannot fit in
    /// the payload either, so they are reported as truncation.
    fn length(&self, offset: usize) -> Result<usize, DecodeError> {
        let word = self.word(offset)?;
        word_to_usize(&word).ok_or_else(|| self.truncated(offset + WORD, usize::MAX))
    }

    /// Follow the offset pointer stored at `head`, relative to `base`.
    fn pointer(&self, base: usize, head: usize) -> Result<usize, DecodeError> {
        let word = self.word(head)?;
        let target = word_to_usize(&word).and_then(|rel| base.checked_add(rel));
        match target {
            // Every dynamic encoding starts with at least one word, so a
            // pointer to the very end is already out of range.
            Some(at) if at < self.data.len() => Ok(at),
            _ => Err(DecodeError::OffsetOutOfRange {
                offset: format!("{}+{}", base, U256::from_be_bytes(word)),
                len: self.data.len(),
            }),
        }
    }

    /// Decode a heterogeneous sequence (parameter list or tuple) whose head
    /// starts at `base`.
    fn fields(&self, base: usize, types: &[TypeTag]) -> Result<Vec<Value>, DecodeError> {
        let span = types
            .iter()
            .try_fold(0usize, |acc, ty| acc.checked_add(ty.head_size()))
            .ok_or_else(|| self.truncated(base, usize::MAX))?;
        self.ensure(base, span)?;

        let mut values = Vec::with_capacity(types.len());
        let mut head = base;
        for ty in types {
            values.push(self.member(base, head, ty)?);
            head += ty.head_size();
        }
        Ok(values)
    }

    /// Decode `count` elements of type `elem` whose head starts at `base`.
    fn elements(&self, base: usize, elem: &TypeTag, count: usize) -> Result<Vec<Value>, DecodeError> {
        let stride = elem.head_size();
        // A zero-width element would let `count` come straight from the
        // payload without any bytes backing it.
        if stride == 0 {
            return Err(DecodeError::InvalidValue {
                ty: elem.to_string(),
                offset: base,
                reason: "element type has zero head width".into(),
            });
        }
        let span = count
            .checked_mul(stride)
            .ok_or_else(|| self.truncated(base, usize::MAX))?;
        // Bounds the allocation below by the payload size.
        self.ensure(base, span)?;

        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.member(base, base + i * stride, elem)?);
        }
        Ok(values)
    }

    /// Decode one member of the sequence at `base` whose head slot is `head`.
    fn member(&self, base: usize, head: usize, ty: &TypeTag) -> Result<Value, DecodeError> {
        let at = if ty.is_dynamic() {
            self.pointer(base, head)?
        } else {
            head
        };
        self.value(ty, at)
    }

    /// Decode a value of type `ty` whose encoding starts at `at`.
    fn value(&self, ty: &TypeTag, at: usize) -> Result<Value, DecodeError> {
        match ty {
            TypeTag::Uint(_) => Ok(Value::Uint(U256::from_be_bytes(self.word(at)?))),
            TypeTag::Int(_) => Ok(Value::Int(I256::from_raw(U256::from_be_bytes(self.word(at)?)))),
            TypeTag::Bool => Ok(Value::Bool(self.word(at)?.iter().any(|b| *b != 0))),
            TypeTag::Address => Ok(Value::Address(Address::from_slice(&self.word(at)?[12..]))),
            TypeTag::FixedBytes(n) => {
                let word = self.word(at)?;
                let bytes = word.get(..*n as usize).ok_or_else(|| DecodeError::InvalidValue {
                    ty: ty.to_string(),
                    offset: at,
                    reason: format!("bytes{n} is wider than a word"),
                })?;
                Ok(Value::FixedBytes(bytes.to_vec()))
            }
            TypeTag::Bytes => Ok(Value::Bytes(self.dynamic_bytes(at)?.to_vec())),
            TypeTag::String => {
                let raw = self.dynamic_bytes(at)?;
                let s = std::str::from_utf8(raw).map_err(|e| DecodeError::InvalidValue {
                    ty: ty.to_string(),
                    offset: at,
                    reason: e.to_string(),
                })?;
                Ok(Value::String(s.to_string()))
            }
            TypeTag::FixedArray(elem, len) => Ok(Value::Array(self.elements(at, elem, *len)?)),
            TypeTag::DynamicArray(elem) => {
                let count = self.length(at)?;
                Ok(Value::Array(self.elements(at + WORD, elem, count)?))
            }
            TypeTag::Tuple(fields) => Ok(Value::Tuple(self.fields(at, fields)?)),
        }
    }

    /// Length-prefixed byte content of `bytes` / `string`. The content is
    /// right-padded to a whole word, and the padding must be present too.
    fn dynamic_bytes(&self, at: usize) -> Result<&'a [u8], DecodeError> {
        let len = self.length(at)?;
        let padded = len
            .checked_add(WORD - 1)
            .map(|n| n / WORD * WORD)
            .ok_or_else(|| self.truncated(at + WORD, usize::MAX))?;
        self.ensure(at + WORD, padded)?;
        self.bytes(at + WORD, len)
    }
}

/// Interpret a big-endian word as `usize`, or `None` if it does not fit.
fn word_to_usize(word: &[u8; WORD]) -> Option<usize> {
    let (high, low) = word.split_at(WORD - 8);
    if high.iter().any(|b| *b != 0) {
        return None;
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(buf)).ok()
}
