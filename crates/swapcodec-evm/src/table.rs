//! Selector table: 4-byte discriminator → method descriptor.
//!
//! Built once per contract interface and read-only afterwards, so a single
//! table can be shared across threads (e.g. behind an `Arc`) without locking.

use indexmap::IndexMap;
use swapcodec_core::error::DecodeError;
use tracing::debug;

use crate::interface::methods_from_abi_json;
use crate::method::MethodDescriptor;

/// Immutable lookup from selector to method, in interface declaration order.
#[derive(Debug, Clone, Default)]
pub struct SelectorTable {
    by_selector: IndexMap<[u8; 4], MethodDescriptor>,
}

impl SelectorTable {
    /// Build a table from method descriptors.
    ///
    /// # Errors
    /// `InvalidInterface` if two methods share a selector (including the same
    /// method listed twice).
    pub fn new(methods: impl IntoIterator<Item = MethodDescriptor>) -> Result<Self, DecodeError> {
        let mut by_selector: IndexMap<[u8; 4], MethodDescriptor> = IndexMap::new();
        for method in methods {
            let selector = method.selector();
            if let Some(existing) = by_selector.get(&selector) {
                return Err(DecodeError::InvalidInterface {
                    reason: format!(
                        "selector 0x{} shared by '{}' and '{}'",
                        hex::encode(selector),
                        existing.signature(),
                        method.signature()
                    ),
                });
            }
            by_selector.insert(selector, method);
        }
        debug!(methods = by_selector.len(), "selector table built");
        Ok(Self { by_selector })
    }

    /// Build a table from a standard ABI JSON document.
    pub fn from_abi_json(abi_json: &str) -> Result<Self, DecodeError> {
        Self::new(methods_from_abi_json(abi_json)?)
    }

    /// Build a table from human-readable signatures, e.g.
    /// `["transfer(address to, uint256 amount)"]`.
    pub fn from_signatures<'a>(
        signatures: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, DecodeError> {
        let methods = signatures
            .into_iter()
            .map(MethodDescriptor::parse_signature)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(methods)
    }

    /// Find the method for a selector. Only exact 4-byte matches count.
    ///
    /// # Errors
    /// `UnknownMethod` if the selector is not in the table.
    pub fn resolve(&self, selector: [u8; 4]) -> Result<&MethodDescriptor, DecodeError> {
        self.by_selector
            .get(&selector)
            .ok_or(DecodeError::UnknownMethod { selector })
    }

    /// Look up a method by name. Overloads resolve to the first declared.
    pub fn get_by_name(&self, name: &str) -> Option<&MethodDescriptor> {
        self.by_selector.values().find(|m| m.name() == name)
    }

    /// All methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.by_selector.values()
    }

    pub fn len(&self) -> usize {
        self.by_selector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_selector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn erc20() -> SelectorTable {
        SelectorTable::from_signatures([
            "transfer(address to, uint256 amount)",
            "approve(address spender, uint256 amount)",
            "balanceOf(address)",
        ])
        .unwrap()
    }

    #[test]
    fn resolves_known_selector() {
        let table = erc20();
        let method = table.resolve([0xa9, 0x05, 0x9c, 0xbb]).unwrap();
        assert_eq!(method.name(), "transfer");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn unknown_selector_fails() {
        let err = erc20().resolve([0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownMethod { selector: [0, 0, 0, 0] }));
    }

    #[test]
    fn no_prefix_matching() {
        // Shares the first three bytes with transfer's 0xa9059cbb.
        let err = erc20().resolve([0xa9, 0x05, 0x9c, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownMethod { .. }));
    }

    #[test]
    fn duplicate_method_rejected() {
        let err = SelectorTable::from_signatures(["transfer(address,uint256)", "transfer(address to, uint256 value)"])
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInterface { .. }));
    }

    #[test]
    fn overloads_are_distinct_entries() {
        let table = SelectorTable::from_signatures([
            "safeTransferFrom(address,address,uint256)",
            "safeTransferFrom(address,address,uint256,bytes)",
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get_by_name("safeTransferFrom").unwrap().signature(),
            "safeTransferFrom(address,address,uint256)"
        );
    }

    #[test]
    fn building_is_deterministic() {
        let a: Vec<_> = erc20().methods().map(|m| m.selector()).collect();
        let b: Vec<_> = erc20().methods().map(|m| m.selector()).collect();
        assert_eq!(a, b);
        let names: Vec<_> = erc20().methods().map(|m| m.name().to_string()).collect();
        assert_eq!(names, ["transfer", "approve", "balanceOf"]);
    }
}
