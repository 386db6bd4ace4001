//! Token reference table.
//!
//! Read-only lookup from token address to symbol and decimals. Built once
//! at startup (from code or a JSON token list) and shared by every
//! `describe` call; lookups never fail, unknown addresses just miss.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use swapcodec_core::error::DecodeError;
use tracing::{debug, warn};

/// A known ERC-20 token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    /// Decimal exponent of the token's minor unit (18 for most tokens, 6 for USDC)
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Token {
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
            name: None,
        }
    }
}

/// Accepted JSON layouts: a bare array, or a token-list document.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenDocument {
    List(Vec<Token>),
    TokenList { tokens: Vec<Token> },
}

/// Immutable address → token lookup, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    tokens: Vec<Token>,
    by_address: HashMap<Address, usize>,
}

impl TokenTable {
    /// Build a table. When an address appears more than once the first
    /// entry wins.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut table = Self::default();
        for token in tokens {
            if table.by_address.contains_key(&token.address) {
                warn!(address = %token.address, symbol = %token.symbol, "duplicate token ignored");
                continue;
            }
            table.by_address.insert(token.address, table.tokens.len());
            table.tokens.push(token);
        }
        debug!(tokens = table.tokens.len(), "token table built");
        table
    }

    /// Parse a JSON token list, either `[{..}, ..]` or `{"tokens": [{..}, ..]}`.
    /// Unknown fields (`chainId`, `logoURI`, ...) are ignored.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let doc: TokenDocument = serde_json::from_str(json)?;
        let tokens = match doc {
            TokenDocument::List(tokens) | TokenDocument::TokenList { tokens } => tokens,
        };
        Ok(Self::new(tokens))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DecodeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Look up a token by address.
    pub fn resolve_symbol(&self, address: &Address) -> Option<&Token> {
        self.by_address.get(address).map(|&i| &self.tokens[i])
    }

    /// The token's symbol, or `""` when the address is unknown.
    pub fn symbol_or_empty(&self, address: &Address) -> &str {
        self.resolve_symbol(address)
            .map(|t| t.symbol.as_str())
            .unwrap_or("")
    }

    /// Case-insensitive symbol search. Returns the first match.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

    #[test]
    fn lookup_by_address_and_symbol() {
        let table = TokenTable::new([Token::new(WETH, "WETH", 18), Token::new(USDC, "USDC", 6)]);
        assert_eq!(table.resolve_symbol(&USDC).map(|t| t.decimals), Some(6));
        assert_eq!(table.symbol_or_empty(&WETH), "WETH");
        assert_eq!(table.find_by_symbol("usdc").map(|t| t.address), Some(USDC));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unknown_address_is_empty_symbol() {
        let table = TokenTable::new([Token::new(WETH, "WETH", 18)]);
        assert!(table.resolve_symbol(&USDC).is_none());
        assert_eq!(table.symbol_or_empty(&USDC), "");
    }

    #[test]
    fn first_duplicate_wins() {
        let table = TokenTable::new([Token::new(WETH, "WETH", 18), Token::new(WETH, "ETH2", 9)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.symbol_or_empty(&WETH), "WETH");
    }

    #[test]
    fn json_bare_array() {
        let json = r#"[
            {"address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "symbol": "WETH", "decimals": 18, "name": "Wrapped Ether"}
        ]"#;
        let table = TokenTable::from_json(json).unwrap();
        let weth = table.resolve_symbol(&WETH).unwrap();
        assert_eq!(weth.name.as_deref(), Some("Wrapped Ether"));
    }

    #[test]
    fn json_token_list_document() {
        let json = r#"{
            "name": "Example List",
            "tokens": [
                {"chainId": 1, "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "symbol": "USDC", "decimals": 6, "logoURI": "ipfs://x"}
            ]
        }"#;
        let table = TokenTable::from_json(json).unwrap();
        assert_eq!(table.symbol_or_empty(&USDC), "USDC");
    }

    #[test]
    fn json_invalid() {
        assert!(matches!(TokenTable::from_json("{}"), Err(DecodeError::Serde(_))));
    }
}
