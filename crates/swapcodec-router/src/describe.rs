//! One-line human-readable summaries of router calls.
//!
//! Token legs render as `SYMBOL (0xAddress)`, or just `(0xAddress)` when the
//! token is not in the table. Swaps name only the first and last hop of the
//! path. Amounts use the decimals of the token they are denominated in.

use alloy_primitives::{Address, U256};
use swapcodec_core::{call::DecodedCall, error::DecodeError};
use tracing::debug;

use crate::amount::format_amount;
use crate::config::SummaryConfig;
use crate::router::RouterCall;
use crate::tokens::TokenTable;

/// Summarize a decoded call with the default [`SummaryConfig`].
///
/// Returns `Ok(None)` for methods outside the router enumeration.
pub fn describe(call: &DecodedCall, tokens: &TokenTable) -> Result<Option<String>, DecodeError> {
    describe_with(call, tokens, &SummaryConfig::default())
}

/// Summarize a decoded call.
///
/// # Errors
/// `MethodShapeMismatch` if a supported method was decoded with unexpected
/// arguments.
pub fn describe_with(
    call: &DecodedCall,
    tokens: &TokenTable,
    config: &SummaryConfig,
) -> Result<Option<String>, DecodeError> {
    let parsed = RouterCall::from_call(call)?;
    let line = Summarizer { tokens, config }.line(&parsed);
    if line.is_none() {
        debug!(method = %call.function_name, "no summary for unsupported method");
    }
    Ok(line)
}

impl RouterCall {
    /// Render this call as a summary line. `None` for `Unsupported`.
    pub fn summarize(&self, tokens: &TokenTable, config: &SummaryConfig) -> Option<String> {
        Summarizer { tokens, config }.line(self)
    }
}

struct Summarizer<'a> {
    tokens: &'a TokenTable,
    config: &'a SummaryConfig,
}

impl Summarizer<'_> {
    fn line(&self, call: &RouterCall) -> Option<String> {
        let native = &self.config.native_symbol;
        let line = match call {
            RouterCall::AddLiquidity(c) => format!(
                "Added liquidity (method: 'addLiquidity') for token A {} (amount desired: {}, amount minimum: {}) and token B {} (amount desired: {}, amount minimum: {})",
                self.leg(&c.token_a),
                self.amount(&c.token_a, c.amount_a_desired),
                self.amount(&c.token_a, c.amount_a_min),
                self.leg(&c.token_b),
                self.amount(&c.token_b, c.amount_b_desired),
                self.amount(&c.token_b, c.amount_b_min),
            ),
            RouterCall::AddLiquidityEth(c) => format!(
                "Added liquidity (method: 'addLiquidityETH') for {native} (amount minimum: {}) and token {} (amount desired: {}, amount minimum: {})",
                self.native_amount(c.amount_eth_min),
                self.leg(&c.token),
                self.amount(&c.token, c.amount_token_desired),
                self.amount(&c.token, c.amount_token_min),
            ),
            RouterCall::RemoveLiquidity(c) => format!(
                "Removed {} liquidity (method: 'removeLiquidity') for token A {} (amount minimum: {}) and token B {} (amount minimum: {})",
                self.liquidity(c.liquidity),
                self.leg(&c.token_a),
                self.amount(&c.token_a, c.amount_a_min),
                self.leg(&c.token_b),
                self.amount(&c.token_b, c.amount_b_min),
            ),
            RouterCall::RemoveLiquidityEth(c) => format!(
                "Removed {} liquidity (method: 'removeLiquidityETH') for {native} (amount minimum: {}) and token {} (amount minimum: {})",
                self.liquidity(c.liquidity),
                self.native_amount(c.amount_eth_min),
                self.leg(&c.token),
                self.amount(&c.token, c.amount_token_min),
            ),
            RouterCall::SwapExactTokensForTokens(c) => {
                let (from, to) = (c.path.first(), c.path.last());
                format!(
                    "Swapped (method: 'swapExactTokensForTokens') {} {} for {} (amount minimum: {})",
                    self.path_amount(from, c.amount_in),
                    self.path_leg(from),
                    self.path_leg(to),
                    self.path_amount(to, c.amount_out_min),
                )
            }
            RouterCall::SwapTokensForExactTokens(c) => {
                let (from, to) = (c.path.first(), c.path.last());
                format!(
                    "Swapped (method: 'swapTokensForExactTokens') {} (amount maximum: {}) for {} {}",
                    self.path_leg(from),
                    self.path_amount(from, c.amount_in_max),
                    self.path_amount(to, c.amount_out),
                    self.path_leg(to),
                )
            }
            RouterCall::SwapExactEthForTokens(c) => {
                let to = c.path.last();
                format!(
                    "Swapped (method: 'swapExactETHForTokens') {native} for {} (amount minimum: {})",
                    self.path_leg(to),
                    self.path_amount(to, c.amount_out_min),
                )
            }
            RouterCall::SwapTokensForExactEth(c) => {
                let from = c.path.first();
                format!(
                    "Swapped (method: 'swapTokensForExactETH') {} (amount maximum: {}) for {} {native}",
                    self.path_leg(from),
                    self.path_amount(from, c.amount_in_max),
                    self.native_amount(c.amount_out),
                )
            }
            RouterCall::SwapExactTokensForEth(c) => {
                let from = c.path.first();
                format!(
                    "Swapped (method: 'swapExactTokensForETH') {} {} for {native} (amount minimum: {})",
                    self.path_amount(from, c.amount_in),
                    self.path_leg(from),
                    self.native_amount(c.amount_out_min),
                )
            }
            RouterCall::SwapEthForExactTokens(c) => {
                let to = c.path.last();
                format!(
                    "Swapped (method: 'swapETHForExactTokens') {native} for {} {}",
                    self.path_amount(to, c.amount_out),
                    self.path_leg(to),
                )
            }
            RouterCall::Unsupported { .. } => return None,
        };
        Some(line)
    }

    fn leg(&self, token: &Address) -> String {
        match self.tokens.symbol_or_empty(token) {
            "" => format!("({token})"),
            symbol => format!("{symbol} ({token})"),
        }
    }

    fn path_leg(&self, token: Option<&Address>) -> String {
        token.map_or_else(|| "(empty path)".to_string(), |t| self.leg(t))
    }

    fn decimals(&self, token: &Address) -> u8 {
        self.tokens
            .resolve_symbol(token)
            .map_or(self.config.default_decimals, |t| t.decimals)
    }

    fn amount(&self, token: &Address, raw: U256) -> String {
        format_amount(raw, self.decimals(token))
    }

    fn path_amount(&self, token: Option<&Address>, raw: U256) -> String {
        let decimals = token.map_or(self.config.default_decimals, |t| self.decimals(t));
        format_amount(raw, decimals)
    }

    fn native_amount(&self, raw: U256) -> String {
        format_amount(raw, self.config.native_decimals)
    }

    fn liquidity(&self, raw: U256) -> String {
        format_amount(raw, self.config.liquidity_decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{AddLiquidityEth, ExactOut, NativeExactOut, RemoveLiquidity};
    use crate::tokens::Token;
    use alloy_primitives::address;
    use swapcodec_core::{call::DecodedParam, Value};

    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    const ME: Address = address!("1111111111111111111111111111111111111111");

    fn tokens() -> TokenTable {
        TokenTable::new([
            Token::new(WETH, "WETH", 18),
            Token::new(USDC, "USDC", 6),
            Token::new(DAI, "DAI", 18),
        ])
    }

    fn e18(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
    }

    fn summary(call: RouterCall) -> String {
        call.summarize(&tokens(), &SummaryConfig::default()).unwrap()
    }

    #[test]
    fn exact_out_uses_token_decimals() {
        let line = summary(RouterCall::SwapTokensForExactTokens(ExactOut {
            amount_out: U256::from(2_500_000u64),
            amount_in_max: e18(3),
            path: vec![DAI, WETH, USDC],
            to: ME,
            deadline: U256::ZERO,
        }));
        assert_eq!(
            line,
            format!("Swapped (method: 'swapTokensForExactTokens') DAI ({DAI}) (amount maximum: 3) for 2.5 USDC ({USDC})")
        );
        assert!(!line.contains("WETH"));
    }

    #[test]
    fn native_leg_uses_configured_symbol() {
        let call = RouterCall::SwapEthForExactTokens(NativeExactOut {
            amount_out: U256::from(1_000_000u64),
            path: vec![WETH, USDC],
            to: ME,
            deadline: U256::ZERO,
        });
        let line = call
            .summarize(&tokens(), &SummaryConfig::with_native_symbol("ONE"))
            .unwrap();
        assert_eq!(line, format!("Swapped (method: 'swapETHForExactTokens') ONE for 1 USDC ({USDC})"));
    }

    #[test]
    fn every_minimum_is_formatted() {
        let line = summary(RouterCall::AddLiquidityEth(AddLiquidityEth {
            token: USDC,
            amount_token_desired: U256::from(10_000_000u64),
            amount_token_min: U256::from(9_500_000u64),
            amount_eth_min: e18(1) / U256::from(4u64),
            to: ME,
            deadline: U256::ZERO,
        }));
        assert_eq!(
            line,
            format!("Added liquidity (method: 'addLiquidityETH') for ETH (amount minimum: 0.25) and token USDC ({USDC}) (amount desired: 10, amount minimum: 9.5)")
        );
    }

    #[test]
    fn remove_liquidity_unknown_token() {
        let stranger = address!("2222222222222222222222222222222222222222");
        let line = summary(RouterCall::RemoveLiquidity(RemoveLiquidity {
            token_a: stranger,
            token_b: USDC,
            liquidity: e18(1) / U256::from(2u64),
            amount_a_min: e18(7),
            amount_b_min: U256::from(1u64),
            to: ME,
            deadline: U256::ZERO,
        }));
        assert_eq!(
            line,
            format!("Removed 0.5 liquidity (method: 'removeLiquidity') for token A ({stranger}) (amount minimum: 7) and token B USDC ({USDC}) (amount minimum: 0.000001)")
        );
    }

    #[test]
    fn empty_path_does_not_fail() {
        let line = summary(RouterCall::SwapTokensForExactEth(ExactOut {
            amount_out: e18(1),
            amount_in_max: e18(2),
            path: vec![],
            to: ME,
            deadline: U256::ZERO,
        }));
        assert_eq!(
            line,
            "Swapped (method: 'swapTokensForExactETH') (empty path) (amount maximum: 2) for 1 ETH"
        );
    }

    #[test]
    fn describe_unsupported_is_none() {
        let call = DecodedCall {
            function_name: "skim".into(),
            selector: [0xbc, 0x25, 0xcf, 0x77],
            inputs: vec![DecodedParam {
                name: "to".into(),
                ty: "address".parse().unwrap(),
                value: Value::Address(ME),
            }],
        };
        assert_eq!(describe(&call, &tokens()).unwrap(), None);
    }

    #[test]
    fn describe_shape_mismatch_is_error() {
        let call = DecodedCall {
            function_name: "swapExactETHForTokens".into(),
            selector: [0; 4],
            inputs: vec![],
        };
        assert!(matches!(
            describe(&call, &tokens()),
            Err(DecodeError::MethodShapeMismatch { .. })
        ));
    }
}
