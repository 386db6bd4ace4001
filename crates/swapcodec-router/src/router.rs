//! Closed enumeration of the constant-product router methods we interpret.
//!
//! A [`DecodedCall`] is mapped onto one [`RouterCall`] variant by method
//! name. Arguments are taken by position, never by name, and each one must
//! have the ABI shape the router declares for it. A call whose name matches
//! but whose shape does not is a `MethodShapeMismatch`: the interface and the
//! enumeration disagree, which is a defect rather than bad input.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use swapcodec_core::{call::DecodedCall, error::DecodeError, TypeTag};

/// `addLiquidity(tokenA, tokenB, amountADesired, amountBDesired, amountAMin, amountBMin, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidity {
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a_desired: U256,
    pub amount_b_desired: U256,
    pub amount_a_min: U256,
    pub amount_b_min: U256,
    pub to: Address,
    pub deadline: U256,
}

/// `addLiquidityETH(token, amountTokenDesired, amountTokenMin, amountETHMin, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidityEth {
    pub token: Address,
    pub amount_token_desired: U256,
    pub amount_token_min: U256,
    pub amount_eth_min: U256,
    pub to: Address,
    pub deadline: U256,
}

/// `removeLiquidity(tokenA, tokenB, liquidity, amountAMin, amountBMin, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    pub token_a: Address,
    pub token_b: Address,
    pub liquidity: U256,
    pub amount_a_min: U256,
    pub amount_b_min: U256,
    pub to: Address,
    pub deadline: U256,
}

/// `removeLiquidityETH(token, liquidity, amountTokenMin, amountETHMin, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidityEth {
    pub token: Address,
    pub liquidity: U256,
    pub amount_token_min: U256,
    pub amount_eth_min: U256,
    pub to: Address,
    pub deadline: U256,
}

/// Exact input amount, minimum output: `(amountIn, amountOutMin, path, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactIn {
    pub amount_in: U256,
    pub amount_out_min: U256,
    pub path: Vec<Address>,
    pub to: Address,
    pub deadline: U256,
}

/// Exact output amount, maximum input: `(amountOut, amountInMax, path, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactOut {
    pub amount_out: U256,
    pub amount_in_max: U256,
    pub path: Vec<Address>,
    pub to: Address,
    pub deadline: U256,
}

/// Native asset in (sent as call value), minimum output:
/// `(amountOutMin, path, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeExactIn {
    pub amount_out_min: U256,
    pub path: Vec<Address>,
    pub to: Address,
    pub deadline: U256,
}

/// Native asset in (sent as call value), exact output:
/// `(amountOut, path, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeExactOut {
    pub amount_out: U256,
    pub path: Vec<Address>,
    pub to: Address,
    pub deadline: U256,
}

/// A decoded router call, one variant per supported method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "args", rename_all = "camelCase")]
pub enum RouterCall {
    AddLiquidity(AddLiquidity),
    #[serde(rename = "addLiquidityETH")]
    AddLiquidityEth(AddLiquidityEth),
    RemoveLiquidity(RemoveLiquidity),
    #[serde(rename = "removeLiquidityETH")]
    RemoveLiquidityEth(RemoveLiquidityEth),
    SwapExactTokensForTokens(ExactIn),
    SwapTokensForExactTokens(ExactOut),
    #[serde(rename = "swapExactETHForTokens")]
    SwapExactEthForTokens(NativeExactIn),
    #[serde(rename = "swapTokensForExactETH")]
    SwapTokensForExactEth(ExactOut),
    #[serde(rename = "swapExactTokensForETH")]
    SwapExactTokensForEth(ExactIn),
    #[serde(rename = "swapETHForExactTokens")]
    SwapEthForExactTokens(NativeExactOut),
    /// Decoded fine, but not one of the methods above.
    Unsupported { method: String },
}

/// Method names of every supported variant, in router declaration order.
pub const SUPPORTED_METHODS: [&str; 10] = [
    "addLiquidity",
    "addLiquidityETH",
    "removeLiquidity",
    "removeLiquidityETH",
    "swapExactTokensForTokens",
    "swapTokensForExactTokens",
    "swapExactETHForTokens",
    "swapTokensForExactETH",
    "swapExactTokensForETH",
    "swapETHForExactTokens",
];

impl RouterCall {
    /// Interpret a decoded call.
    ///
    /// # Errors
    /// `MethodShapeMismatch` if the method is supported but its arguments do
    /// not have the expected count or types.
    pub fn from_call(call: &DecodedCall) -> Result<Self, DecodeError> {
        let method = call.function_name.as_str();
        let parsed = match method {
            "addLiquidity" => {
                let a = Args::new(call, 8)?;
                RouterCall::AddLiquidity(AddLiquidity {
                    token_a: a.address(0)?,
                    token_b: a.address(1)?,
                    amount_a_desired: a.uint(2)?,
                    amount_b_desired: a.uint(3)?,
                    amount_a_min: a.uint(4)?,
                    amount_b_min: a.uint(5)?,
                    to: a.address(6)?,
                    deadline: a.uint(7)?,
                })
            }
            "addLiquidityETH" => {
                let a = Args::new(call, 6)?;
                RouterCall::AddLiquidityEth(AddLiquidityEth {
                    token: a.address(0)?,
                    amount_token_desired: a.uint(1)?,
                    amount_token_min: a.uint(2)?,
                    amount_eth_min: a.uint(3)?,
                    to: a.address(4)?,
                    deadline: a.uint(5)?,
                })
            }
            "removeLiquidity" => {
                let a = Args::new(call, 7)?;
                RouterCall::RemoveLiquidity(RemoveLiquidity {
                    token_a: a.address(0)?,
                    token_b: a.address(1)?,
                    liquidity: a.uint(2)?,
                    amount_a_min: a.uint(3)?,
                    amount_b_min: a.uint(4)?,
                    to: a.address(5)?,
                    deadline: a.uint(6)?,
                })
            }
            "removeLiquidityETH" => {
                let a = Args::new(call, 6)?;
                RouterCall::RemoveLiquidityEth(RemoveLiquidityEth {
                    token: a.address(0)?,
                    liquidity: a.uint(1)?,
                    amount_token_min: a.uint(2)?,
                    amount_eth_min: a.uint(3)?,
                    to: a.address(4)?,
                    deadline: a.uint(5)?,
                })
            }
            "swapExactTokensForTokens" => RouterCall::SwapExactTokensForTokens(exact_in(call)?),
            "swapExactTokensForETH" => RouterCall::SwapExactTokensForEth(exact_in(call)?),
            "swapTokensForExactTokens" => RouterCall::SwapTokensForExactTokens(exact_out(call)?),
            "swapTokensForExactETH" => RouterCall::SwapTokensForExactEth(exact_out(call)?),
            "swapExactETHForTokens" => {
                let a = Args::new(call, 4)?;
                RouterCall::SwapExactEthForTokens(NativeExactIn {
                    amount_out_min: a.uint(0)?,
                    path: a.path(1)?,
                    to: a.address(2)?,
                    deadline: a.uint(3)?,
                })
            }
            "swapETHForExactTokens" => {
                let a = Args::new(call, 4)?;
                RouterCall::SwapEthForExactTokens(NativeExactOut {
                    amount_out: a.uint(0)?,
                    path: a.path(1)?,
                    to: a.address(2)?,
                    deadline: a.uint(3)?,
                })
            }
            other => RouterCall::Unsupported {
                method: other.to_string(),
            },
        };
        Ok(parsed)
    }

    /// The router method name this variant was decoded from.
    pub fn method_name(&self) -> &str {
        match self {
            RouterCall::AddLiquidity(_) => "addLiquidity",
            RouterCall::AddLiquidityEth(_) => "addLiquidityETH",
            RouterCall::RemoveLiquidity(_) => "removeLiquidity",
            RouterCall::RemoveLiquidityEth(_) => "removeLiquidityETH",
            RouterCall::SwapExactTokensForTokens(_) => "swapExactTokensForTokens",
            RouterCall::SwapTokensForExactTokens(_) => "swapTokensForExactTokens",
            RouterCall::SwapExactEthForTokens(_) => "swapExactETHForTokens",
            RouterCall::SwapTokensForExactEth(_) => "swapTokensForExactETH",
            RouterCall::SwapExactTokensForEth(_) => "swapExactTokensForETH",
            RouterCall::SwapEthForExactTokens(_) => "swapETHForExactTokens",
            RouterCall::Unsupported { method } => method,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, RouterCall::Unsupported { .. })
    }
}

fn exact_in(call: &DecodedCall) -> Result<ExactIn, DecodeError> {
    let a = Args::new(call, 5)?;
    Ok(ExactIn {
        amount_in: a.uint(0)?,
        amount_out_min: a.uint(1)?,
        path: a.path(2)?,
        to: a.address(3)?,
        deadline: a.uint(4)?,
    })
}

fn exact_out(call: &DecodedCall) -> Result<ExactOut, DecodeError> {
    let a = Args::new(call, 5)?;
    Ok(ExactOut {
        amount_out: a.uint(0)?,
        amount_in_max: a.uint(1)?,
        path: a.path(2)?,
        to: a.address(3)?,
        deadline: a.uint(4)?,
    })
}

/// Positional argument access with shape checks.
struct Args<'a> {
    call: &'a DecodedCall,
}

impl<'a> Args<'a> {
    fn new(call: &'a DecodedCall, arity: usize) -> Result<Self, DecodeError> {
        let args = Self { call };
        if call.inputs.len() != arity {
            return Err(args.mismatch(format!(
                "expected {arity} arguments, got {}",
                call.inputs.len()
            )));
        }
        Ok(args)
    }

    fn mismatch(&self, reason: String) -> DecodeError {
        DecodeError::MethodShapeMismatch {
            method: self.call.function_name.clone(),
            reason,
        }
    }

    fn wrong_type(&self, index: usize, expected: &str) -> DecodeError {
        let found = self
            .call
            .arg(index)
            .map(|p| p.ty.to_string())
            .unwrap_or_default();
        self.mismatch(format!("argument {index}: expected {expected}, got {found}"))
    }

    fn uint(&self, index: usize) -> Result<U256, DecodeError> {
        self.call
            .arg(index)
            .filter(|p| matches!(p.ty, TypeTag::Uint(_)))
            .and_then(|p| p.value.as_uint())
            .ok_or_else(|| self.wrong_type(index, "uint"))
    }

    fn address(&self, index: usize) -> Result<Address, DecodeError> {
        self.call
            .arg(index)
            .filter(|p| p.ty == TypeTag::Address)
            .and_then(|p| p.value.as_address())
            .ok_or_else(|| self.wrong_type(index, "address"))
    }

    fn path(&self, index: usize) -> Result<Vec<Address>, DecodeError> {
        self.call
            .arg(index)
            .filter(|p| p.ty.is_address_array())
            .and_then(|p| p.value.as_address_array())
            .ok_or_else(|| self.wrong_type(index, "address[]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use swapcodec_core::{call::DecodedParam, Value};

    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const ME: Address = address!("1111111111111111111111111111111111111111");

    fn param(name: &str, ty: &str, value: Value) -> DecodedParam {
        DecodedParam {
            name: name.into(),
            ty: ty.parse().unwrap(),
            value,
        }
    }

    fn uint(n: u64) -> Value {
        Value::Uint(U256::from(n))
    }

    fn call(name: &str, inputs: Vec<DecodedParam>) -> DecodedCall {
        DecodedCall {
            function_name: name.into(),
            selector: [0; 4],
            inputs,
        }
    }

    fn path(items: &[Address]) -> Value {
        Value::Array(items.iter().map(|a| Value::Address(*a)).collect())
    }

    #[test]
    fn exact_eth_for_tokens() {
        let c = call(
            "swapExactETHForTokens",
            vec![
                param("amountOutMin", "uint256", uint(5)),
                param("path", "address[]", path(&[WETH, USDC])),
                param("to", "address", Value::Address(ME)),
                param("deadline", "uint256", uint(99)),
            ],
        );
        let parsed = RouterCall::from_call(&c).unwrap();
        assert_eq!(
            parsed,
            RouterCall::SwapExactEthForTokens(NativeExactIn {
                amount_out_min: U256::from(5u64),
                path: vec![WETH, USDC],
                to: ME,
                deadline: U256::from(99u64),
            })
        );
        assert_eq!(parsed.method_name(), "swapExactETHForTokens");
    }

    #[test]
    fn arguments_taken_by_position_not_name() {
        let c = call(
            "removeLiquidityETH",
            vec![
                param("a", "address", Value::Address(USDC)),
                param("b", "uint256", uint(1)),
                param("c", "uint256", uint(2)),
                param("d", "uint256", uint(3)),
                param("e", "address", Value::Address(ME)),
                param("f", "uint256", uint(4)),
            ],
        );
        match RouterCall::from_call(&c).unwrap() {
            RouterCall::RemoveLiquidityEth(r) => {
                assert_eq!(r.token, USDC);
                assert_eq!(r.liquidity, U256::from(1u64));
                assert_eq!(r.amount_eth_min, U256::from(3u64));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wrong_arity_is_shape_mismatch() {
        let c = call("swapExactTokensForTokens", vec![param("amountIn", "uint256", uint(1))]);
        let err = RouterCall::from_call(&c).unwrap_err();
        assert!(matches!(err, DecodeError::MethodShapeMismatch { ref method, .. } if method == "swapExactTokensForTokens"));
    }

    #[test]
    fn wrong_type_is_shape_mismatch() {
        let c = call(
            "swapETHForExactTokens",
            vec![
                param("amountOut", "uint256", uint(1)),
                param("path", "address", Value::Address(WETH)),
                param("to", "address", Value::Address(ME)),
                param("deadline", "uint256", uint(2)),
            ],
        );
        let err = RouterCall::from_call(&c).unwrap_err();
        assert!(err.to_string().contains("address[]"));
    }

    #[test]
    fn unknown_method_is_unsupported() {
        let c = call("skim", vec![param("to", "address", Value::Address(ME))]);
        let parsed = RouterCall::from_call(&c).unwrap();
        assert!(!parsed.is_supported());
        assert_eq!(parsed.method_name(), "skim");
    }

    #[test]
    fn supported_names_map_back() {
        for name in SUPPORTED_METHODS {
            // Every supported name with no arguments fails the arity check
            // rather than falling through to Unsupported.
            assert!(RouterCall::from_call(&call(name, vec![])).is_err(), "{name}");
        }
    }
}
