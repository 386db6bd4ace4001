//! Method descriptors: a function's name, typed parameters, and selector.

use swapcodec_core::{error::DecodeError, types::split_components, TypeTag};

use crate::selector::selector_of;

/// A named, typed parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeTag,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeTag) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An immutable description of one contract method.
///
/// The selector is derived from the canonical signature when the descriptor
/// is built and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    name: String,
    inputs: Vec<Param>,
    outputs: Vec<Param>,
    selector: [u8; 4],
}

impl MethodDescriptor {
    /// Build a descriptor from parsed parameters.
    ///
    /// Blank parameter names are replaced with `arg{i}` (`out{i}` for outputs).
    pub fn from_params(name: impl Into<String>, inputs: Vec<Param>, outputs: Vec<Param>) -> Self {
        let name = name.into();
        let inputs = fill_names(inputs, "arg");
        let outputs = fill_names(outputs, "out");
        let selector = selector_of(&canonical_signature(&name, &inputs));
        Self {
            name,
            inputs,
            outputs,
            selector,
        }
    }

    /// Build a descriptor from `(parameter name, type string)` pairs.
    ///
    /// # Errors
    /// Returns `InvalidTypeSyntax` for the first type string that does not parse.
    pub fn new(
        name: impl Into<String>,
        inputs: &[(&str, &str)],
        outputs: &[(&str, &str)],
    ) -> Result<Self, DecodeError> {
        Ok(Self::from_params(name, parse_params(inputs)?, parse_params(outputs)?))
    }

    /// Parse a human-readable signature such as
    /// `swapExactTokensForTokens(uint256 amountIn, uint256, address[] calldata path, address to, uint256)`.
    ///
    /// A leading `function` keyword, parameter names and data locations are
    /// accepted. Outputs are left empty.
    pub fn parse_signature(signature: &str) -> Result<Self, DecodeError> {
        let invalid = |reason: &str| DecodeError::InvalidTypeSyntax {
            ty: signature.to_string(),
            reason: reason.to_string(),
        };

        let sig = signature.trim();
        let sig = sig.strip_prefix("function ").unwrap_or(sig).trim_start();
        let open = sig.find('(').ok_or_else(|| invalid("missing '('"))?;
        let name = sig[..open].trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Err(invalid("invalid method name"));
        }
        let body = sig[open + 1..]
            .trim_end()
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing ')'"))?;

        let mut inputs = Vec::new();
        for component in split_components(body).map_err(|e| invalid(&e))? {
            let (ty, param_name) = split_type_and_name(component);
            inputs.push(Param::new(param_name, ty.parse()?));
        }
        Ok(Self::from_params(name, inputs, vec![]))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Param] {
        &self.outputs
    }

    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    /// Selector as a hex string ("0xaabbccdd")
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        canonical_signature(&self.name, &self.inputs)
    }

    /// Input types in declaration order, ready for the ABI decoder.
    pub fn input_types(&self) -> Vec<TypeTag> {
        self.inputs.iter().map(|p| p.ty.clone()).collect()
    }
}

fn canonical_signature(name: &str, inputs: &[Param]) -> String {
    let types: Vec<_> = inputs.iter().map(|p| p.ty.to_string()).collect();
    format!("{name}({})", types.join(","))
}

fn fill_names(params: Vec<Param>, prefix: &str) -> Vec<Param> {
    params
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            if p.name.is_empty() {
                Param::new(format!("{prefix}{i}"), p.ty)
            } else {
                p
            }
        })
        .collect()
}

fn parse_params(pairs: &[(&str, &str)]) -> Result<Vec<Param>, DecodeError> {
    pairs
        .iter()
        .map(|(name, ty)| Ok(Param::new(*name, ty.parse()?)))
        .collect()
}

/// Split `address[] calldata path` into (`address[]`, `path`).
/// The type ends at the first whitespace outside parentheses.
fn split_type_and_name(component: &str) -> (&str, String) {
    let mut depth = 0usize;
    let mut end = component.len();
    for (i, c) in component.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                end = i;
                break;
            }
            _ => {}
        }
    }
    let name = component[end..]
        .split_whitespace()
        .filter(|w| !matches!(*w, "memory" | "calldata" | "storage" | "indexed"))
        .last()
        .unwrap_or_default()
        .to_string();
    (&component[..end], name)
}
