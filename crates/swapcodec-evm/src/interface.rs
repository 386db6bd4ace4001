//! Contract interface loading.
//!
//! Reads a standard Ethereum ABI JSON document (a bare array of entries, or
//! a build artifact object with an `abi` field) and turns its `function`
//! entries into [`MethodDescriptor`]s, in declaration order.
//!
//! Entries are read leniently and every type string goes through the
//! `TypeTag` parser, so a bad type always surfaces as `InvalidTypeSyntax`.
//! Callers that already hold alloy `Function`s can convert them with
//! [`method_from_function`].

use alloy_json_abi::{Function, Param as JsonParam};
use serde::Deserialize;
use swapcodec_core::error::DecodeError;

use crate::method::{MethodDescriptor, Param};

/// Parse the functions of an ABI JSON document.
///
/// # Errors
/// `InvalidInterface` if the JSON is not an ABI document, `InvalidTypeSyntax`
/// if a parameter type cannot be parsed.
pub fn methods_from_abi_json(abi_json: &str) -> Result<Vec<MethodDescriptor>, DecodeError> {
    let doc: serde_json::Value =
        serde_json::from_str(abi_json).map_err(|e| DecodeError::InvalidInterface {
            reason: format!("invalid ABI JSON: {e}"),
        })?;

    let entries = match &doc {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(obj) => obj
            .get("abi")
            .and_then(|abi| abi.as_array())
            .ok_or_else(|| DecodeError::InvalidInterface {
                reason: "expected an ABI array or an object with an 'abi' array".into(),
            })?,
        _ => {
            return Err(DecodeError::InvalidInterface {
                reason: "expected an ABI array".into(),
            })
        }
    };

    let mut methods = Vec::new();
    for entry in entries {
        if entry.get("type").and_then(|t| t.as_str()) != Some("function") {
            continue;
        }
        let func = AbiFunction::deserialize(entry).map_err(|e| DecodeError::InvalidInterface {
            reason: format!("invalid function entry: {e}"),
        })?;
        methods.push(MethodDescriptor::from_params(
            func.name,
            convert_params(&func.inputs)?,
            convert_params(&func.outputs)?,
        ));
    }
    Ok(methods)
}

/// Convert one alloy `Function` into a descriptor.
pub fn method_from_function(func: &Function) -> Result<MethodDescriptor, DecodeError> {
    Ok(MethodDescriptor::from_params(
        func.name.clone(),
        convert_params(&func.inputs)?,
        convert_params(&func.outputs)?,
    ))
}

#[derive(Debug, Deserialize)]
struct AbiFunction {
    name: String,
    #[serde(default)]
    inputs: Vec<AbiParam>,
    #[serde(default)]
    outputs: Vec<AbiParam>,
}

#[derive(Debug, Deserialize)]
struct AbiParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    components: Vec<AbiParam>,
}

/// The three fields of an ABI parameter the descriptor needs, shared by
/// our lenient entries and alloy's validated ones.
trait ParamFields: Sized {
    fn name(&self) -> &str;
    fn ty(&self) -> &str;
    fn components(&self) -> &[Self];
}

impl ParamFields for AbiParam {
    fn name(&self) -> &str {
        &self.name
    }
    fn ty(&self) -> &str {
        &self.ty
    }
    fn components(&self) -> &[Self] {
        &self.components
    }
}

impl ParamFields for JsonParam {
    fn name(&self) -> &str {
        &self.name
    }
    fn ty(&self) -> &str {
        &self.ty
    }
    fn components(&self) -> &[Self] {
        &self.components
    }
}

fn convert_params<P: ParamFields>(params: &[P]) -> Result<Vec<Param>, DecodeError> {
    params
        .iter()
        .map(|p| Ok(Param::new(p.name(), canonical_type(p).parse()?)))
        .collect()
}

/// ABI JSON spells tuples as `tuple`/`tuple[]` with a separate component
/// list; fold the components back into `(T1,T2)[]` form.
fn canonical_type<P: ParamFields>(param: &P) -> String {
    match param.ty().strip_prefix("tuple") {
        Some(suffix) => {
            let inner: Vec<_> = param.components().iter().map(canonical_type).collect();
            format!("({}){suffix}", inner.join(","))
        }
        None => param.ty().to_string(),
    }
}
