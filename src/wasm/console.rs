//! WASM bindings for call preparation and input parsing
//!
//! ConsoleNamespace prepares encoded precompile calls for the JS wallet
//! stack (wagmi/viem) to broadcast, and exposes the amount/percentage/
//! nominee parsing the console forms need. Arguments arrive as a JSON array
//! of loosely-typed values and are checked against the static registry
//! before encoding.

use crate::address::{parse_address, split_target_list};
use crate::amount::{format_fixed_point, percentage_to_perbill, to_fixed_point};
use crate::chain::ChainConfig;
use crate::console::{decode_read_u32, prepare_call, prepare_read, CallArg, PreparedCall};
use crate::error::ConsoleError;
use crate::registry::{self, ParamKind};
use alloy_primitives::{B256, U256};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// JS-facing shape of a prepared call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreparedCallJs {
    /// Precompile address, 0x-hex
    to: String,
    /// ABI calldata, 0x-hex
    data: String,
}

impl From<PreparedCall> for PreparedCallJs {
    fn from(call: PreparedCall) -> Self {
        Self {
            to: format!("{:#x}", call.to),
            data: format!("0x{}", hex::encode(&call.data)),
        }
    }
}

/// Namespace for console operations
#[wasm_bindgen]
pub struct ConsoleNamespace;

#[wasm_bindgen]
impl ConsoleNamespace {
    /// Prepare a state-changing precompile call.
    ///
    /// # Arguments
    /// * `target` - Logical target name: "native-staking" or "fast-unstake"
    /// * `operation` - Operation name, e.g. "bondExtra"
    /// * `args` - JSON array of arguments; numbers, decimal strings,
    ///   booleans, 0x-addresses, or arrays of addresses, matched against the
    ///   operation's declared parameters
    ///
    /// # Returns
    /// `{ to, data }` for the JS host to sign and broadcast
    #[wasm_bindgen(js_name = prepareCall)]
    pub fn prepare_call_wasm(
        target: &str,
        operation: &str,
        args: JsValue,
    ) -> Result<JsValue, JsValue> {
        let raw: Vec<serde_json::Value> = if args.is_undefined() || args.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(args)
                .map_err(|e| JsValue::from_str(&format!("Invalid args: {}", e)))?
        };

        let converted = convert_args(target, operation, &raw)?;
        let prepared = prepare_call(target, operation, &converted)?;
        serde_wasm_bindgen::to_value(&PreparedCallJs::from(prepared))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Prepare a read-only precompile call (`currentEra`, `historyDepth`).
    #[wasm_bindgen(js_name = prepareRead)]
    pub fn prepare_read_wasm(target: &str, operation: &str) -> Result<JsValue, JsValue> {
        let prepared = prepare_read(target, operation)?;
        serde_wasm_bindgen::to_value(&PreparedCallJs::from(prepared))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode the uint32 result of a read-only call.
    #[wasm_bindgen(js_name = decodeReadU32)]
    pub fn decode_read_u32_wasm(operation: &str, data: &str) -> Result<u32, JsValue> {
        let bytes = decode_hex(data)?;
        Ok(decode_read_u32(operation, &bytes)?)
    }

    /// Parse a decimal ZTC amount into its wei value (decimal string).
    ///
    /// Empty input parses to "0".
    #[wasm_bindgen(js_name = parseAmount)]
    pub fn parse_amount(amount: &str) -> Result<String, JsValue> {
        Ok(to_fixed_point(amount, 18)?.to_string())
    }

    /// Render a wei value (decimal string) back to a ZTC decimal string.
    #[wasm_bindgen(js_name = formatAmount)]
    pub fn format_amount(wei: &str) -> Result<String, JsValue> {
        let value = U256::from_str_radix(wei.trim(), 10)
            .map_err(|_| ConsoleError::InvalidAmount(wei.to_string()))?;
        Ok(format_fixed_point(value, 18))
    }

    /// Convert a commission percentage to a perbill (fails closed to 0).
    #[wasm_bindgen(js_name = percentageToPerbill)]
    pub fn percentage_to_perbill_wasm(pct: f64) -> u32 {
        percentage_to_perbill(pct)
    }

    /// Parse a comma-separated nominee list into validated 0x addresses.
    #[wasm_bindgen(js_name = parseNominees)]
    pub fn parse_nominees(input: &str) -> Result<Vec<String>, JsValue> {
        split_target_list(input)
            .iter()
            .map(|s| Ok(format!("{:#x}", parse_address(s)?)))
            .collect()
    }

    /// Block explorer URL for a transaction hash.
    #[wasm_bindgen(js_name = explorerTxUrl)]
    pub fn explorer_tx_url(hash: &str) -> Result<String, JsValue> {
        let hash = parse_tx_hash(hash)?;
        Ok(ChainConfig::zenchain_testnet().tx_url(&hash))
    }

    /// The fixed ZenChain Testnet configuration.
    #[wasm_bindgen(js_name = chainConfig)]
    pub fn chain_config() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&ChainConfig::zenchain_testnet())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Convert loosely-typed JSON arguments against the operation's parameter table.
fn convert_args(
    target: &str,
    operation: &str,
    raw: &[serde_json::Value],
) -> Result<Vec<CallArg>, ConsoleError> {
    let target = registry::resolve(target)?;
    let op = target.operation(operation)?;
    if raw.len() != op.params.len() {
        return Err(ConsoleError::ArityMismatch(format!(
            "{}.{} expects {} arguments, got {}",
            target.logical_name,
            op.name,
            op.params.len(),
            raw.len()
        )));
    }
    op.params
        .iter()
        .zip(raw)
        .map(|(kind, value)| convert_arg(*kind, value))
        .collect()
}

fn convert_arg(kind: ParamKind, value: &serde_json::Value) -> Result<CallArg, ConsoleError> {
    use serde_json::Value;
    match kind {
        ParamKind::Uint256 => match value {
            Value::Number(n) => n
                .as_u64()
                .map(|v| CallArg::Uint256(U256::from(v)))
                .ok_or_else(|| type_error("uint256", value)),
            Value::String(s) => U256::from_str_radix(s.trim(), 10)
                .map(CallArg::Uint256)
                .map_err(|_| type_error("uint256", value)),
            _ => Err(type_error("uint256", value)),
        },
        ParamKind::Uint32 => match value {
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(CallArg::Uint32)
                .ok_or_else(|| type_error("uint32", value)),
            Value::String(s) => s
                .trim()
                .parse::<u32>()
                .map(CallArg::Uint32)
                .map_err(|_| type_error("uint32", value)),
            _ => Err(type_error("uint32", value)),
        },
        ParamKind::Uint8 => match value {
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .map(CallArg::Uint8)
                .ok_or_else(|| type_error("uint8", value)),
            Value::String(s) => s
                .trim()
                .parse::<u8>()
                .map(CallArg::Uint8)
                .map_err(|_| type_error("uint8", value)),
            _ => Err(type_error("uint8", value)),
        },
        ParamKind::Bool => match value {
            Value::Bool(b) => Ok(CallArg::Bool(*b)),
            // Select inputs submit "true"/"false" strings
            Value::String(s) => match s.trim() {
                "true" => Ok(CallArg::Bool(true)),
                "false" => Ok(CallArg::Bool(false)),
                _ => Err(type_error("bool", value)),
            },
            _ => Err(type_error("bool", value)),
        },
        ParamKind::Address => match value {
            Value::String(s) => Ok(CallArg::Address(parse_address(s)?)),
            _ => Err(type_error("address", value)),
        },
        ParamKind::AddressArray => match value {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => parse_address(s),
                    _ => Err(type_error("address", item)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(CallArg::AddressArray),
            // A single comma-separated field is also accepted
            Value::String(s) => crate::address::parse_target_list(s).map(CallArg::AddressArray),
            _ => Err(type_error("address[]", value)),
        },
    }
}

fn type_error(expected: &str, value: &serde_json::Value) -> ConsoleError {
    ConsoleError::TypeMismatch(format!("expected {}, got {}", expected, value))
}

fn decode_hex(data: &str) -> Result<Vec<u8>, ConsoleError> {
    let data = data.trim();
    // Same prefix handling as address parsing: "0x" or "0X"
    let stripped = data
        .strip_prefix("0x")
        .or_else(|| data.strip_prefix("0X"))
        .unwrap_or(data);
    hex::decode(stripped).map_err(|e| ConsoleError::AbiDecode(e.to_string()))
}

fn parse_tx_hash(hash: &str) -> Result<B256, ConsoleError> {
    let bytes = decode_hex(hash)?;
    if bytes.len() != 32 {
        return Err(ConsoleError::AbiDecode(format!(
            "transaction hash must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(B256::from_slice(&bytes))
}


// WASM tests - only run in wasm32 target
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_prepare_call_through_js_boundary() {
        let args =
            serde_wasm_bindgen::to_value(&vec![serde_json::json!("1000000000000000000")]).unwrap();
        let result =
            ConsoleNamespace::prepare_call_wasm("native-staking", "bondExtra", args).unwrap();

        let to = js_sys::Reflect::get(&result, &JsValue::from_str("to")).unwrap();
        assert_eq!(
            to.as_string().unwrap(),
            "0x0000000000000000000000000000000000000800"
        );
        let data = js_sys::Reflect::get(&result, &JsValue::from_str("data")).unwrap();
        assert!(data.as_string().unwrap().starts_with("0x"));
    }

    #[wasm_bindgen_test]
    fn test_prepare_call_null_args_means_empty() {
        let result =
            ConsoleNamespace::prepare_call_wasm("native-staking", "chill", JsValue::NULL).unwrap();
        let data = js_sys::Reflect::get(&result, &JsValue::from_str("data")).unwrap();
        // selector only
        assert_eq!(data.as_string().unwrap().len(), 2 + 8);
    }

    #[wasm_bindgen_test]
    fn test_unknown_operation_throws_js_error() {
        let err = ConsoleNamespace::prepare_call_wasm("native-staking", "mint", JsValue::NULL)
            .unwrap_err();
        assert!(err.is_instance_of::<js_sys::Error>());
    }
}
