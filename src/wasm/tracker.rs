//! WASM bindings for single-slot transaction tracking
//!
//! The JS host owns receipt watching (e.g. viem's waitForTransactionReceipt)
//! and reports back through `pollConfirmation`.

use crate::tracker::{TxStatus, TxTracker};
use alloy_primitives::B256;
use wasm_bindgen::prelude::*;

/// Single-slot transaction tracker for the JS host
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmTxTracker {
    inner: TxTracker,
}

#[wasm_bindgen]
impl WasmTxTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTxTracker {
        WasmTxTracker { inner: TxTracker::new() }
    }

    /// Start tracking a submitted transaction hash.
    ///
    /// Throws if a transaction is already pending; the host should disable
    /// its submit controls until confirmation.
    #[wasm_bindgen]
    pub fn submit(&mut self, hash: &str) -> Result<(), JsValue> {
        let hash = parse_hash(hash)?;
        Ok(self.inner.submit(hash)?)
    }

    /// Report the host's receipt observation for the tracked transaction.
    ///
    /// Returns "idle", "pending" or "confirmed". On "confirmed" the handle
    /// has been discarded and the tracker is idle again.
    #[wasm_bindgen(js_name = pollConfirmation)]
    pub fn poll_confirmation(&mut self, receipt_seen: bool) -> String {
        match self.inner.on_poll(receipt_seen) {
            TxStatus::Idle => "idle".to_string(),
            TxStatus::Pending(_) => "pending".to_string(),
            TxStatus::Confirmed(_) => "confirmed".to_string(),
        }
    }

    /// Currently tracked hash as 0x-hex, or undefined.
    #[wasm_bindgen(getter, js_name = pendingHash)]
    pub fn pending_hash(&self) -> Option<String> {
        self.inner.pending().map(|h| format!("{:#x}", h))
    }

    #[wasm_bindgen(getter, js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    /// Stop tracking without a receipt (caller-level timeout/abandonment).
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

fn parse_hash(hash: &str) -> Result<B256, JsValue> {
    let hash = hash.trim();
    let stripped = hash
        .strip_prefix("0x")
        .or_else(|| hash.strip_prefix("0X"))
        .unwrap_or(hash);
    let bytes = hex::decode(stripped)
        .map_err(|e| JsValue::from_str(&format!("Invalid tx hash: {}", e)))?;
    if bytes.len() != 32 {
        return Err(JsValue::from_str(&format!(
            "Invalid tx hash: expected 32 bytes, got {}",
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

    const HASH: &str = "0x00000000000000000000000000000000000000000000000000000000000000aa";

    #[wasm_bindgen_test]
    fn test_rejects_bad_hash() {
        let mut tracker = WasmTxTracker::new();
        assert!(tracker.submit("0x1234").is_err());
        assert!(!tracker.is_pending());
    }

    #[wasm_bindgen_test]
    fn test_double_submit_throws_js_error() {
        let mut tracker = WasmTxTracker::new();
        tracker.submit(HASH).unwrap();
        let err = tracker.submit(HASH).unwrap_err();
        assert!(err.is_instance_of::<js_sys::Error>());
        // Original submission untouched
        assert_eq!(tracker.pending_hash().unwrap(), HASH);
    }
}
