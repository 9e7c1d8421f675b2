//! WASM bindings for wasm-zenchain
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations. The JS host keeps ownership of the
//! wallet connection and broadcast; the bindings hand it encoded calls and
//! track the resulting hash.

pub mod console;
pub mod session;
pub mod tracker;

// Re-export WASM types
pub use console::ConsoleNamespace;
pub use session::clear_wallet_session;
pub use tracker::WasmTxTracker;
