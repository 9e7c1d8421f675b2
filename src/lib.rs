//! wasm-zenchain: WASM module for ZenChain staking precompile operations
//!
//! This crate provides:
//! - Amount parsing (decimal ZTC to 18-decimal fixed point, percent to perbill)
//! - A static registry of the two staking precompiles and their operations
//! - Call preparation and validation (ABI encoding via alloy-sol-types)
//! - Single-slot tracking of the in-flight transaction hash
//! - Best-effort wallet session cleanup
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies in
//!   the control flow; all wallet/RPC I/O goes through the [`ChainClient`]
//!   trait.
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!   that hand encoded calls to the JS wallet stack and take hashes back.

pub mod address;
pub mod amount;
pub mod chain;
pub mod console;
pub mod error;
pub mod interface;
pub mod registry;
pub mod tracker;
pub mod wasm;

// Re-export main types for convenience
pub use address::{parse_address, parse_target_list, split_target_list};
pub use amount::{format_fixed_point, percentage_to_perbill, to_fixed_point};
pub use chain::ChainConfig;
pub use console::{
    decode_read_u32, prepare_call, prepare_read, CallArg, ChainClient, PreparedCall,
    StakingConsole,
};
pub use error::ConsoleError;
pub use registry::{resolve, ContractTarget, RewardDestination};
pub use tracker::{TxHash, TxStatus, TxTracker};
