//! Error types for wasm-zenchain

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for staking console operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Malformed decimal amount input
    InvalidAmount(String),
    /// Invalid EVM address
    InvalidAddress(String),
    /// Logical contract name not registered
    UnknownTarget(String),
    /// Operation not present in the target's table
    UnknownOperation(String),
    /// Argument count does not match the declared parameters
    ArityMismatch(String),
    /// Argument kind does not match the declared parameter type
    TypeMismatch(String),
    /// Rejected or failed by the external wallet/RPC collaborator
    WalletError(String),
    /// A tracked transaction is still awaiting its receipt
    TransactionPending(String),
    /// ABI decode error on a read result
    AbiDecode(String),
    /// Generic string error
    StringError(String),
}

impl std::error::Error for ConsoleError {}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
            ConsoleError::InvalidAddress(s) => write!(f, "Invalid address: {}", s),
            ConsoleError::UnknownTarget(s) => write!(f, "Unknown target: {}", s),
            ConsoleError::UnknownOperation(s) => write!(f, "Unknown operation: {}", s),
            ConsoleError::ArityMismatch(s) => write!(f, "Arity mismatch: {}", s),
            ConsoleError::TypeMismatch(s) => write!(f, "Type mismatch: {}", s),
            ConsoleError::WalletError(s) => write!(f, "Wallet error: {}", s),
            ConsoleError::TransactionPending(s) => {
                write!(f, "Transaction still pending: {}", s)
            }
            ConsoleError::AbiDecode(s) => write!(f, "ABI decode error: {}", s),
            ConsoleError::StringError(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ConsoleError {
    fn from(s: &str) -> Self {
        ConsoleError::StringError(s.to_string())
    }
}

impl From<String> for ConsoleError {
    fn from(s: String) -> Self {
        ConsoleError::StringError(s)
    }
}

impl From<alloy_sol_types::Error> for ConsoleError {
    fn from(err: alloy_sol_types::Error) -> Self {
        ConsoleError::AbiDecode(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<ConsoleError> for JsValue {
    fn from(err: ConsoleError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
