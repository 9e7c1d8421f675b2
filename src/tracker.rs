//! Single-slot transaction tracking
//!
//! The console tracks at most one in-flight transaction. Submitting while a
//! hash is already tracked is rejected; the UI is expected to disable its
//! controls while a transaction is pending, so overlapping submissions are a
//! caller error rather than a queueing request. Once a receipt is observed
//! the handle is discarded; no history is retained.

use crate::error::ConsoleError;
use alloy_primitives::B256;

/// Transaction hash handle returned by the wallet collaborator.
pub type TxHash = B256;

/// Status reported by [`TxTracker::on_poll`] and the console's
/// `poll_confirmation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// Nothing tracked
    Idle,
    /// Tracked, no receipt yet
    Pending(TxHash),
    /// Receipt observed; the tracker has already returned to Idle
    Confirmed(TxHash),
}

/// Holds at most one in-flight transaction hash.
#[derive(Debug, Default, Clone)]
pub struct TxTracker {
    pending: Option<TxHash>,
}

impl TxTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently tracked hash, if any.
    pub fn pending(&self) -> Option<TxHash> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start tracking a freshly submitted transaction.
    ///
    /// Fails with `TransactionPending` if a hash is already tracked.
    pub fn submit(&mut self, hash: TxHash) -> Result<(), ConsoleError> {
        if let Some(existing) = self.pending {
            return Err(ConsoleError::TransactionPending(format!("{:#x}", existing)));
        }
        self.pending = Some(hash);
        Ok(())
    }

    /// Apply the external collaborator's receipt observation.
    ///
    /// `receipt_seen` is whatever the receipt-watching collaborator reported
    /// for the tracked hash. On confirmation the slot is cleared.
    pub fn on_poll(&mut self, receipt_seen: bool) -> TxStatus {
        match self.pending {
            None => TxStatus::Idle,
            Some(hash) if receipt_seen => {
                self.pending = None;
                TxStatus::Confirmed(hash)
            }
            Some(hash) => TxStatus::Pending(hash),
        }
    }

    /// Stop tracking without waiting for a receipt.
    ///
    /// Confirmation timeouts are a caller concern; this is the caller's
    /// abandonment hook. Idempotent.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
