//! Contract registry for the staking precompiles
//!
//! Static tables mapping the two logical targets to their fixed on-chain
//! addresses and callable operations. The tables are authored once and never
//! mutated; the parameter lists drive argument validation in the call façade,
//! while encoding itself goes through the generated types in [`crate::interface`].

use crate::error::ConsoleError;
use alloy_primitives::{address, Address};

/// Native staking precompile address.
pub const NATIVE_STAKING_ADDRESS: Address =
    address!("0000000000000000000000000000000000000800");

/// Fast unstake precompile address.
pub const FAST_UNSTAKE_ADDRESS: Address =
    address!("0000000000000000000000000000000000000801");

/// Logical name of the native staking target.
pub const NATIVE_STAKING: &str = "native-staking";

/// Logical name of the fast unstake target.
pub const FAST_UNSTAKE: &str = "fast-unstake";

/// ABI parameter kind, as validated before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Uint256,
    Uint32,
    Uint8,
    Bool,
    Address,
    AddressArray,
}

/// State mutability of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// Read-only; answered by the RPC collaborator without a transaction.
    View,
    /// State-changing; submitted through the wallet collaborator.
    NonPayable,
}

/// A single callable operation on a contract target.
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    /// Operation name as it appears in the ABI
    pub name: &'static str,
    /// Ordered parameter kinds
    pub params: &'static [ParamKind],
    /// View or state-changing
    pub mutability: Mutability,
}

/// A logical contract target with its fixed address and operation table.
#[derive(Debug, Clone, Copy)]
pub struct ContractTarget {
    /// Logical name used by the console ("native-staking", "fast-unstake")
    pub logical_name: &'static str,
    /// Precompile address
    pub address: Address,
    /// Fixed operation table
    pub operations: &'static [OperationSpec],
}

impl ContractTarget {
    /// Look up an operation by name.
    pub fn operation(&self, name: &str) -> Result<&'static OperationSpec, ConsoleError> {
        self.operations.iter().find(|op| op.name == name).ok_or_else(|| {
            ConsoleError::UnknownOperation(format!("{}.{}", self.logical_name, name))
        })
    }
}

static NATIVE_STAKING_OPERATIONS: &[OperationSpec] = &[
    OperationSpec { name: "currentEra", params: &[], mutability: Mutability::View },
    OperationSpec { name: "historyDepth", params: &[], mutability: Mutability::View },
    OperationSpec {
        name: "bondWithRewardDestination",
        params: &[ParamKind::Uint256, ParamKind::Uint8],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "bondWithPayeeAddress",
        params: &[ParamKind::Uint256, ParamKind::Address],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "bondExtra",
        params: &[ParamKind::Uint256],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "validate",
        params: &[ParamKind::Uint32, ParamKind::Bool],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "nominate",
        params: &[ParamKind::AddressArray],
        mutability: Mutability::NonPayable,
    },
    OperationSpec { name: "chill", params: &[], mutability: Mutability::NonPayable },
    OperationSpec {
        name: "unbond",
        params: &[ParamKind::Uint256],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "rebond",
        params: &[ParamKind::Uint256],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "withdrawUnbonded",
        params: &[ParamKind::Uint32],
        mutability: Mutability::NonPayable,
    },
    OperationSpec {
        name: "payoutStakersByPage",
        params: &[ParamKind::Address, ParamKind::Uint32, ParamKind::Uint32],
        mutability: Mutability::NonPayable,
    },
];

static FAST_UNSTAKE_OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "registerFastUnstake",
        params: &[],
        mutability: Mutability::NonPayable,
    },
    OperationSpec { name: "deregister", params: &[], mutability: Mutability::NonPayable },
];

static TARGETS: &[ContractTarget] = &[
    ContractTarget {
        logical_name: NATIVE_STAKING,
        address: NATIVE_STAKING_ADDRESS,
        operations: NATIVE_STAKING_OPERATIONS,
    },
    ContractTarget {
        logical_name: FAST_UNSTAKE,
        address: FAST_UNSTAKE_ADDRESS,
        operations: FAST_UNSTAKE_OPERATIONS,
    },
];

/// Resolve a logical name to its contract target.
pub fn resolve(logical_name: &str) -> Result<&'static ContractTarget, ConsoleError> {
    TARGETS
        .iter()
        .find(|t| t.logical_name == logical_name)
        .ok_or_else(|| ConsoleError::UnknownTarget(logical_name.to_string()))
}

/// Staking reward destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RewardDestination {
    /// Compound rewards (re-stake)
    #[default]
    Staked = 0,
    /// Send to stash account
    Stash = 1,
    /// Discard rewards
    None = 2,
}

impl RewardDestination {
    /// Encoding used by the precompile's uint8 parameter.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RewardDestination {
    type Error = ConsoleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RewardDestination::Staked),
            1 => Ok(RewardDestination::Stash),
            2 => Ok(RewardDestination::None),
            other => Err(ConsoleError::TypeMismatch(format!(
                "reward destination out of range: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_native_staking() {
        let target = resolve("native-staking").unwrap();
        assert_eq!(target.address, NATIVE_STAKING_ADDRESS);
        assert_eq!(target.operations.len(), 12);
    }

    #[test]
    fn test_resolve_fast_unstake() {
        let target = resolve("fast-unstake").unwrap();
        assert_eq!(target.address, FAST_UNSTAKE_ADDRESS);
        assert_eq!(target.operations.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_target() {
        assert!(matches!(resolve("unknown"), Err(ConsoleError::UnknownTarget(_))));
    }

    #[test]
    fn test_operation_lookup() {
        let target = resolve("native-staking").unwrap();
        let op = target.operation("bondExtra").unwrap();
        assert_eq!(op.params, &[ParamKind::Uint256]);
        assert_eq!(op.mutability, Mutability::NonPayable);

        // fast-unstake ops are not visible through the native target
        assert!(target.operation("registerFastUnstake").is_err());
        assert!(target.operation("nope").is_err());
    }

    #[test]
    fn test_views_declared_as_views() {
        let target = resolve("native-staking").unwrap();
        assert_eq!(target.operation("currentEra").unwrap().mutability, Mutability::View);
        assert_eq!(target.operation("historyDepth").unwrap().mutability, Mutability::View);
    }

    #[test]
    fn test_reward_destination_encoding() {
        assert_eq!(RewardDestination::Staked.as_u8(), 0);
        assert_eq!(RewardDestination::Stash.as_u8(), 1);
        assert_eq!(RewardDestination::None.as_u8(), 2);
        assert_eq!(RewardDestination::try_from(1).unwrap(), RewardDestination::Stash);
        assert!(RewardDestination::try_from(3).is_err());
    }
}
