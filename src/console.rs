//! Call façade and staking console context
//!
//! [`StakingConsole`] is the explicit context object behind the UI: it owns
//! the chain configuration, the single-slot [`TxTracker`], and the external
//! [`ChainClient`] collaborator that performs signing, broadcast, reads and
//! receipt watching. The façade validates every call against the static
//! registry before anything leaves the process.

use crate::chain::ChainConfig;
use crate::error::ConsoleError;
use crate::interface::{IFastUnstake, INativeStaking};
use crate::registry::{
    self, ContractTarget, Mutability, OperationSpec, ParamKind, FAST_UNSTAKE, NATIVE_STAKING,
};
use crate::tracker::{TxHash, TxStatus, TxTracker};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

/// Fallback slashing-span count when `historyDepth` cannot be read.
const DEFAULT_SLASHING_SPANS: u32 = 84;

/// A call argument, checked against the registry's declared parameter kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Uint256(U256),
    Uint32(u32),
    Uint8(u8),
    Bool(bool),
    Address(Address),
    AddressArray(Vec<Address>),
}

impl CallArg {
    /// The parameter kind this argument satisfies.
    pub fn kind(&self) -> ParamKind {
        match self {
            CallArg::Uint256(_) => ParamKind::Uint256,
            CallArg::Uint32(_) => ParamKind::Uint32,
            CallArg::Uint8(_) => ParamKind::Uint8,
            CallArg::Bool(_) => ParamKind::Bool,
            CallArg::Address(_) => ParamKind::Address,
            CallArg::AddressArray(_) => ParamKind::AddressArray,
        }
    }
}

/// An encoded call ready for the external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCall {
    /// Precompile address
    pub to: Address,
    /// ABI calldata (selector + arguments)
    pub data: Bytes,
}

/// External wallet/RPC collaborator seam.
///
/// Implementations wrap whatever actually signs, broadcasts and reads: the
/// JS wallet stack in the browser, or a mock in tests. Failures surface as
/// [`ConsoleError::WalletError`] and are propagated untranslated.
pub trait ChainClient {
    /// Sign and broadcast a state-changing call; returns the tx hash.
    fn submit(&mut self, to: Address, data: &[u8]) -> Result<TxHash, ConsoleError>;

    /// Execute a read-only call and return the raw ABI output.
    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, ConsoleError>;

    /// Whether a receipt has been observed for the given hash.
    fn receipt_seen(&self, hash: &TxHash) -> Result<bool, ConsoleError>;

    /// Connected account, if any.
    fn account(&self) -> Option<Address>;

    /// Chain id the wallet is currently on.
    fn chain_id(&self) -> u64;

    /// Native balance of an address.
    fn balance(&self, who: Address) -> Result<U256, ConsoleError>;
}

/// Validate arity and argument kinds against an operation's parameter table.
fn validate_args(
    target: &ContractTarget,
    op: &OperationSpec,
    args: &[CallArg],
) -> Result<(), ConsoleError> {
    if args.len() != op.params.len() {
        return Err(ConsoleError::ArityMismatch(format!(
            "{}.{} expects {} arguments, got {}",
            target.logical_name,
            op.name,
            op.params.len(),
            args.len()
        )));
    }
    for (i, (param, arg)) in op.params.iter().zip(args).enumerate() {
        if arg.kind() != *param {
            return Err(ConsoleError::TypeMismatch(format!(
                "{}.{} argument {}: expected {:?}, got {:?}",
                target.logical_name,
                op.name,
                i,
                param,
                arg.kind()
            )));
        }
    }
    Ok(())
}

fn u256_arg(args: &[CallArg], i: usize) -> Result<U256, ConsoleError> {
    match args.get(i) {
        Some(CallArg::Uint256(v)) => Ok(*v),
        _ => Err(ConsoleError::TypeMismatch(format!("argument {} is not uint256", i))),
    }
}

fn u32_arg(args: &[CallArg], i: usize) -> Result<u32, ConsoleError> {
    match args.get(i) {
        Some(CallArg::Uint32(v)) => Ok(*v),
        _ => Err(ConsoleError::TypeMismatch(format!("argument {} is not uint32", i))),
    }
}

fn u8_arg(args: &[CallArg], i: usize) -> Result<u8, ConsoleError> {
    match args.get(i) {
        Some(CallArg::Uint8(v)) => Ok(*v),
        _ => Err(ConsoleError::TypeMismatch(format!("argument {} is not uint8", i))),
    }
}

fn bool_arg(args: &[CallArg], i: usize) -> Result<bool, ConsoleError> {
    match args.get(i) {
        Some(CallArg::Bool(v)) => Ok(*v),
        _ => Err(ConsoleError::TypeMismatch(format!("argument {} is not bool", i))),
    }
}

fn address_arg(args: &[CallArg], i: usize) -> Result<Address, ConsoleError> {
    match args.get(i) {
        Some(CallArg::Address(v)) => Ok(*v),
        _ => Err(ConsoleError::TypeMismatch(format!("argument {} is not address", i))),
    }
}

fn address_array_arg(args: &[CallArg], i: usize) -> Result<Vec<Address>, ConsoleError> {
    match args.get(i) {
        Some(CallArg::AddressArray(v)) => Ok(v.clone()),
        _ => Err(ConsoleError::TypeMismatch(format!("argument {} is not address[]", i))),
    }
}

/// ABI-encode a validated operation through the generated interface types.
fn encode_operation(
    target: &ContractTarget,
    name: &str,
    args: &[CallArg],
) -> Result<Vec<u8>, ConsoleError> {
    let data = match (target.logical_name, name) {
        (NATIVE_STAKING, "currentEra") => INativeStaking::currentEraCall {}.abi_encode(),
        (NATIVE_STAKING, "historyDepth") => INativeStaking::historyDepthCall {}.abi_encode(),
        (NATIVE_STAKING, "bondWithRewardDestination") => {
            INativeStaking::bondWithRewardDestinationCall {
                value: u256_arg(args, 0)?,
                dest: u8_arg(args, 1)?,
            }
            .abi_encode()
        }
        (NATIVE_STAKING, "bondWithPayeeAddress") => INativeStaking::bondWithPayeeAddressCall {
            value: u256_arg(args, 0)?,
            payee: address_arg(args, 1)?,
        }
        .abi_encode(),
        (NATIVE_STAKING, "bondExtra") => {
            INativeStaking::bondExtraCall { value: u256_arg(args, 0)? }.abi_encode()
        }
        (NATIVE_STAKING, "validate") => INativeStaking::validateCall {
            commission: u32_arg(args, 0)?,
            blocked: bool_arg(args, 1)?,
        }
        .abi_encode(),
        (NATIVE_STAKING, "nominate") => {
            INativeStaking::nominateCall { targets: address_array_arg(args, 0)? }.abi_encode()
        }
        (NATIVE_STAKING, "chill") => INativeStaking::chillCall {}.abi_encode(),
        (NATIVE_STAKING, "unbond") => {
            INativeStaking::unbondCall { value: u256_arg(args, 0)? }.abi_encode()
        }
        (NATIVE_STAKING, "rebond") => {
            INativeStaking::rebondCall { value: u256_arg(args, 0)? }.abi_encode()
        }
        (NATIVE_STAKING, "withdrawUnbonded") => {
            INativeStaking::withdrawUnbondedCall { numSlashingSpans: u32_arg(args, 0)? }
                .abi_encode()
        }
        (NATIVE_STAKING, "payoutStakersByPage") => INativeStaking::payoutStakersByPageCall {
            validatorStash: address_arg(args, 0)?,
            era: u32_arg(args, 1)?,
            page: u32_arg(args, 2)?,
        }
        .abi_encode(),
        (FAST_UNSTAKE, "registerFastUnstake") => {
            IFastUnstake::registerFastUnstakeCall {}.abi_encode()
        }
        (FAST_UNSTAKE, "deregister") => IFastUnstake::deregisterCall {}.abi_encode(),
        _ => {
            return Err(ConsoleError::UnknownOperation(format!(
                "{}.{}",
                target.logical_name, name
            )))
        }
    };
    Ok(data)
}

/// Prepare a state-changing call: resolve, validate, encode.
pub fn prepare_call(
    target_name: &str,
    operation: &str,
    args: &[CallArg],
) -> Result<PreparedCall, ConsoleError> {
    let target = registry::resolve(target_name)?;
    let op = target.operation(operation)?;
    if op.mutability != Mutability::NonPayable {
        return Err(ConsoleError::UnknownOperation(format!(
            "{}.{} is read-only",
            target_name, operation
        )));
    }
    validate_args(target, op, args)?;
    let data = encode_operation(target, op.name, args)?;
    Ok(PreparedCall { to: target.address, data: data.into() })
}

/// Prepare a read-only call. Both registered views take no arguments.
pub fn prepare_read(target_name: &str, operation: &str) -> Result<PreparedCall, ConsoleError> {
    let target = registry::resolve(target_name)?;
    let op = target.operation(operation)?;
    if op.mutability != Mutability::View {
        return Err(ConsoleError::UnknownOperation(format!(
            "{}.{} is not a view",
            target_name, operation
        )));
    }
    validate_args(target, op, &[])?;
    let data = encode_operation(target, op.name, &[])?;
    Ok(PreparedCall { to: target.address, data: data.into() })
}

/// Decode the uint32 result of a registered view.
pub fn decode_read_u32(operation: &str, data: &[u8]) -> Result<u32, ConsoleError> {
    match operation {
        "currentEra" => Ok(INativeStaking::currentEraCall::abi_decode_returns(data)?),
        "historyDepth" => Ok(INativeStaking::historyDepthCall::abi_decode_returns(data)?),
        other => Err(ConsoleError::UnknownOperation(other.to_string())),
    }
}

/// The staking console context: chain config, tracker, and collaborator.
#[derive(Debug)]
pub struct StakingConsole<C: ChainClient> {
    client: C,
    config: ChainConfig,
    tracker: TxTracker,
}

impl<C: ChainClient> StakingConsole<C> {
    /// Create a console bound to a collaborator and chain configuration.
    pub fn new(client: C, config: ChainConfig) -> Self {
        Self { client, config, tracker: TxTracker::new() }
    }

    /// Tear down the console, handing the collaborator back to the caller.
    pub fn dispose(self) -> C {
        self.client
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Submit a state-changing call and start tracking its hash.
    ///
    /// Rejected with `TransactionPending` while a previous transaction is
    /// still tracked; a failed submission leaves the tracker Idle. Exactly
    /// one outbound broadcast per successful call, and repeated invocation
    /// submits a new, independent transaction.
    pub fn invoke(
        &mut self,
        target_name: &str,
        operation: &str,
        args: &[CallArg],
    ) -> Result<TxHash, ConsoleError> {
        if let Some(existing) = self.tracker.pending() {
            return Err(ConsoleError::TransactionPending(format!("{:#x}", existing)));
        }
        let prepared = prepare_call(target_name, operation, args)?;
        let hash = self.client.submit(prepared.to, &prepared.data)?;
        self.tracker.submit(hash)?;
        Ok(hash)
    }

    /// Execute a registered view and decode its uint32 result.
    pub fn read_u32(&self, target_name: &str, operation: &str) -> Result<u32, ConsoleError> {
        let prepared = prepare_read(target_name, operation)?;
        let output = self.client.call(prepared.to, &prepared.data)?;
        decode_read_u32(operation, &output)
    }

    /// The chain's current staking era.
    pub fn current_era(&self) -> Result<u32, ConsoleError> {
        self.read_u32(NATIVE_STAKING, "currentEra")
    }

    /// How many eras of history the chain retains.
    pub fn history_depth(&self) -> Result<u32, ConsoleError> {
        self.read_u32(NATIVE_STAKING, "historyDepth")
    }

    /// Slashing-span count for `withdrawUnbonded`: `historyDepth`, falling
    /// back to 84 when the read fails.
    pub fn withdraw_unbonded_spans(&self) -> u32 {
        self.history_depth().unwrap_or(DEFAULT_SLASHING_SPANS)
    }

    /// Ask the receipt-watching collaborator about the tracked transaction.
    ///
    /// On a confirmed receipt the tracker returns to Idle and the handle is
    /// discarded.
    pub fn poll_confirmation(&mut self) -> Result<TxStatus, ConsoleError> {
        match self.tracker.pending() {
            None => Ok(TxStatus::Idle),
            Some(hash) => {
                let seen = self.client.receipt_seen(&hash)?;
                Ok(self.tracker.on_poll(seen))
            }
        }
    }

    /// Currently tracked transaction hash, if any.
    pub fn pending_tx(&self) -> Option<TxHash> {
        self.tracker.pending()
    }

    /// Abandon interest in the tracked transaction without a receipt.
    pub fn clear_pending(&mut self) {
        self.tracker.clear();
    }

    /// Native balance of the connected account, if one is connected.
    pub fn native_balance(&self) -> Result<Option<U256>, ConsoleError> {
        match self.client.account() {
            Some(who) => Ok(Some(self.client.balance(who)?)),
            None => Ok(None),
        }
    }

    /// Whether the wallet is on the configured chain.
    pub fn chain_matches(&self) -> bool {
        self.client.chain_id() == self.config.chain_id
    }

    /// Explorer link for a transaction hash.
    pub fn tx_url(&self, hash: &TxHash) -> String {
        self.config.tx_url(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RewardDestination;
    use alloy_primitives::{address, b256};
    use std::cell::Cell;

    const HASH: TxHash =
        b256!("00000000000000000000000000000000000000000000000000000000000000aa");
    const ACCOUNT: Address = address!("00000000000000000000000000000000000000a1");

    struct MockClient {
        submitted: Vec<(Address, Vec<u8>)>,
        fail_submit: bool,
        receipt_seen: Cell<bool>,
        era: u32,
        history_depth: Option<u32>,
        chain_id: u64,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                submitted: Vec::new(),
                fail_submit: false,
                receipt_seen: Cell::new(false),
                era: 42,
                history_depth: Some(84),
                chain_id: 8408,
            }
        }
    }

    impl ChainClient for MockClient {
        fn submit(&mut self, to: Address, data: &[u8]) -> Result<TxHash, ConsoleError> {
            if self.fail_submit {
                return Err(ConsoleError::WalletError("user rejected".to_string()));
            }
            self.submitted.push((to, data.to_vec()));
            Ok(HASH)
        }

        fn call(&self, _to: Address, data: &[u8]) -> Result<Vec<u8>, ConsoleError> {
            let selector: [u8; 4] = data[..4].try_into().unwrap();
            if selector == INativeStaking::currentEraCall::SELECTOR {
                Ok(INativeStaking::currentEraCall::abi_encode_returns(&self.era))
            } else if selector == INativeStaking::historyDepthCall::SELECTOR {
                match self.history_depth {
                    Some(depth) => {
                        Ok(INativeStaking::historyDepthCall::abi_encode_returns(&depth))
                    }
                    None => Err(ConsoleError::WalletError("rpc unavailable".to_string())),
                }
            } else {
                Err(ConsoleError::WalletError("unexpected call".to_string()))
            }
        }

        fn receipt_seen(&self, _hash: &TxHash) -> Result<bool, ConsoleError> {
            Ok(self.receipt_seen.get())
        }

        fn account(&self) -> Option<Address> {
            Some(ACCOUNT)
        }

        fn chain_id(&self) -> u64 {
            self.chain_id
        }

        fn balance(&self, _who: Address) -> Result<U256, ConsoleError> {
            Ok(U256::from(1_000u64))
        }
    }

    fn console() -> StakingConsole<MockClient> {
        StakingConsole::new(MockClient::new(), ChainConfig::zenchain_testnet())
    }

    #[test]
    fn test_invoke_bond_extra_zero_amount() {
        let mut console = console();
        let hash = console
            .invoke(NATIVE_STAKING, "bondExtra", &[CallArg::Uint256(U256::ZERO)])
            .unwrap();
        assert_eq!(hash, HASH);
        // exactly one outbound broadcast, to the 0x…0800 precompile
        assert_eq!(console.client.submitted.len(), 1);
        assert_eq!(
            console.client.submitted[0].0,
            registry::NATIVE_STAKING_ADDRESS
        );
    }

    #[test]
    fn test_invoke_while_pending_is_rejected() {
        let mut console = console();
        console
            .invoke(NATIVE_STAKING, "chill", &[])
            .unwrap();
        let err = console
            .invoke(NATIVE_STAKING, "chill", &[])
            .unwrap_err();
        assert!(matches!(err, ConsoleError::TransactionPending(_)));
        // no second broadcast went out
        assert_eq!(console.client.submitted.len(), 1);
    }

    #[test]
    fn test_failed_submission_leaves_tracker_idle() {
        let mut console = console();
        console.client.fail_submit = true;
        let err = console
            .invoke(NATIVE_STAKING, "unbond", &[CallArg::Uint256(U256::from(5u64))])
            .unwrap_err();
        assert!(matches!(err, ConsoleError::WalletError(_)));
        assert_eq!(console.pending_tx(), None);

        // a retry after the wallet recovers goes through
        console.client.fail_submit = false;
        assert!(console
            .invoke(NATIVE_STAKING, "unbond", &[CallArg::Uint256(U256::from(5u64))])
            .is_ok());
    }

    #[test]
    fn test_confirmation_cycle() {
        let mut console = console();
        console
            .invoke(NATIVE_STAKING, "bondExtra", &[CallArg::Uint256(U256::from(1u64))])
            .unwrap();

        assert_eq!(console.poll_confirmation().unwrap(), TxStatus::Pending(HASH));

        console.client.receipt_seen.set(true);
        assert_eq!(console.poll_confirmation().unwrap(), TxStatus::Confirmed(HASH));

        // handle discarded; nothing pending afterwards
        assert_eq!(console.poll_confirmation().unwrap(), TxStatus::Idle);
        assert_eq!(console.pending_tx(), None);
    }

    #[test]
    fn test_arity_mismatch() {
        let mut console = console();
        let err = console
            .invoke(NATIVE_STAKING, "bondExtra", &[])
            .unwrap_err();
        assert!(matches!(err, ConsoleError::ArityMismatch(_)));
    }

    #[test]
    fn test_type_mismatch() {
        let mut console = console();
        let err = console
            .invoke(NATIVE_STAKING, "bondExtra", &[CallArg::Bool(true)])
            .unwrap_err();
        assert!(matches!(err, ConsoleError::TypeMismatch(_)));
    }

    #[test]
    fn test_unknown_operation_and_target() {
        let mut console = console();
        assert!(matches!(
            console.invoke(NATIVE_STAKING, "setPayee", &[]),
            Err(ConsoleError::UnknownOperation(_))
        ));
        assert!(matches!(
            console.invoke("unknown", "chill", &[]),
            Err(ConsoleError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_view_not_invokable() {
        let mut console = console();
        assert!(matches!(
            console.invoke(NATIVE_STAKING, "currentEra", &[]),
            Err(ConsoleError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_reads() {
        let console = console();
        assert_eq!(console.current_era().unwrap(), 42);
        assert_eq!(console.history_depth().unwrap(), 84);
        assert_eq!(console.withdraw_unbonded_spans(), 84);
    }

    #[test]
    fn test_withdraw_spans_fallback() {
        let mut console = console();
        console.client.history_depth = None;
        assert_eq!(console.withdraw_unbonded_spans(), 84);
    }

    #[test]
    fn test_fast_unstake_target() {
        let mut console = console();
        console
            .invoke(FAST_UNSTAKE, "registerFastUnstake", &[])
            .unwrap();
        assert_eq!(
            console.client.submitted[0].0,
            registry::FAST_UNSTAKE_ADDRESS
        );
        assert_eq!(console.client.submitted[0].1.len(), 4);
    }

    #[test]
    fn test_bond_with_destination_args() {
        let args = [
            CallArg::Uint256(U256::from(100u64)),
            CallArg::Uint8(RewardDestination::Staked.as_u8()),
        ];
        let prepared =
            prepare_call(NATIVE_STAKING, "bondWithRewardDestination", &args).unwrap();
        assert_eq!(prepared.to, registry::NATIVE_STAKING_ADDRESS);
        assert_eq!(prepared.data.len(), 4 + 64);
    }

    #[test]
    fn test_prepare_read_rejects_writes() {
        assert!(prepare_read(NATIVE_STAKING, "chill").is_err());
        let prepared = prepare_read(NATIVE_STAKING, "currentEra").unwrap();
        assert_eq!(prepared.data.len(), 4);
    }

    #[test]
    fn test_chain_and_balance_helpers() {
        let console = console();
        assert!(console.chain_matches());
        assert_eq!(console.native_balance().unwrap(), Some(U256::from(1_000u64)));
        assert!(console.tx_url(&HASH).starts_with("https://zentrace.io/tx/0x"));
    }

    #[test]
    fn test_dispose_returns_client() {
        let mut console = console();
        console.invoke(NATIVE_STAKING, "chill", &[]).unwrap();
        let client = console.dispose();
        assert_eq!(client.submitted.len(), 1);
    }
}
