//! ZenChain staking precompile Solidity interfaces.
//!
//! Uses alloy-sol-types' `sol!` macro to generate type-safe Call structs and
//! selectors for the subset of precompile functions the console exposes.
//! The native staking precompile lives at 0x…0800, fast unstake at 0x…0801.

alloy_sol_types::sol! {
    /// Native staking precompile at address 0x0000000000000000000000000000000000000800.
    interface INativeStaking {
        // View functions
        function currentEra() external view returns (uint32);
        function historyDepth() external view returns (uint32);

        // Bonding
        function bondWithRewardDestination(uint256 value, uint8 dest) external;
        function bondWithPayeeAddress(uint256 value, address payee) external;
        function bondExtra(uint256 value) external;

        // Validator / nominator role
        function validate(uint32 commission, bool blocked) external;
        function nominate(address[] targets) external;
        function chill() external;

        // Unbonding
        function unbond(uint256 value) external;
        function rebond(uint256 value) external;
        function withdrawUnbonded(uint32 numSlashingSpans) external;

        // Payout
        function payoutStakersByPage(address validatorStash, uint32 era, uint32 page) external;
    }

    /// Fast unstake precompile at address 0x0000000000000000000000000000000000000801.
    interface IFastUnstake {
        function registerFastUnstake() external;
        function deregister() external;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_no_arg_calls_are_selector_only() {
        assert_eq!(INativeStaking::chillCall {}.abi_encode().len(), 4);
        assert_eq!(IFastUnstake::registerFastUnstakeCall {}.abi_encode().len(), 4);
        assert_eq!(IFastUnstake::deregisterCall {}.abi_encode().len(), 4);
    }

    #[test]
    fn test_bond_encoding_layout() {
        let call = INativeStaking::bondWithRewardDestinationCall {
            value: U256::from(100u64),
            dest: 0,
        };
        let encoded = call.abi_encode();
        // selector + two 32-byte words
        assert_eq!(encoded.len(), 4 + 64);
        assert_eq!(
            &encoded[..4],
            &INativeStaking::bondWithRewardDestinationCall::SELECTOR[..]
        );
        assert_eq!(encoded[35], 100);
    }

    #[test]
    fn test_nominate_encodes_dynamic_array() {
        let call = INativeStaking::nominateCall {
            targets: vec![Address::ZERO, Address::ZERO],
        };
        let encoded = call.abi_encode();
        // selector + offset word + length word + two elements
        assert_eq!(encoded.len(), 4 + 32 * 4);
    }

    #[test]
    fn test_current_era_round_trip() {
        let encoded = INativeStaking::currentEraCall::abi_encode_returns(&42u32);
        let decoded = INativeStaking::currentEraCall::abi_decode_returns(&encoded).unwrap();
        assert_eq!(decoded, 42);
    }
}
