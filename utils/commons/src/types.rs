use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Token identifier of the unique assets traded on the platform.
pub type ContractTokenId = TokenIdU32;

/// Token amount type. Every asset is unique, so any balance is 0 or 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
