use super::*;

/// Per-token data. Tokens are unique, so ownership is a single address
/// rather than a balance map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct TokenData {
    /// Current owner of the token.
    pub owner: Address,
    /// Address allowed to transfer the token on the owner's behalf.
    /// Cleared on every transfer.
    pub approved: Option<Address>,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Access control for owner-gated functions.
    pub ownership: Ownership,
    /// Data for each minted token.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
}

/// Parameter for the `mint` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    /// Initial owner of the minted token.
    pub to: Address,
    /// Identifier of the token to mint.
    pub token_id: ContractTokenId,
}

/// Parameter for the `transfer` function. Tokens are unique, so a transfer
/// moves the one token rather than an amount.
#[derive(Debug, Serialize, SchemaType)]
pub struct TransferNftParams {
    /// Token to transfer.
    pub token_id: ContractTokenId,
    /// Current holder of the token.
    pub from: Address,
    /// Address to receive the token.
    pub to: Address,
}

/// Parameter for the `approve` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct ApproveParams {
    /// Token to set the approval for.
    pub token_id: ContractTokenId,
    /// Address approved to transfer the token, or `None` to clear.
    pub approved: Option<Address>,
}
