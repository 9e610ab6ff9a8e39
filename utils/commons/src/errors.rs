use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Caller is not the contract owner (Error code: -4).
    Unauthorized,
    /// Seller is not the token owner (Error code: -5).
    SellerNotTokenOwner,
    /// Seller has not given the contract approval for the token
    /// (Error code: -6).
    SellerNotApproved,
    /// The auction for this token has not been started yet (Error code: -7).
    AuctionNotStarted,
    /// An auction for this token is already running (Error code: -8).
    AuctionAlreadyStarted,
    /// The bidding window for this auction has ended (Error code: -9).
    AuctionEnded,
    /// The bidding window for this auction is still ongoing (Error code: -10).
    AuctionStillOngoing,
    /// Caller already holds the highest bid (Error code: -11).
    AlreadyHighestBidder,
    /// Bid does not exceed the current highest bid (Error code: -12).
    BidTooLow,
    /// No amount to withdraw for this caller (Error code: -13).
    NothingToWithdraw,
    /// Minting failed because the token ID already exists in this contract
    /// (Error code: -14).
    TokenIdAlreadyExists,
    /// Only account addresses can perform this action (Error code: -15).
    OnlyAccountAddress,
    /// Failed to invoke a contract (Error code: -16).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -17).
    InvokeTransferError,
    /// Incompatible contract (Error code: -18).
    Incompatible,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
