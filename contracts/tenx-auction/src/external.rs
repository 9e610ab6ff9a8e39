use super::*;

/// Parameter for the contract init function.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Address of the NFT registry holding the auctioned tokens.
    pub nft: ContractAddress,
}

/// Parameter for the `startAuction` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct StartParams {
    /// Token to put up for auction.
    pub token_id: ContractTokenId,
    /// Starting price. The first bid must strictly exceed it.
    pub base_price: Amount,
}

/// Return value of the `viewAuction` function. Unknown tokens are reported
/// as not started rather than rejected.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct AuctionView {
    /// Whether an auction record exists for the token.
    pub started: bool,
    /// Whether the auction has been settled.
    pub ended: bool,
    /// Account that started the auction.
    pub seller: Option<AccountAddress>,
    /// Time after which bidding closes.
    pub bid_end_time: Option<Timestamp>,
    /// Standing bid, or the base price while nobody has bid.
    pub bid_value: Amount,
    /// Current highest bidder, if any.
    pub current_bidder: Option<AccountAddress>,
}

impl Default for AuctionView {
    fn default() -> Self {
        AuctionView {
            started: false,
            ended: false,
            seller: None,
            bid_end_time: None,
            bid_value: Amount::zero(),
            current_bidder: None,
        }
    }
}
