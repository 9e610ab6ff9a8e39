use super::*;

/// An untagged event of an auction being started.
#[derive(Debug, Serialize, SchemaType)]
pub struct StartEvent {
    /// Token put up for auction.
    pub token_id: ContractTokenId,
    /// Account that started the auction.
    pub seller: AccountAddress,
    /// Starting price.
    pub base_price: Amount,
    /// Time after which bidding closes.
    pub bid_end_time: Timestamp,
}

/// An untagged event of a bid becoming the standing bid.
#[derive(Debug, Serialize, SchemaType)]
pub struct BidEvent {
    /// Token being bid on.
    pub token_id: ContractTokenId,
    /// Account holding the new standing bid.
    pub bidder: AccountAddress,
    /// The new standing bid.
    pub amount: Amount,
}

/// An untagged event of an escrow entry being paid out.
#[derive(Debug, Serialize, SchemaType)]
pub struct WithdrawEvent {
    /// Account the payout went to.
    pub account: AccountAddress,
    /// Amount paid out.
    pub amount: Amount,
}

/// An untagged event of an auction being settled.
#[derive(Debug, Serialize, SchemaType)]
pub struct EndEvent {
    /// Token the auction was for.
    pub token_id: ContractTokenId,
    /// Winning bidder, or `None` when nobody bid.
    pub winner: Option<AccountAddress>,
    /// Winning bid, or the base price when nobody bid.
    pub price: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Auction started and the token taken into custody.
    Start(StartEvent),
    /// New standing bid recorded.
    Bid(BidEvent),
    /// Escrow entry paid out.
    Withdraw(WithdrawEvent),
    /// Auction settled.
    End(EndEvent),
    /// Contract ownership transferred.
    OwnershipChange(OwnershipChange),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Start(event) => {
                out.write_u8(START_TAG)?;
                event.serial(out)
            }
            CustomEvent::Bid(event) => {
                out.write_u8(BID_TAG)?;
                event.serial(out)
            }
            CustomEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
            CustomEvent::End(event) => {
                out.write_u8(END_TAG)?;
                event.serial(out)
            }
            CustomEvent::OwnershipChange(event) => {
                out.write_u8(OWNERSHIP_CHANGE_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            START_TAG => StartEvent::deserial(source).map(CustomEvent::Start),
            BID_TAG => BidEvent::deserial(source).map(CustomEvent::Bid),
            WITHDRAW_TAG => WithdrawEvent::deserial(source).map(CustomEvent::Withdraw),
            END_TAG => EndEvent::deserial(source).map(CustomEvent::End),
            OWNERSHIP_CHANGE_TAG => {
                OwnershipChange::deserial(source).map(CustomEvent::OwnershipChange)
            }
            _ => Err(ParseError::default()),
        }
    }
}
