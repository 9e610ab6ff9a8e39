use super::*;

/// How long bidding stays open after an auction starts.
pub const BID_WINDOW: Duration = Duration::from_days(8);

/// Lifecycle phase of an auction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum AuctionPhase {
    /// Bidding is open until the bid end time.
    Started,
    /// The auction has been settled. The record stays behind for views and
    /// may be replaced by a fresh auction for the same token.
    Ended,
}

/// State of a single auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct AuctionEntry {
    /// Current lifecycle phase.
    pub phase: AuctionPhase,
    /// Account that started the auction and receives the proceeds.
    pub seller: AccountAddress,
    /// Time after which bidding closes and the auction may be settled.
    pub bid_end_time: Timestamp,
    /// Standing bid, or the base price while nobody has bid.
    pub bid_value: Amount,
    /// Current highest bidder. `None` until the first bid.
    pub current_bidder: Option<AccountAddress>,
}

/// Outcome of settling an auction, used to route the token and log the
/// matching event.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum AuctionOutcome {
    /// The auction had at least one bid.
    Sold {
        winner: AccountAddress,
        seller: AccountAddress,
        price: Amount,
    },
    /// Nobody bid. The token goes back to the seller.
    Unsold { seller: AccountAddress },
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Access control for owner-gated functions.
    pub ownership: Ownership,
    /// Address of the NFT registry holding the auctioned tokens.
    pub nft: ContractAddress,
    /// Auction records by token.
    pub auctions: StateMap<ContractTokenId, AuctionEntry, S>,
    /// Escrow ledger of amounts owed to outbid bidders and paid-out sellers,
    /// claimed via `withdraw`.
    pub pending_returns: StateMap<AccountAddress, Amount, S>,
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state bound to an NFT registry, with no auctions.
    pub fn empty(state_builder: &mut StateBuilder<S>, owner: Address, nft: ContractAddress) -> Self {
        State {
            ownership: Ownership::new(owner),
            nft,
            auctions: state_builder.new_map(),
            pending_returns: state_builder.new_map(),
        }
    }

    /// Record the start of an auction and return the computed bid end time.
    /// An ended record for the same token is replaced; an ongoing auction is
    /// rejected.
    pub fn start_auction(
        &mut self,
        token_id: ContractTokenId,
        seller: AccountAddress,
        base_price: Amount,
        now: Timestamp,
    ) -> ContractResult<Timestamp> {
        if let Some(entry) = self.auctions.get(&token_id) {
            ensure_eq!(
                entry.phase,
                AuctionPhase::Ended,
                CustomContractError::AuctionAlreadyStarted.into()
            );
        }
        let bid_end_time = now
            .checked_add(BID_WINDOW)
            .unwrap_or(Timestamp::from_timestamp_millis(u64::MAX));
        self.auctions.insert(
            token_id,
            AuctionEntry {
                phase: AuctionPhase::Started,
                seller,
                bid_end_time,
                bid_value: base_price,
                current_bidder: None,
            },
        );
        Ok(bid_end_time)
    }

    /// Record a bid. On success the bid becomes the standing bid and the
    /// outbid leader, if any, is credited in the escrow ledger and returned
    /// for logging.
    pub fn bid(
        &mut self,
        token_id: &ContractTokenId,
        bidder: AccountAddress,
        amount: Amount,
        now: Timestamp,
    ) -> ContractResult<Option<(AccountAddress, Amount)>> {
        let (previous_bidder, previous_bid) = {
            let mut entry = self
                .auctions
                .get_mut(token_id)
                .ok_or(ContractError::from(CustomContractError::AuctionNotStarted))?;
            ensure_eq!(
                entry.phase,
                AuctionPhase::Started,
                CustomContractError::AuctionEnded.into()
            );
            ensure!(
                now < entry.bid_end_time,
                CustomContractError::AuctionEnded.into()
            );
            ensure!(
                entry.current_bidder != Some(bidder),
                CustomContractError::AlreadyHighestBidder.into()
            );
            ensure!(
                amount > entry.bid_value,
                CustomContractError::BidTooLow.into()
            );

            let previous_bid = entry.bid_value;
            let previous_bidder = entry.current_bidder;
            entry.bid_value = amount;
            entry.current_bidder = Some(bidder);
            (previous_bidder, previous_bid)
        };

        match previous_bidder {
            Some(outbid) => {
                self.credit(outbid, previous_bid);
                Ok(Some((outbid, previous_bid)))
            }
            None => Ok(None),
        }
    }

    /// Drain the caller's escrow entry. Rejects when nothing is owed.
    pub fn withdraw(&mut self, caller: &AccountAddress) -> ContractResult<Amount> {
        let owed = self
            .pending_returns
            .remove_and_get(caller)
            .ok_or(ContractError::from(CustomContractError::NothingToWithdraw))?;
        ensure!(
            owed > Amount::zero(),
            CustomContractError::NothingToWithdraw.into()
        );
        Ok(owed)
    }

    /// Settle an auction whose bidding window has passed. The winning bid,
    /// if any, is credited to the seller's escrow entry.
    pub fn end_auction(
        &mut self,
        token_id: &ContractTokenId,
        now: Timestamp,
    ) -> ContractResult<AuctionOutcome> {
        let outcome = {
            let mut entry = self
                .auctions
                .get_mut(token_id)
                .ok_or(ContractError::from(CustomContractError::AuctionNotStarted))?;
            ensure_eq!(
                entry.phase,
                AuctionPhase::Started,
                CustomContractError::AuctionEnded.into()
            );
            ensure!(
                now >= entry.bid_end_time,
                CustomContractError::AuctionStillOngoing.into()
            );

            entry.phase = AuctionPhase::Ended;
            match entry.current_bidder {
                Some(winner) => AuctionOutcome::Sold {
                    winner,
                    seller: entry.seller,
                    price: entry.bid_value,
                },
                None => AuctionOutcome::Unsold {
                    seller: entry.seller,
                },
            }
        };

        if let AuctionOutcome::Sold { seller, price, .. } = outcome {
            self.credit(seller, price);
        }
        Ok(outcome)
    }

    /// View of an auction record. Unknown tokens read as not started.
    pub fn auction_view(&self, token_id: &ContractTokenId) -> AuctionView {
        match self.auctions.get(token_id) {
            Some(entry) => AuctionView {
                started: true,
                ended: entry.phase == AuctionPhase::Ended,
                seller: Some(entry.seller),
                bid_end_time: Some(entry.bid_end_time),
                bid_value: entry.bid_value,
                current_bidder: entry.current_bidder,
            },
            None => AuctionView::default(),
        }
    }

    /// Amount currently owed to an account, zero when no entry exists.
    pub fn pending_return(&self, account: &AccountAddress) -> Amount {
        self.pending_returns
            .get(account)
            .map_or(Amount::zero(), |owed| *owed)
    }

    /// Add to an account's escrow entry.
    fn credit(&mut self, account: AccountAddress, amount: Amount) {
        let total = self
            .pending_returns
            .get(&account)
            .map_or(amount, |owed| *owed + amount);
        self.pending_returns.insert(account, total);
    }
}
