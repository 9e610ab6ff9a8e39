use super::*;

/// Initialize the auction contract bound to an NFT registry, with no
/// auctions. The account deploying the instance becomes the contract owner.
#[init(contract = "TenxAuction", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;
    let owner = Address::Account(ctx.init_origin());
    Ok(State::empty(state_builder, owner, params.nft))
}

/// Start an auction for a token and take it into custody. The sender must
/// own the token on the registry and have approved this contract for it.
/// Bidding stays open for the bid window from the current block time.
///
/// It rejects if:
/// - The sender is not an account address.
/// - It fails to parse the parameter.
/// - The sender does not own the token on the registry.
/// - This contract is not the approved address for the token.
/// - An auction for the token is already running.
/// - The custody transfer on the registry fails.
/// - Fails to log `Start` event.
#[receive(
    contract = "TenxAuction",
    name = "startAuction",
    parameter = "StartParams",
    mutable,
    enable_logger
)]
fn start_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = if let Address::Account(account) = ctx.sender() {
        account
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into())
    };
    let params: StartParams = ctx.parameter_cursor().get()?;
    let self_address = Address::Contract(ctx.self_address());

    // The registry must report the sender as owner and this contract as the
    // approved address, otherwise the custody transfer below cannot succeed.
    let token_owner = nft::owner_of(host, &params.token_id)?;
    ensure_eq!(
        token_owner,
        Address::Account(sender),
        CustomContractError::SellerNotTokenOwner.into()
    );
    let approved = nft::get_approved(host, &params.token_id)?;
    ensure_eq!(
        approved,
        Some(self_address),
        CustomContractError::SellerNotApproved.into()
    );

    let now = ctx.metadata().slot_time();
    let bid_end_time = host
        .state_mut()
        .start_auction(params.token_id, sender, params.base_price, now)?;

    // Take the token into custody for the duration of the auction.
    nft::transfer(host, params.token_id, Address::Account(sender), self_address)?;

    // Event for the started auction.
    logger.log(&CustomEvent::Start(StartEvent {
        token_id: params.token_id,
        seller: sender,
        base_price: params.base_price,
        bid_end_time,
    }))?;

    Ok(())
}

/// Place a bid on a running auction. The attached CCD is the bid and must
/// strictly exceed the standing bid. The outbid leader, if any, is credited
/// in the escrow ledger and can claim the refund with `withdraw`.
///
/// It rejects if:
/// - The sender is not an account address.
/// - It fails to parse the parameter.
/// - The auction has not been started.
/// - The auction has been settled or its bidding window has passed.
/// - The sender already holds the highest bid.
/// - The attached amount does not exceed the standing bid.
/// - Fails to log `Bid` event.
#[receive(
    contract = "TenxAuction",
    name = "bid",
    parameter = "ContractTokenId",
    mutable,
    payable,
    enable_logger
)]
fn bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = if let Address::Account(account) = ctx.sender() {
        account
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into())
    };
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    let now = ctx.metadata().slot_time();

    host.state_mut().bid(&token_id, sender, amount, now)?;

    // Event for the new standing bid.
    logger.log(&CustomEvent::Bid(BidEvent {
        token_id,
        bidder: sender,
        amount,
    }))?;

    Ok(())
}

/// Pay out the caller's escrow entry. Outbid bidders claim their refunds
/// and sellers claim their proceeds through this one entrypoint.
///
/// It rejects if:
/// - The sender is not an account address.
/// - Nothing is owed to the sender.
/// - The CCD transfer fails.
/// - Fails to log `Withdraw` event.
#[receive(
    contract = "TenxAuction",
    name = "withdraw",
    mutable,
    enable_logger
)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = if let Address::Account(account) = ctx.sender() {
        account
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into())
    };

    // The escrow entry is zeroed before the transfer goes out.
    let owed = host.state_mut().withdraw(&sender)?;
    host.invoke_transfer(&sender, owed)?;

    // Event for the payout.
    logger.log(&CustomEvent::Withdraw(WithdrawEvent {
        account: sender,
        amount: owed,
    }))?;

    Ok(())
}

/// Settle an auction whose bidding window has passed. The token goes to the
/// winner, or back to the seller when nobody bid, and the winning bid is
/// credited to the seller's escrow entry.
///
/// It rejects if:
/// - The sender is not the contract owner.
/// - It fails to parse the parameter.
/// - The auction has not been started or was already settled.
/// - The bidding window has not passed yet.
/// - The token transfer on the registry fails.
/// - Fails to log `End` event.
#[receive(
    contract = "TenxAuction",
    name = "endAuction",
    parameter = "ContractTokenId",
    mutable,
    enable_logger
)]
fn end_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    host.state().ownership.ensure_owner(&ctx.sender())?;
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    let now = ctx.metadata().slot_time();
    let self_address = Address::Contract(ctx.self_address());

    let outcome = host.state_mut().end_auction(&token_id, now)?;

    let event = match outcome {
        AuctionOutcome::Sold {
            winner,
            seller: _,
            price,
        } => {
            nft::transfer(host, token_id, self_address, Address::Account(winner))?;
            EndEvent {
                token_id,
                winner: Some(winner),
                price,
            }
        }
        AuctionOutcome::Unsold { seller } => {
            nft::transfer(host, token_id, self_address, Address::Account(seller))?;
            EndEvent {
                token_id,
                winner: None,
                price: Amount::zero(),
            }
        }
    };

    // Event for the settled auction.
    logger.log(&CustomEvent::End(event))?;

    Ok(())
}

/// View the auction record for a token. Unknown tokens are reported as not
/// started.
#[receive(
    contract = "TenxAuction",
    name = "viewAuction",
    parameter = "ContractTokenId",
    return_value = "AuctionView"
)]
fn view_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AuctionView> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().auction_view(&token_id))
}

/// View the amount currently owed to an account, zero when no entry exists.
#[receive(
    contract = "TenxAuction",
    name = "viewPendingReturn",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn view_pending_return<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    let account: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().pending_return(&account))
}

/// Transfer ownership of the contract to a new address.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the current contract owner.
/// - Fails to log `OwnershipChange` event.
#[receive(
    contract = "TenxAuction",
    name = "transferOwnership",
    parameter = "Address",
    mutable,
    enable_logger
)]
fn transfer_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let new_owner: Address = ctx.parameter_cursor().get()?;

    let change = host
        .state_mut()
        .ownership
        .transfer(&ctx.sender(), new_owner)?;

    // Event for the ownership change.
    logger.log(&CustomEvent::OwnershipChange(change))?;

    Ok(())
}

/// View the current contract owner.
#[receive(contract = "TenxAuction", name = "viewOwner", return_value = "Address")]
fn view_owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().ownership.owner())
}

/// View the registry this engine is bound to.
#[receive(contract = "TenxAuction", name = "viewNft", return_value = "ContractAddress")]
fn view_nft<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractAddress> {
    Ok(host.state().nft)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::{parse_and_check_mock, parse_and_ok_mock};
    use concordium_cis2::TokenIdU32;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0u8; 32]);
    const SELLER: AccountAddress = AccountAddress([1u8; 32]);
    const BIDDER_A: AccountAddress = AccountAddress([2u8; 32]);
    const BIDDER_B: AccountAddress = AccountAddress([3u8; 32]);
    const NFT_ADDR: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const SELF_ADDR: ContractAddress = ContractAddress {
        index: 42,
        subindex: 0,
    };

    const TOKEN_0: ContractTokenId = TokenIdU32(1);
    const BASE_PRICE: Amount = Amount::from_micro_ccd(2);

    const START_TIME: Timestamp = Timestamp::from_timestamp_millis(100);
    /// First instant at which the bid window of an auction started at
    /// `START_TIME` has passed.
    const AFTER_WINDOW: Timestamp = Timestamp::from_timestamp_millis(100 + 8 * 24 * 60 * 60 * 1000);

    fn new_ctx<'a>(sender: Address, slot_time: Timestamp) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_owner(OWNER);
        ctx.set_self_address(SELF_ADDR);
        ctx.set_metadata_slot_time(slot_time);
        ctx
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, Address::Account(OWNER), NFT_ADDR);
        TestHost::new(state, state_builder)
    }

    /// Registry mocks for a token owned by `token_owner` with this contract
    /// as the approved address.
    fn setup_nft_mocks(host: &mut TestHost<State<TestStateApi>>, token_owner: AccountAddress) {
        host.setup_mock_entrypoint(
            NFT_ADDR,
            OwnedEntrypointName::new_unchecked("ownerOf".into()),
            parse_and_ok_mock::<ContractTokenId, _>(Address::Account(token_owner)),
        );
        host.setup_mock_entrypoint(
            NFT_ADDR,
            OwnedEntrypointName::new_unchecked("getApproved".into()),
            parse_and_ok_mock::<ContractTokenId, _>(Some(Address::Contract(SELF_ADDR))),
        );
        host.setup_mock_entrypoint(
            NFT_ADDR,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_ok_mock::<nft::TransferNftParams, _>(()),
        );
    }

    /// Registry transfer mock that additionally checks the receiver.
    fn expect_transfer_to(host: &mut TestHost<State<TestStateApi>>, to: Address) {
        host.setup_mock_entrypoint(
            NFT_ADDR,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<nft::TransferNftParams, _>(
                move |params| params.to == to,
                (),
            ),
        );
    }

    fn start_token_0(host: &mut TestHost<State<TestStateApi>>) {
        host.state_mut()
            .start_auction(TOKEN_0, SELLER, BASE_PRICE, START_TIME)
            .expect_report("Starting the auction should succeed");
    }

    #[concordium_test]
    fn test_init() {
        let params = to_bytes(&InitParams { nft: NFT_ADDR });
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER);
        ctx.set_parameter(&params);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Init should succeed");

        claim_eq!(state.ownership.owner(), Address::Account(OWNER));
        claim_eq!(state.nft, NFT_ADDR);
        claim!(state.auctions.iter().next().is_none());
        claim!(state.pending_returns.iter().next().is_none());
    }

    #[concordium_test]
    fn test_view_nft_reports_bound_registry() {
        let params = to_bytes(&InitParams { nft: NFT_ADDR });
        let mut init_ctx = TestInitContext::empty();
        init_ctx.set_init_origin(OWNER);
        init_ctx.set_parameter(&params);
        let mut state_builder = TestStateBuilder::new();
        let state = init(&init_ctx, &mut state_builder).expect_report("Init should succeed");
        let host = TestHost::new(state, state_builder);

        let ctx = new_ctx(Address::Account(SELLER), START_TIME);
        let nft = view_nft(&ctx, &host).expect_report("Viewing the registry should succeed");

        claim_eq!(nft, NFT_ADDR);
    }

    #[concordium_test]
    fn test_start_auction() {
        let mut host = new_host();
        setup_nft_mocks(&mut host, SELLER);
        expect_transfer_to(&mut host, Address::Contract(SELF_ADDR));

        let params = to_bytes(&StartParams {
            token_id: TOKEN_0,
            base_price: BASE_PRICE,
        });
        let mut ctx = new_ctx(Address::Account(SELLER), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        start_auction(&ctx, &mut host, &mut logger)
            .expect_report("Starting the auction should succeed");

        let view = host.state().auction_view(&TOKEN_0);
        claim_eq!(
            view,
            AuctionView {
                started: true,
                ended: false,
                seller: Some(SELLER),
                bid_end_time: Some(AFTER_WINDOW),
                bid_value: BASE_PRICE,
                current_bidder: None,
            }
        );

        claim_eq!(logger.logs.len(), 1);
        let event = CustomEvent::deserial(&mut Cursor::new(&logger.logs[0]))
            .expect_report("Logged event should parse");
        if let CustomEvent::Start(start) = event {
            claim_eq!(start.seller, SELLER);
            claim_eq!(start.bid_end_time, AFTER_WINDOW);
        } else {
            fail!("Expected a start event");
        }
    }

    #[concordium_test]
    fn test_start_auction_by_non_owner_of_token_fails() {
        let mut host = new_host();
        setup_nft_mocks(&mut host, SELLER);

        let params = to_bytes(&StartParams {
            token_id: TOKEN_0,
            base_price: BASE_PRICE,
        });
        let mut ctx = new_ctx(Address::Account(BIDDER_A), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        let result = start_auction(&ctx, &mut host, &mut logger);

        claim_eq!(
            result,
            Err(CustomContractError::SellerNotTokenOwner.into())
        );
        claim!(!host.state().auction_view(&TOKEN_0).started);
    }

    #[concordium_test]
    fn test_start_auction_without_approval_fails() {
        let mut host = new_host();
        setup_nft_mocks(&mut host, SELLER);
        // The seller never approved this contract.
        host.setup_mock_entrypoint(
            NFT_ADDR,
            OwnedEntrypointName::new_unchecked("getApproved".into()),
            parse_and_ok_mock::<ContractTokenId, _>(Option::<Address>::None),
        );

        let params = to_bytes(&StartParams {
            token_id: TOKEN_0,
            base_price: BASE_PRICE,
        });
        let mut ctx = new_ctx(Address::Account(SELLER), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        let result = start_auction(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::SellerNotApproved.into()));
        claim!(!host.state().auction_view(&TOKEN_0).started);
    }

    #[concordium_test]
    fn test_start_auction_twice_fails() {
        let mut host = new_host();
        setup_nft_mocks(&mut host, SELLER);

        let params = to_bytes(&StartParams {
            token_id: TOKEN_0,
            base_price: BASE_PRICE,
        });
        let mut ctx = new_ctx(Address::Account(SELLER), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        start_auction(&ctx, &mut host, &mut logger)
            .expect_report("Starting the auction should succeed");
        let result = start_auction(&ctx, &mut host, &mut logger);

        claim_eq!(
            result,
            Err(CustomContractError::AuctionAlreadyStarted.into())
        );
    }

    #[concordium_test]
    fn test_start_auction_by_contract_fails() {
        let mut host = new_host();

        let params = to_bytes(&StartParams {
            token_id: TOKEN_0,
            base_price: BASE_PRICE,
        });
        let mut ctx = new_ctx(Address::Contract(NFT_ADDR), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        let result = start_auction(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_bid() {
        let mut host = new_host();
        start_token_0(&mut host);

        let params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(BIDDER_A), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        bid(&ctx, &mut host, Amount::from_micro_ccd(3), &mut logger)
            .expect_report("Bidding should succeed");

        let view = host.state().auction_view(&TOKEN_0);
        claim_eq!(view.bid_value, Amount::from_micro_ccd(3));
        claim_eq!(view.current_bidder, Some(BIDDER_A));
        // The first bid outbids nobody.
        claim_eq!(host.state().pending_return(&BIDDER_A), Amount::zero());
    }

    #[concordium_test]
    fn test_outbid_credits_previous_leader() {
        let mut host = new_host();
        start_token_0(&mut host);
        host.state_mut()
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), START_TIME)
            .expect_report("Bidding should succeed");

        let params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(BIDDER_B), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        bid(&ctx, &mut host, Amount::from_micro_ccd(4), &mut logger)
            .expect_report("Outbidding should succeed");

        let view = host.state().auction_view(&TOKEN_0);
        claim_eq!(view.bid_value, Amount::from_micro_ccd(4));
        claim_eq!(view.current_bidder, Some(BIDDER_B));
        claim_eq!(
            host.state().pending_return(&BIDDER_A),
            Amount::from_micro_ccd(3)
        );
        claim_eq!(host.state().pending_return(&BIDDER_B), Amount::zero());
    }

    #[concordium_test]
    fn test_repeated_outbids_accumulate() {
        let mut host = new_host();
        start_token_0(&mut host);
        let state = host.state_mut();
        state
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), START_TIME)
            .expect_report("Bidding should succeed");
        state
            .bid(&TOKEN_0, BIDDER_B, Amount::from_micro_ccd(4), START_TIME)
            .expect_report("Bidding should succeed");
        state
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(5), START_TIME)
            .expect_report("Bidding should succeed");
        state
            .bid(&TOKEN_0, BIDDER_B, Amount::from_micro_ccd(6), START_TIME)
            .expect_report("Bidding should succeed");

        // Each bidder was outbid once per round.
        claim_eq!(
            state.pending_return(&BIDDER_A),
            Amount::from_micro_ccd(3 + 5)
        );
        claim_eq!(state.pending_return(&BIDDER_B), Amount::from_micro_ccd(4));
        claim_eq!(
            state.auction_view(&TOKEN_0).bid_value,
            Amount::from_micro_ccd(6)
        );
    }

    #[concordium_test]
    fn test_bid_not_exceeding_standing_bid_fails() {
        let mut host = new_host();
        start_token_0(&mut host);
        let state = host.state_mut();
        state
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), START_TIME)
            .expect_report("Bidding should succeed");

        // Equal to the standing bid is not enough.
        let result = state.bid(&TOKEN_0, BIDDER_B, Amount::from_micro_ccd(3), START_TIME);
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));

        // The base price itself must also be exceeded.
        let result = state.bid(&TOKEN_0, BIDDER_B, BASE_PRICE, START_TIME);
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));
    }

    #[concordium_test]
    fn test_bid_by_current_leader_fails() {
        let mut host = new_host();
        start_token_0(&mut host);
        let state = host.state_mut();
        state
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), START_TIME)
            .expect_report("Bidding should succeed");

        let result = state.bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(5), START_TIME);

        claim_eq!(
            result,
            Err(CustomContractError::AlreadyHighestBidder.into())
        );
        claim_eq!(
            state.auction_view(&TOKEN_0).bid_value,
            Amount::from_micro_ccd(3)
        );
    }

    #[concordium_test]
    fn test_bid_before_start_fails() {
        let mut host = new_host();

        let params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(BIDDER_A), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        let result = bid(&ctx, &mut host, Amount::from_micro_ccd(3), &mut logger);

        claim_eq!(result, Err(CustomContractError::AuctionNotStarted.into()));
    }

    #[concordium_test]
    fn test_bid_after_window_fails() {
        let mut host = new_host();
        start_token_0(&mut host);

        let result =
            host.state_mut()
                .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), AFTER_WINDOW);

        claim_eq!(result, Err(CustomContractError::AuctionEnded.into()));
    }

    #[concordium_test]
    fn test_withdraw() {
        let mut host = new_host();
        start_token_0(&mut host);
        let state = host.state_mut();
        state
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), START_TIME)
            .expect_report("Bidding should succeed");
        state
            .bid(&TOKEN_0, BIDDER_B, Amount::from_micro_ccd(4), START_TIME)
            .expect_report("Bidding should succeed");
        host.set_self_balance(Amount::from_micro_ccd(7));

        let ctx = new_ctx(Address::Account(BIDDER_A), START_TIME);
        let mut logger = TestLogger::init();

        withdraw(&ctx, &mut host, &mut logger).expect_report("Withdrawal should succeed");

        claim_eq!(
            host.get_transfers(),
            [(BIDDER_A, Amount::from_micro_ccd(3))]
        );
        claim_eq!(host.state().pending_return(&BIDDER_A), Amount::zero());

        // A second withdrawal has nothing left to claim.
        let result = withdraw(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NothingToWithdraw.into()));
    }

    #[concordium_test]
    fn test_withdraw_with_nothing_owed_fails() {
        let mut host = new_host();

        let ctx = new_ctx(Address::Account(BIDDER_A), START_TIME);
        let mut logger = TestLogger::init();

        let result = withdraw(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NothingToWithdraw.into()));
        claim!(host.get_transfers().is_empty());
    }

    #[concordium_test]
    fn test_end_auction_with_winner() {
        let mut host = new_host();
        start_token_0(&mut host);
        host.state_mut()
            .bid(&TOKEN_0, BIDDER_A, Amount::from_micro_ccd(3), START_TIME)
            .expect_report("Bidding should succeed");
        // The token must go to the winner.
        expect_transfer_to(&mut host, Address::Account(BIDDER_A));

        let params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(OWNER), AFTER_WINDOW);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        end_auction(&ctx, &mut host, &mut logger).expect_report("Settling should succeed");

        let view = host.state().auction_view(&TOKEN_0);
        claim!(view.ended);
        // The proceeds await the seller in the escrow ledger.
        claim_eq!(
            host.state().pending_return(&SELLER),
            Amount::from_micro_ccd(3)
        );

        // The settled auction accepts no further bids and cannot be settled
        // again.
        let result =
            host.state_mut()
                .bid(&TOKEN_0, BIDDER_B, Amount::from_micro_ccd(9), AFTER_WINDOW);
        claim_eq!(result, Err(CustomContractError::AuctionEnded.into()));
        let result = host.state_mut().end_auction(&TOKEN_0, AFTER_WINDOW);
        claim_eq!(result, Err(CustomContractError::AuctionEnded.into()));
    }

    #[concordium_test]
    fn test_end_auction_without_bids() {
        let mut host = new_host();
        start_token_0(&mut host);
        // Nobody bid, so the token goes back to the seller.
        expect_transfer_to(&mut host, Address::Account(SELLER));

        let params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(OWNER), AFTER_WINDOW);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        end_auction(&ctx, &mut host, &mut logger).expect_report("Settling should succeed");

        claim!(host.state().auction_view(&TOKEN_0).ended);
        claim_eq!(host.state().pending_return(&SELLER), Amount::zero());
    }

    #[concordium_test]
    fn test_end_auction_by_non_owner_fails() {
        let mut host = new_host();
        start_token_0(&mut host);

        let params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(SELLER), AFTER_WINDOW);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        let result = end_auction(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim!(!host.state().auction_view(&TOKEN_0).ended);
    }

    #[concordium_test]
    fn test_end_auction_never_started_fails() {
        let mut host = new_host();

        let result = host.state_mut().end_auction(&TOKEN_0, AFTER_WINDOW);

        claim_eq!(result, Err(CustomContractError::AuctionNotStarted.into()));
    }

    #[concordium_test]
    fn test_end_auction_before_window_passes_fails() {
        let mut host = new_host();
        start_token_0(&mut host);

        let result = host.state_mut().end_auction(&TOKEN_0, START_TIME);

        claim_eq!(result, Err(CustomContractError::AuctionStillOngoing.into()));
        claim!(!host.state().auction_view(&TOKEN_0).ended);
    }

    #[concordium_test]
    fn test_restart_after_settlement() {
        let mut host = new_host();
        start_token_0(&mut host);
        let state = host.state_mut();
        let outcome = state
            .end_auction(&TOKEN_0, AFTER_WINDOW)
            .expect_report("Settling should succeed");
        claim_eq!(outcome, AuctionOutcome::Unsold { seller: SELLER });

        // The token may be auctioned again once the previous auction is
        // settled.
        let bid_end_time = state
            .start_auction(TOKEN_0, SELLER, Amount::from_micro_ccd(10), AFTER_WINDOW)
            .expect_report("Restarting should succeed");

        let view = state.auction_view(&TOKEN_0);
        claim!(view.started);
        claim!(!view.ended);
        claim_eq!(view.bid_value, Amount::from_micro_ccd(10));
        claim_eq!(view.bid_end_time, Some(bid_end_time));
        claim_eq!(view.current_bidder, None);
    }

    #[concordium_test]
    fn test_view_auction_unknown_token() {
        let host = new_host();

        let view = host.state().auction_view(&TOKEN_0);

        claim_eq!(view, AuctionView::default());
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = new_host();
        let params = to_bytes(&Address::Account(SELLER));
        let mut ctx = new_ctx(Address::Account(OWNER), START_TIME);
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        transfer_ownership(&ctx, &mut host, &mut logger)
            .expect_report("Ownership transfer should succeed");

        claim_eq!(host.state().ownership.owner(), Address::Account(SELLER));

        // The previous owner can no longer settle auctions.
        start_token_0(&mut host);
        let end_params = to_bytes(&TOKEN_0);
        let mut ctx = new_ctx(Address::Account(OWNER), AFTER_WINDOW);
        ctx.set_parameter(&end_params);
        let result = end_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
    }
}
