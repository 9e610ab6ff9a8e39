use super::*;

/// Initialize the registry with no tokens. The account deploying the
/// instance becomes the contract owner.
#[init(contract = "TenxNFT")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let owner = Address::Account(ctx.init_origin());
    Ok(State::empty(state_builder, owner))
}

/// Mint a new token with a given address as the owner. Used by deploy and
/// test tooling to create the assets put up for auction.
///
/// It rejects if:
/// - The sender is not the contract owner.
/// - It fails to parse the parameter.
/// - The token ID already exists.
/// - Fails to log `Mint` event.
#[receive(
    contract = "TenxNFT",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: MintParams = ctx.parameter_cursor().get()?;

    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;
    state.mint(params.token_id, params.to)?;

    // Event for the minted token.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id: params.token_id,
        amount: ContractTokenAmount::from(1),
        owner: params.to,
    }))?;

    Ok(())
}

/// Set or clear the address approved to transfer a token on the owner's
/// behalf. A seller approves the auction contract this way before starting
/// an auction.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token does not exist.
/// - The sender is not the token owner.
/// - Fails to log `Approval` event.
#[receive(
    contract = "TenxNFT",
    name = "approve",
    parameter = "ApproveParams",
    mutable,
    enable_logger
)]
fn approve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ApproveParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    host.state_mut()
        .approve(&sender, &params.token_id, params.approved)?;

    // Event for the approval update.
    logger.log(&CustomEvent::Approval(ApprovalEvent {
        token_id: params.token_id,
        owner: sender,
        approved: params.approved,
    }))?;

    Ok(())
}

/// Transfer a token from its current holder to another address. The sender
/// must be the token owner or its approved address; the approval is cleared
/// by the transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token does not exist.
/// - The sender is neither the token owner nor the approved address.
/// - `from` does not hold the token.
/// - Fails to log `Transfer` event.
#[receive(
    contract = "TenxNFT",
    name = "transfer",
    parameter = "TransferNftParams",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: TransferNftParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    host.state_mut()
        .transfer(&sender, &params.token_id, &params.from, params.to)?;

    // Event for the token transfer.
    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id: params.token_id,
        amount: ContractTokenAmount::from(1),
        from: params.from,
        to: params.to,
    }))?;

    Ok(())
}

/// Look up the current owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token does not exist.
#[receive(
    contract = "TenxNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// Look up the approved address of a token, if any.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token does not exist.
#[receive(
    contract = "TenxNFT",
    name = "getApproved",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn get_approved<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().get_approved(&token_id)
}

/// Transfer ownership of the contract to a new address.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the current contract owner.
/// - Fails to log `OwnershipChange` event.
#[receive(
    contract = "TenxNFT",
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
#[receive(contract = "TenxNFT", name = "viewOwner", return_value = "Address")]
fn view_owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().ownership.owner())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0u8; 32]);
    const SELLER: AccountAddress = AccountAddress([1u8; 32]);
    const BUYER: AccountAddress = AccountAddress([2u8; 32]);
    const AUCTION_CONTRACT: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };

    const TOKEN_0: ContractTokenId = TokenIdU32(1);

    fn new_ctx<'a>(sender: Address) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_owner(OWNER);
        ctx
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, Address::Account(OWNER));
        TestHost::new(state, state_builder)
    }

    fn mint_token_0(host: &mut TestHost<State<TestStateApi>>, to: AccountAddress) {
        host.state_mut()
            .mint(TOKEN_0, Address::Account(to))
            .expect_report("Minting should succeed");
    }

    #[concordium_test]
    fn test_init() {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Init should succeed");

        claim_eq!(state.ownership.owner(), Address::Account(OWNER));
        claim!(state.tokens.iter().next().is_none());
    }

    #[concordium_test]
    fn test_mint_by_owner() {
        let mut host = new_host();
        let params = to_bytes(&MintParams {
            to: Address::Account(SELLER),
            token_id: TOKEN_0,
        });
        let mut ctx = new_ctx(Address::Account(OWNER));
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        mint(&ctx, &mut host, &mut logger).expect_report("Minting should succeed");

        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Ok(Address::Account(SELLER))
        );
        claim_eq!(host.state().get_approved(&TOKEN_0), Ok(None));
    }

    #[concordium_test]
    fn test_mint_by_stranger_fails() {
        let mut host = new_host();
        let params = to_bytes(&MintParams {
            to: Address::Account(SELLER),
            token_id: TOKEN_0,
        });
        let mut ctx = new_ctx(Address::Account(SELLER));
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        let result = mint(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
    }

    #[concordium_test]
    fn test_mint_duplicate_fails() {
        let mut host = new_host();
        mint_token_0(&mut host, SELLER);

        let result = host.state_mut().mint(TOKEN_0, Address::Account(BUYER));

        claim_eq!(
            result,
            Err(CustomContractError::TokenIdAlreadyExists.into())
        );
        // The original owner is untouched.
        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Ok(Address::Account(SELLER))
        );
    }

    #[concordium_test]
    fn test_approve_by_token_owner() {
        let mut host = new_host();
        mint_token_0(&mut host, SELLER);

        let params = to_bytes(&ApproveParams {
            token_id: TOKEN_0,
            approved: Some(Address::Contract(AUCTION_CONTRACT)),
        });
        let mut ctx = new_ctx(Address::Account(SELLER));
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        approve(&ctx, &mut host, &mut logger).expect_report("Approval should succeed");

        claim_eq!(
            host.state().get_approved(&TOKEN_0),
            Ok(Some(Address::Contract(AUCTION_CONTRACT)))
        );
    }

    #[concordium_test]
    fn test_approve_by_stranger_fails() {
        let mut host = new_host();
        mint_token_0(&mut host, SELLER);

        let result = host.state_mut().approve(
            &Address::Account(BUYER),
            &TOKEN_0,
            Some(Address::Account(BUYER)),
        );

        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(host.state().get_approved(&TOKEN_0), Ok(None));
    }

    #[concordium_test]
    fn test_transfer_by_approved_clears_approval() {
        let mut host = new_host();
        mint_token_0(&mut host, SELLER);
        host.state_mut()
            .approve(
                &Address::Account(SELLER),
                &TOKEN_0,
                Some(Address::Contract(AUCTION_CONTRACT)),
            )
            .expect_report("Approval should succeed");

        let params = to_bytes(&TransferNftParams {
            token_id: TOKEN_0,
            from: Address::Account(SELLER),
            to: Address::Contract(AUCTION_CONTRACT),
        });
        let mut ctx = new_ctx(Address::Contract(AUCTION_CONTRACT));
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        transfer(&ctx, &mut host, &mut logger).expect_report("Transfer should succeed");

        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Ok(Address::Contract(AUCTION_CONTRACT))
        );
        claim_eq!(host.state().get_approved(&TOKEN_0), Ok(None));
    }

    #[concordium_test]
    fn test_transfer_by_stranger_fails() {
        let mut host = new_host();
        mint_token_0(&mut host, SELLER);

        let result = host.state_mut().transfer(
            &Address::Account(BUYER),
            &TOKEN_0,
            &Address::Account(SELLER),
            Address::Account(BUYER),
        );

        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Ok(Address::Account(SELLER))
        );
    }

    #[concordium_test]
    fn test_transfer_wrong_from_fails() {
        let mut host = new_host();
        mint_token_0(&mut host, SELLER);

        let result = host.state_mut().transfer(
            &Address::Account(SELLER),
            &TOKEN_0,
            &Address::Account(BUYER),
            Address::Account(BUYER),
        );

        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    #[concordium_test]
    fn test_transfer_unknown_token_fails() {
        let mut host = new_host();

        let result = host.state_mut().transfer(
            &Address::Account(SELLER),
            &TOKEN_0,
            &Address::Account(SELLER),
            Address::Account(BUYER),
        );

        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = new_host();
        let params = to_bytes(&Address::Account(SELLER));
        let mut ctx = new_ctx(Address::Account(OWNER));
        ctx.set_parameter(&params);
        let mut logger = TestLogger::init();

        transfer_ownership(&ctx, &mut host, &mut logger)
            .expect_report("Ownership transfer should succeed");

        claim_eq!(host.state().ownership.owner(), Address::Account(SELLER));
    }
}
