use super::*;

/// Parameter for the registry `transfer` function, matching its wire format.
#[derive(Debug, Serialize, SchemaType)]
pub struct TransferNftParams {
    /// Token to transfer.
    pub token_id: ContractTokenId,
    /// Current holder of the token.
    pub from: Address,
    /// Address to receive the token.
    pub to: Address,
}

/// Query the registry for the current owner of a token.
pub fn owner_of<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    token_id: &ContractTokenId,
) -> ContractResult<Address> {
    let nft = host.state().nft;
    let (_, value) = host.invoke_contract(
        &nft,
        token_id,
        EntrypointName::new_unchecked("ownerOf"),
        Amount::zero(),
    )?;

    if let Some(mut owned_data) = value {
        Ok(Address::deserial(&mut owned_data)?)
    } else {
        bail!(CustomContractError::Incompatible.into())
    }
}

/// Query the registry for the approved address of a token.
pub fn get_approved<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    token_id: &ContractTokenId,
) -> ContractResult<Option<Address>> {
    let nft = host.state().nft;
    let (_, value) = host.invoke_contract(
        &nft,
        token_id,
        EntrypointName::new_unchecked("getApproved"),
        Amount::zero(),
    )?;

    if let Some(mut owned_data) = value {
        Ok(Option::<Address>::deserial(&mut owned_data)?)
    } else {
        bail!(CustomContractError::Incompatible.into())
    }
}

/// Move a token on the registry.
pub fn transfer<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    token_id: ContractTokenId,
    from: Address,
    to: Address,
) -> ContractResult<()> {
    let nft = host.state().nft;
    let parameter = TransferNftParams { token_id, from, to };
    host.invoke_contract(
        &nft,
        &parameter,
        EntrypointName::new_unchecked("transfer"),
        Amount::zero(),
    )?;
    Ok(())
}
