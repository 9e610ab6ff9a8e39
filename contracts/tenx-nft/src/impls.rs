use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an empty registry with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>, owner: Address) -> Self {
        State {
            ownership: Ownership::new(owner),
            tokens: state_builder.new_map(),
        }
    }

    /// Mint a new token with a given address as the owner.
    pub fn mint(&mut self, token_id: ContractTokenId, to: Address) -> ContractResult<()> {
        ensure!(
            self.tokens.get(&token_id).is_none(),
            CustomContractError::TokenIdAlreadyExists.into()
        );
        self.tokens.insert(
            token_id,
            TokenData {
                owner: to,
                approved: None,
            },
        );
        Ok(())
    }

    /// Look up the current owner of a token.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        Ok(self.data_of(token_id)?.owner)
    }

    /// Look up the approved address of a token, if any.
    pub fn get_approved(&self, token_id: &ContractTokenId) -> ContractResult<Option<Address>> {
        Ok(self.data_of(token_id)?.approved)
    }

    /// Set or clear the approved address for a token. Only the token owner
    /// may do this.
    pub fn approve(
        &mut self,
        sender: &Address,
        token_id: &ContractTokenId,
        approved: Option<Address>,
    ) -> ContractResult<()> {
        let mut data = self
            .tokens
            .get_mut(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        ensure_eq!(data.owner, *sender, ContractError::Unauthorized);
        data.approved = approved;
        Ok(())
    }

    /// Update the state with a transfer of a token. The sender must be the
    /// token owner or its approved address, and `from` must hold the token.
    /// The approval is cleared by a successful transfer.
    pub fn transfer(
        &mut self,
        sender: &Address,
        token_id: &ContractTokenId,
        from: &Address,
        to: Address,
    ) -> ContractResult<()> {
        let mut data = self
            .tokens
            .get_mut(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        ensure!(
            data.owner == *sender || data.approved == Some(*sender),
            ContractError::Unauthorized
        );
        ensure_eq!(data.owner, *from, ContractError::InsufficientFunds);

        data.owner = to;
        data.approved = None;
        Ok(())
    }

    fn data_of(&self, token_id: &ContractTokenId) -> ContractResult<TokenData> {
        self.tokens
            .get(token_id)
            .map(|data| *data)
            .ok_or(ContractError::InvalidTokenId)
    }
}
