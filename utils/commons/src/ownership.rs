use super::*;

/// Single-owner access control, held by value inside the state of every
/// administrable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct Ownership {
    /// The one address allowed to call owner-gated functions.
    owner: Address,
}

/// Record of a completed ownership transfer, logged by the owning contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct OwnershipChange {
    pub previous: Address,
    pub new: Address,
}

impl Ownership {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner == *address
    }

    /// Reject with `Unauthorized` unless the sender is the current owner.
    pub fn ensure_owner(&self, sender: &Address) -> Result<(), CustomContractError> {
        ensure!(self.is_owner(sender), CustomContractError::Unauthorized);
        Ok(())
    }

    /// Replace the owner. Only the current owner may do this. Returns the
    /// change record so the caller can log it.
    pub fn transfer(
        &mut self,
        sender: &Address,
        new_owner: Address,
    ) -> Result<OwnershipChange, CustomContractError> {
        self.ensure_owner(sender)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(OwnershipChange {
            previous,
            new: new_owner,
        })
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const NEW_OWNER: AccountAddress = AccountAddress([2; 32]);
    const STRANGER: AccountAddress = AccountAddress([3; 32]);

    #[concordium_test]
    fn test_ensure_owner() {
        let ownership = Ownership::new(Address::Account(OWNER));

        claim_eq!(ownership.ensure_owner(&Address::Account(OWNER)), Ok(()));
        claim_eq!(
            ownership.ensure_owner(&Address::Account(STRANGER)),
            Err(CustomContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_transfer_by_owner() {
        let mut ownership = Ownership::new(Address::Account(OWNER));

        let change = ownership.transfer(&Address::Account(OWNER), Address::Account(NEW_OWNER));
        claim_eq!(
            change,
            Ok(OwnershipChange {
                previous: Address::Account(OWNER),
                new: Address::Account(NEW_OWNER),
            })
        );
        claim_eq!(ownership.owner(), Address::Account(NEW_OWNER));

        // The previous owner lost all rights.
        claim_eq!(
            ownership.ensure_owner(&Address::Account(OWNER)),
            Err(CustomContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_transfer_by_stranger() {
        let mut ownership = Ownership::new(Address::Account(OWNER));

        let change = ownership.transfer(&Address::Account(STRANGER), Address::Account(STRANGER));
        claim_eq!(change, Err(CustomContractError::Unauthorized));
        claim_eq!(ownership.owner(), Address::Account(OWNER));
    }
}
