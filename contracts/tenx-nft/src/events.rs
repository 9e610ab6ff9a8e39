use super::*;

/// An untagged event of a token approval update.
#[derive(Debug, Serialize, SchemaType)]
pub struct ApprovalEvent {
    /// Token the approval applies to.
    pub token_id: ContractTokenId,
    /// Owner of the token.
    pub owner: Address,
    /// The approved address, or `None` when cleared.
    pub approved: Option<Address>,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Token approval set or cleared.
    Approval(ApprovalEvent),
    /// Contract ownership transferred.
    OwnershipChange(OwnershipChange),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Approval(event) => {
                out.write_u8(APPROVAL_TAG)?;
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
            APPROVAL_TAG => ApprovalEvent::deserial(source).map(CustomEvent::Approval),
            OWNERSHIP_CHANGE_TAG => {
                OwnershipChange::deserial(source).map(CustomEvent::OwnershipChange)
            }
            _ => Err(ParseError::default()),
        }
    }
}
