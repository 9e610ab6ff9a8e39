/// Tag for the Custom Approval event.
pub const APPROVAL_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom OwnershipChange event.
pub const OWNERSHIP_CHANGE_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom StartAuction event.
pub const START_TAG: u8 = u8::MAX - 7;

/// Tag for the Custom Bid event.
pub const BID_TAG: u8 = u8::MAX - 8;

/// Tag for the Custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 9;

/// Tag for the Custom EndAuction event.
pub const END_TAG: u8 = u8::MAX - 10;
