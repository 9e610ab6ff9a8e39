//! # Tenx auction contract
//!
//! Single-item english auction engine over tokens held by the Tenx NFT
//! registry. Sellers approve this contract on the registry and start an
//! auction, which takes the token into custody. Bids are attached CCD and
//! must strictly exceed the standing bid; an outbid leader is credited in an
//! internal escrow ledger and pulls the refund with `withdraw`. After the
//! bidding window passes, the contract owner settles the auction: the token
//! goes to the winner (or back to the seller when nobody bid) and the
//! proceeds are credited to the seller's escrow entry.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, state::*};
use commons::*;
use concordium_std::*;

mod contract;
mod events;
mod external;
mod nft;
mod state;
