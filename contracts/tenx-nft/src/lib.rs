//! # Tenx NFT registry contract
//!
//! Registry of the unique tokens traded on the Tenx auction platform. Every
//! token has exactly one owner and at most one approved address. The approved
//! address may transfer the token on the owner's behalf, which is how the
//! auction contract takes a token into custody.
//!
//! Minting is gated on the contract owner and is only used by deploy and test
//! tooling.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod events;
mod impls;
mod structs;
