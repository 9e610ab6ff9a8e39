//! It exposes all structs, types and components shared between the Tenx
//! platform contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, ownership::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

#[cfg(not(target_arch = "wasm32"))]
pub mod test;

mod constants;
mod errors;
mod ownership;
mod types;
