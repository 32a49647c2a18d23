//! # Junkcoin Network
//!
//! Network parameters for the Junkcoin protocol.

#![forbid(unsafe_code)]

#[macro_use]
extern crate failure;

pub mod network;
pub use self::network::*;
