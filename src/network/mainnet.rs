use crate::network::{Bip32Versions, JunkcoinNetwork, NetworkError};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Represents the Junkcoin mainnet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Mainnet;

impl JunkcoinNetwork for Mainnet {
    /// Returns the prefix prepended to a message before it is hashed for signing.
    fn to_message_prefix() -> &'static str {
        "Junkcoin Signed Message:\n"
    }

    /// Returns the human-readable part of a bech32 segwit address.
    fn to_bech32_hrp() -> &'static str {
        "jkc"
    }

    /// Returns the version byte of a base58check pay-to-pubkey-hash address.
    fn to_pubkey_hash_prefix() -> u8 {
        0x10
    }

    /// Returns the version byte of a base58check pay-to-script-hash address.
    fn to_script_hash_prefix() -> u8 {
        0x05
    }

    /// Returns the network of the given address version byte.
    fn from_address_prefix(prefix: u8) -> Result<Self, NetworkError> {
        match prefix {
            0x10 | 0x05 => Ok(Self),
            _ => Err(NetworkError::InvalidAddressPrefix(prefix)),
        }
    }

    /// Returns the version byte of a base58check-encoded private key.
    fn to_wif_prefix() -> u8 {
        0x90
    }

    /// Returns the network of the given wif prefix.
    fn from_wif_prefix(prefix: u8) -> Result<Self, NetworkError> {
        match prefix {
            0x90 => Ok(Self),
            _ => Err(NetworkError::InvalidWifPrefix(prefix)),
        }
    }

    /// Returns the version bytes of serialized extended keys.
    fn to_extended_key_versions() -> Bip32Versions {
        Bip32Versions {
            public: 0x0488_b21e,  // xpub
            private: 0x0488_ade4, // xprv
        }
    }

    /// Returns the network of the given extended key version.
    fn from_extended_key_version(version: u32) -> Result<Self, NetworkError> {
        match version {
            0x0488_b21e | 0x0488_ade4 => Ok(Self),
            _ => Err(NetworkError::InvalidExtendedKeyVersion(version)),
        }
    }
}

impl FromStr for Mainnet {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self),
            _ => Err(NetworkError::InvalidNetwork(s.into())),
        }
    }
}

impl fmt::Display for Mainnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mainnet")
    }
}
