use serde::Serialize;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

pub mod mainnet;
pub use self::mainnet::*;

/// The interface for the parameters of a Junkcoin network.
pub trait JunkcoinNetwork:
    Copy + Clone + Debug + Display + FromStr + Send + Sync + 'static + Eq + Ord + Hash
{
    /// Returns the prefix prepended to a message before it is hashed for signing.
    fn to_message_prefix() -> &'static str;

    /// Returns the human-readable part of a bech32 segwit address.
    fn to_bech32_hrp() -> &'static str;

    /// Returns the version byte of a base58check pay-to-pubkey-hash address.
    fn to_pubkey_hash_prefix() -> u8;

    /// Returns the version byte of a base58check pay-to-script-hash address.
    fn to_script_hash_prefix() -> u8;

    /// Returns the network of the given address version byte.
    fn from_address_prefix(prefix: u8) -> Result<Self, NetworkError>;

    /// Returns the version byte of a base58check-encoded private key.
    fn to_wif_prefix() -> u8;

    /// Returns the network of the given wif prefix.
    fn from_wif_prefix(prefix: u8) -> Result<Self, NetworkError>;

    /// Returns the version bytes of serialized extended keys.
    fn to_extended_key_versions() -> Bip32Versions;

    /// Returns the network of the given extended key version.
    fn from_extended_key_version(version: u32) -> Result<Self, NetworkError>;
}

/// Represents the version byte pair prefixed to serialized BIP32 extended keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Bip32Versions {
    /// The version bytes of a serialized extended public key.
    pub public: u32,
    /// The version bytes of a serialized extended private key.
    pub private: u32,
}

impl Bip32Versions {
    /// Returns the extended public key version in the big-endian form it is serialized in.
    pub fn public_bytes(&self) -> [u8; 4] {
        self.public.to_be_bytes()
    }

    /// Returns the extended private key version in the big-endian form it is serialized in.
    pub fn private_bytes(&self) -> [u8; 4] {
        self.private.to_be_bytes()
    }
}

#[derive(Debug, Fail)]
pub enum NetworkError {
    #[fail(display = "invalid address prefix: {:#04x}", _0)]
    InvalidAddressPrefix(u8),

    #[fail(display = "invalid extended key version: {:#010x}", _0)]
    InvalidExtendedKeyVersion(u32),

    #[fail(display = "invalid network: {}", _0)]
    InvalidNetwork(String),

    #[fail(display = "invalid wif prefix: {:#04x}", _0)]
    InvalidWifPrefix(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_byte_order() {
        let versions = Bip32Versions {
            public: 0x0488_b21e,
            private: 0x0488_ade4,
        };
        assert_eq!([0x04, 0x88, 0xb2, 0x1e], versions.public_bytes());
        assert_eq!([0x04, 0x88, 0xad, 0xe4], versions.private_bytes());
    }
}
