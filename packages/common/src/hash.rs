//! Hash helpers for signer authorization
//!
//! The trusted signer is an ordinary Ethereum key, so everything here mirrors
//! what standard EVM tooling produces:
//!
//! - `keccak256` over raw bytes
//! - 32-byte words, big-endian and left-padded like `abi.encode`
//! - the EIP-191 personal message digest that `signMessage` signs
//! - address derivation from an uncompressed secp256k1 public key

use tiny_keccak::{Hasher, Keccak};

/// Length of an Ethereum address in bytes
pub const ETH_ADDRESS_LENGTH: usize = 20;

/// Length of an uncompressed SEC1 secp256k1 public key (0x04 || x || y)
pub const UNCOMPRESSED_PUBKEY_LENGTH: usize = 65;

const EIP191_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Digest signed by `personal_sign` / ethers `signMessage(arrayify(hash))`
///
/// `keccak256("\x19Ethereum Signed Message:\n32" || hash)`
pub fn eth_signed_message_hash(hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 28 + 32];
    data[..28].copy_from_slice(EIP191_PREFIX);
    data[28..].copy_from_slice(hash);
    keccak256(&data)
}

/// Encode a u64 as a uint256 word (big-endian, left-padded)
pub fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a u128 as a uint256 word (big-endian, left-padded)
pub fn u128_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a variable-length string as a single word (its keccak256 hash)
pub fn string_word(value: &str) -> [u8; 32] {
    keccak256(value.as_bytes())
}

/// Derive the Ethereum address of an uncompressed secp256k1 public key
///
/// Returns `None` unless the key is 65 bytes starting with the 0x04 tag.
pub fn eth_address_from_pubkey(pubkey: &[u8]) -> Option<[u8; ETH_ADDRESS_LENGTH]> {
    if pubkey.len() != UNCOMPRESSED_PUBKEY_LENGTH || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; ETH_ADDRESS_LENGTH];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Format an address as lowercase `0x`-prefixed hex
pub fn eth_address_to_hex(address: &[u8; ETH_ADDRESS_LENGTH]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Parse a `0x`-prefixed (or bare) hex Ethereum address, any letter case
pub fn parse_eth_address(value: &str) -> Result<[u8; ETH_ADDRESS_LENGTH], &'static str> {
    let stripped = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if stripped.len() != ETH_ADDRESS_LENGTH * 2 {
        return Err("Invalid address length: expected 40 hex characters");
    }

    let mut address = [0u8; ETH_ADDRESS_LENGTH];
    hex::decode_to_slice(stripped, &mut address).map_err(|_| "Invalid hex character")?;
    if address == [0u8; ETH_ADDRESS_LENGTH] {
        return Err("Zero address is not a valid signer");
    }
    Ok(address)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
