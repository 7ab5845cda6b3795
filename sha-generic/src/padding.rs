//! Message padding (FIPS 180-4 §5.1).
//!
//! The message is followed by a single `1` bit, zero bits up to the length
//! field, and the big-endian bit length. The length field is always written
//! as 64 bits: the 1024-bit family reserves 128 bits for it and gets eight
//! zero bytes in front, so every variant is limited to messages shorter
//! than 2^64 bits.

use alloc::vec::Vec;
use core::convert::TryFrom;

use crate::Error;

/// Block size of a variant family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockSize {
    /// SHA-1, SHA-224 and SHA-256.
    Block512,
    /// SHA-384, SHA-512, SHA-512/224 and SHA-512/256.
    Block1024,
}

impl BlockSize {
    /// Block size in bits.
    pub const fn bits(self) -> u64 {
        match self {
            BlockSize::Block512 => 512,
            BlockSize::Block1024 => 1024,
        }
    }

    /// Block size in bytes.
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Bits reserved for the length field, twice the word width.
    pub const fn length_field_bits(self) -> u64 {
        self.bits() / 8
    }
}

/// Whether a message of `bit_len` bits must be padded before hashing, that
/// is, it is empty or not a whole number of blocks.
pub fn is_padding_needed(block: BlockSize, bit_len: u64) -> bool {
    bit_len == 0 || bit_len % block.bits() != 0
}

/// Padding suffix for a message of `bit_len` bits.
///
/// `bit_len` must be a multiple of 8, since the suffix is emitted as whole
/// bytes starting with `0x80`.
pub fn compute_padding(block: BlockSize, bit_len: u64) -> Result<Vec<u8>, Error> {
    if bit_len % 8 != 0 {
        return Err(Error::PartialByte);
    }

    let block_bits = block.bits();
    let stop = block_bits - block.length_field_bits();
    // bits used in the last block once the `0x80` byte is in
    let used = (bit_len % block_bits + 8) % block_bits;
    let zero_bytes = ((stop + block_bits - used) % block_bits / 8) as usize;

    let mut suffix = Vec::with_capacity(1 + zero_bytes + (block.length_field_bits() / 8) as usize);
    suffix.push(0x80);
    suffix.resize(1 + zero_bytes, 0);
    if block == BlockSize::Block1024 {
        suffix.extend_from_slice(&[0u8; 8]);
    }
    suffix.extend_from_slice(&bit_len.to_be_bytes());
    Ok(suffix)
}

/// `message` followed by its padding suffix.
pub fn pad_message(block: BlockSize, message: &[u8]) -> Result<Vec<u8>, Error> {
    let bit_len = u64::try_from(message.len())
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(Error::LengthOverflow)?;
    let suffix = compute_padding(block, bit_len)?;

    let mut padded = Vec::with_capacity(message.len() + suffix.len());
    padded.extend_from_slice(message);
    padded.extend_from_slice(&suffix);
    Ok(padded)
}
