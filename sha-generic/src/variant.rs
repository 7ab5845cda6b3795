//! Variant descriptors.
//!
//! A variant is a compression family plus its initial hash value and the
//! width of the digest it exposes. Truncating variants (SHA-224, SHA-384,
//! SHA-512/224, SHA-512/256) run the full eight-word compression and expose
//! only a prefix of the state.

use alloc::vec::Vec;

use digest::{
    consts::{U20, U28, U32, U48, U64},
    generic_array::ArrayLength,
    typenum::Unsigned,
};

use crate::compress::{Compression, Sha1Compression, Sha256Compression, Sha512Compression};
use crate::consts::{H1, H224, H256, H384, H512, H512_224, H512_256};
use crate::ops::{Literal, WordOps};
use crate::padding::BlockSize;

/// Word width of variant `V`.
pub type LiteralOf<V> = <<V as Variant>::Compression as Compression>::Literal;

/// Fixed parameters of one SHA variant.
pub trait Variant {
    /// Schedule and rounds shared with the other variants of this width.
    type Compression: Compression;
    /// Digest length in bytes.
    type OutputSize: ArrayLength<u8> + 'static;

    /// Algorithm name as written in FIPS 180-4.
    const NAME: &'static str;
    /// Initial hash value.
    const IV: [LiteralOf<Self>; 8];

    /// Digest length in bytes.
    const OUTPUT_BYTES: usize = <Self::OutputSize as Unsigned>::USIZE;
    /// Block size of the family.
    const BLOCK: BlockSize = <Self::Compression as Compression>::BLOCK;

    /// Snapshot of `state` as seen by the caller.
    ///
    /// The default keeps the leading words that cover [`Self::OUTPUT_BYTES`]
    /// and clears the low bits of the last word when the digest ends inside
    /// it, as SHA-512/224 does.
    fn digest_view<F>(state: &[F::Word; 8]) -> Vec<F::Word>
    where
        F: WordOps<Literal = LiteralOf<Self>>,
    {
        let word_bits = <LiteralOf<Self> as Literal>::BITS as usize;
        let output_bits = 8 * Self::OUTPUT_BYTES;
        let words = (output_bits + word_bits - 1) / word_bits;

        let mut view = state[..words].to_vec();
        let spare = (words * word_bits - output_bits) as u32;
        if spare != 0 {
            let ones = F::not(&F::constant(<LiteralOf<Self> as Default>::default()));
            let mask = F::shl(&ones, spare);
            let last = &mut view[words - 1];
            *last = F::and(&*last, &mask);
        }
        view
    }
}

macro_rules! variant {
    ($(#[$attr:meta])* $name:ident, $alg:expr, $compression:ty, $literal:ty, $output:ty, $iv:expr) => {
        $(#[$attr])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Variant for $name {
            type Compression = $compression;
            type OutputSize = $output;

            const NAME: &'static str = $alg;
            const IV: [$literal; 8] = $iv;
        }
    };
}

variant!(
    /// SHA-1. Only five of the eight state words are used.
    Sha1, "SHA-1", Sha1Compression, u32, U20, H1
);
variant!(
    /// SHA-224: SHA-256 rounds, seven-word digest.
    Sha224, "SHA-224", Sha256Compression, u32, U28, H224
);
variant!(
    /// SHA-256.
    Sha256, "SHA-256", Sha256Compression, u32, U32, H256
);
variant!(
    /// SHA-384: SHA-512 rounds, six-word digest.
    Sha384, "SHA-384", Sha512Compression, u64, U48, H384
);
variant!(
    /// SHA-512.
    Sha512, "SHA-512", Sha512Compression, u64, U64, H512
);
variant!(
    /// SHA-512/224: SHA-512 rounds, 224-bit digest.
    Sha512_224, "SHA-512/224", Sha512Compression, u64, U28, H512_224
);
variant!(
    /// SHA-512/256: SHA-512 rounds, four-word digest.
    Sha512_256, "SHA-512/256", Sha512Compression, u64, U32, H512_256
);
