use alloc::vec::Vec;
use core::fmt;

use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, UpdateCore,
    },
    typenum::{IsLess, Le, NonZero, U256},
    HashMarker, Output, Reset,
};

use crate::compress::Compression;
use crate::engine::Engine;
use crate::ops::{Literal, Native, WordOps};
use crate::padding::compute_padding;
use crate::variant::{LiteralOf, Variant};
use crate::Error;

type BlockLen<V> = <<V as Variant>::Compression as Compression>::BlockLen;

/// Core hasher state for variant `V`.
///
/// Whole blocks go straight into an [`Engine`] over the [`Native`] backend;
/// the partial tail stays in the wrapper's block buffer until finalization
/// pads it. Finalizing panics if the message is 2^64 bits or longer.
pub struct HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    engine: Engine<V, Native<LiteralOf<V>>>,
    blocks: u64,
}

/// [`Digest`](digest::Digest) front end for variant `V`.
pub type Hasher<V> = CoreWrapper<HasherCore<V>>;

impl<V> HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    fn bit_len(&self, tail: usize) -> Result<u64, Error> {
        self.blocks
            .checked_mul(V::BLOCK.bytes() as u64)
            .and_then(|bytes| bytes.checked_add(tail as u64))
            .and_then(|bytes| bytes.checked_mul(8))
            .ok_or(Error::LengthOverflow)
    }

    fn finish(&mut self, tail: &[u8]) -> Result<Vec<u8>, Error> {
        let padding = compute_padding(V::BLOCK, self.bit_len(tail.len())?)?;
        let mut last = tail.to_vec();
        last.extend_from_slice(&padding);
        self.engine.msg_bytes(&last)?;
        self.engine.compute_hash()?;
        self.engine.digest_bytes()
    }
}

impl<V> HashMarker for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
}

impl<V> BlockSizeUser for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    type BlockSize = BlockLen<V>;
}

impl<V> BufferKindUser for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    type BufferKind = Eager;
}

impl<V> OutputSizeUser for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    type OutputSize = V::OutputSize;
}

impl<V> UpdateCore for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        let width = <LiteralOf<V> as Literal>::BYTES;
        for block in blocks {
            self.engine.msg_input(
                block
                    .chunks_exact(width)
                    .map(<LiteralOf<V> as Literal>::from_be_slice),
            );
        }
        self.blocks = self.blocks.saturating_add(blocks.len() as u64);
    }
}

impl<V> FixedOutputCore for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
    BlockLen<V>: IsLess<U256>,
    Le<BlockLen<V>, U256>: NonZero,
{
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        match self.finish(buffer.get_data()) {
            Ok(digest) => out.copy_from_slice(&digest),
            Err(err) => panic!("{}: {}", V::NAME, err),
        }
    }
}

impl<V> Default for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    #[inline]
    fn default() -> Self {
        Self {
            engine: Engine::new(),
            blocks: 0,
        }
    }
}

impl<V> Reset for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl<V> Clone for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            blocks: self.blocks,
        }
    }
}

impl<V> AlgorithmName for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V> fmt::Debug for HasherCore<V>
where
    V: Variant,
    Native<LiteralOf<V>>: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HasherCore<{}> {{ ... }}", V::NAME)
    }
}
