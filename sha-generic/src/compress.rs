//! Message schedules and round bodies.
//!
//! A [`Compression`] family is shared by every variant of the same word
//! width: SHA-224 and SHA-256 run [`Sha256Compression`], SHA-384, SHA-512
//! and both SHA-512/t variants run [`Sha512Compression`].

use alloc::vec::Vec;

use digest::{
    consts::{U128, U64},
    generic_array::ArrayLength,
};

use crate::consts::{K1, K32, K64};
use crate::functions::{
    big_sigma0_256, big_sigma0_512, big_sigma1_256, big_sigma1_512, ch, maj, sha1_f,
    small_sigma0_256, small_sigma0_512, small_sigma1_256, small_sigma1_512,
};
use crate::ops::{Literal, WordOps};
use crate::padding::BlockSize;

/// Number of words in one message block, for every family.
pub const BLOCK_WORDS: usize = 16;

/// Working variables `a..h`.
pub type WorkingVars<W> = [W; 8];

/// Schedule recurrence and round body of one family.
pub trait Compression {
    /// Word width of the family.
    type Literal: Literal;
    /// Block length in bytes, as a type-level number.
    type BlockLen: ArrayLength<u8> + 'static;

    /// Block size of the family.
    const BLOCK: BlockSize;
    /// Rounds per block, which is also the schedule length.
    const ROUNDS: usize;

    /// Extends `w`, which holds the 16 words of one block, to
    /// [`Self::ROUNDS`] entries.
    fn expand<F: WordOps<Literal = Self::Literal>>(w: &mut Vec<F::Word>);

    /// Applies round `t` with schedule word `wt` to `v`.
    fn round<F: WordOps<Literal = Self::Literal>>(
        t: usize,
        v: &mut WorkingVars<F::Word>,
        wt: &F::Word,
    );
}

#[inline(always)]
fn sum<F: WordOps>(first: &F::Word, rest: &[&F::Word]) -> F::Word {
    rest.iter().fold(first.clone(), |acc, x| F::add(&acc, *x))
}

/// SHA-1 (FIPS 180-4 §6.1.2).
#[derive(Clone, Copy, Debug)]
pub struct Sha1Compression;

impl Compression for Sha1Compression {
    type Literal = u32;
    type BlockLen = U64;

    const BLOCK: BlockSize = BlockSize::Block512;
    const ROUNDS: usize = 80;

    fn expand<F: WordOps<Literal = Self::Literal>>(w: &mut Vec<F::Word>) {
        for t in BLOCK_WORDS..Self::ROUNDS {
            let mixed = F::xor(&F::xor(&w[t - 3], &w[t - 8]), &F::xor(&w[t - 14], &w[t - 16]));
            w.push(F::rotl(&mixed, 1));
        }
    }

    fn round<F: WordOps<Literal = Self::Literal>>(
        t: usize,
        v: &mut WorkingVars<F::Word>,
        wt: &F::Word,
    ) {
        // only a..e take part; f..h stay at their initial value
        let temp = sum::<F>(
            &F::rotl(&v[0], 5),
            &[
                &sha1_f::<F>(t, &v[1], &v[2], &v[3]),
                &v[4],
                &F::constant(K1[t / 20]),
                wt,
            ],
        );
        v[..5].rotate_right(1);
        v[2] = F::rotl(&v[2], 30);
        v[0] = temp;
    }
}

/// SHA-224 and SHA-256 (FIPS 180-4 §6.2.2).
#[derive(Clone, Copy, Debug)]
pub struct Sha256Compression;

impl Compression for Sha256Compression {
    type Literal = u32;
    type BlockLen = U64;

    const BLOCK: BlockSize = BlockSize::Block512;
    const ROUNDS: usize = 64;

    fn expand<F: WordOps<Literal = Self::Literal>>(w: &mut Vec<F::Word>) {
        for t in BLOCK_WORDS..Self::ROUNDS {
            let next = sum::<F>(
                &small_sigma1_256::<F>(&w[t - 2]),
                &[&w[t - 7], &small_sigma0_256::<F>(&w[t - 15]), &w[t - 16]],
            );
            w.push(next);
        }
    }

    fn round<F: WordOps<Literal = Self::Literal>>(
        t: usize,
        v: &mut WorkingVars<F::Word>,
        wt: &F::Word,
    ) {
        let t1 = sum::<F>(
            &v[7],
            &[
                &big_sigma1_256::<F>(&v[4]),
                &ch::<F>(&v[4], &v[5], &v[6]),
                &F::constant(K32[t]),
                wt,
            ],
        );
        let t2 = F::add(&big_sigma0_256::<F>(&v[0]), &maj::<F>(&v[0], &v[1], &v[2]));
        shift_in::<F>(v, &t1, &t2);
    }
}

/// SHA-384, SHA-512, SHA-512/224 and SHA-512/256 (FIPS 180-4 §6.4.2).
#[derive(Clone, Copy, Debug)]
pub struct Sha512Compression;

impl Compression for Sha512Compression {
    type Literal = u64;
    type BlockLen = U128;

    const BLOCK: BlockSize = BlockSize::Block1024;
    const ROUNDS: usize = 80;

    fn expand<F: WordOps<Literal = Self::Literal>>(w: &mut Vec<F::Word>) {
        for t in BLOCK_WORDS..Self::ROUNDS {
            let next = sum::<F>(
                &small_sigma1_512::<F>(&w[t - 2]),
                &[&w[t - 7], &small_sigma0_512::<F>(&w[t - 15]), &w[t - 16]],
            );
            w.push(next);
        }
    }

    fn round<F: WordOps<Literal = Self::Literal>>(
        t: usize,
        v: &mut WorkingVars<F::Word>,
        wt: &F::Word,
    ) {
        let t1 = sum::<F>(
            &v[7],
            &[
                &big_sigma1_512::<F>(&v[4]),
                &ch::<F>(&v[4], &v[5], &v[6]),
                &F::constant(K64[t]),
                wt,
            ],
        );
        let t2 = F::add(&big_sigma0_512::<F>(&v[0]), &maj::<F>(&v[0], &v[1], &v[2]));
        shift_in::<F>(v, &t1, &t2);
    }
}

/// `h = g, g = f, f = e, e = d + T1, d = c, c = b, b = a, a = T1 + T2`
#[inline(always)]
fn shift_in<F: WordOps>(v: &mut WorkingVars<F::Word>, t1: &F::Word, t2: &F::Word) {
    v.rotate_right(1);
    v[4] = F::add(&v[4], t1);
    v[0] = F::add(t1, t2);
}
