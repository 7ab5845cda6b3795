//! Round functions (FIPS 180-4 §4.1).
//!
//! Written once against [`WordOps`]; the 32-bit and 64-bit families differ
//! only in their rotate and shift amounts.

use crate::ops::WordOps;

type Amounts = (u32, u32, u32);

// FIPS 180-4 4.1.2
const BIG_SIGMA0_256: Amounts = (2, 13, 22);
const BIG_SIGMA1_256: Amounts = (6, 11, 25);
const SMALL_SIGMA0_256: Amounts = (7, 18, 3);
const SMALL_SIGMA1_256: Amounts = (17, 19, 10);

// FIPS 180-4 4.1.3
const BIG_SIGMA0_512: Amounts = (28, 34, 39);
const BIG_SIGMA1_512: Amounts = (14, 18, 41);
const SMALL_SIGMA0_512: Amounts = (1, 8, 7);
const SMALL_SIGMA1_512: Amounts = (19, 61, 6);

/// `Ch(x, y, z) = (x ∧ y) ⊕ (¬x ∧ z)`
#[inline(always)]
pub fn ch<F: WordOps>(x: &F::Word, y: &F::Word, z: &F::Word) -> F::Word {
    F::xor(&F::and(x, y), &F::and(&F::not(x), z))
}

/// `Parity(x, y, z) = x ⊕ y ⊕ z`
#[inline(always)]
pub fn parity<F: WordOps>(x: &F::Word, y: &F::Word, z: &F::Word) -> F::Word {
    F::xor(&F::xor(x, y), z)
}

/// `Maj(x, y, z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)`
#[inline(always)]
pub fn maj<F: WordOps>(x: &F::Word, y: &F::Word, z: &F::Word) -> F::Word {
    F::xor(&F::xor(&F::and(x, y), &F::and(x, z)), &F::and(y, z))
}

/// SHA-1 `f_t`: [`ch`] for rounds 0 to 19, [`maj`] for 40 to 59 and
/// [`parity`] otherwise.
#[inline(always)]
pub fn sha1_f<F: WordOps>(t: usize, x: &F::Word, y: &F::Word, z: &F::Word) -> F::Word {
    match t {
        0..=19 => ch::<F>(x, y, z),
        40..=59 => maj::<F>(x, y, z),
        _ => parity::<F>(x, y, z),
    }
}

#[inline(always)]
fn rotate_mix<F: WordOps>(x: &F::Word, (a, b, c): Amounts) -> F::Word {
    F::xor(&F::xor(&F::rotr(x, a), &F::rotr(x, b)), &F::rotr(x, c))
}

#[inline(always)]
fn shift_mix<F: WordOps>(x: &F::Word, (a, b, c): Amounts) -> F::Word {
    F::xor(&F::xor(&F::rotr(x, a), &F::rotr(x, b)), &F::shr(x, c))
}

/// `Σ0` for SHA-224/256.
#[inline(always)]
pub fn big_sigma0_256<F: WordOps>(x: &F::Word) -> F::Word {
    rotate_mix::<F>(x, BIG_SIGMA0_256)
}

/// `Σ1` for SHA-224/256.
#[inline(always)]
pub fn big_sigma1_256<F: WordOps>(x: &F::Word) -> F::Word {
    rotate_mix::<F>(x, BIG_SIGMA1_256)
}

/// `σ0` for SHA-224/256.
#[inline(always)]
pub fn small_sigma0_256<F: WordOps>(x: &F::Word) -> F::Word {
    shift_mix::<F>(x, SMALL_SIGMA0_256)
}

/// `σ1` for SHA-224/256.
#[inline(always)]
pub fn small_sigma1_256<F: WordOps>(x: &F::Word) -> F::Word {
    shift_mix::<F>(x, SMALL_SIGMA1_256)
}

/// `Σ0` for the SHA-512 family.
#[inline(always)]
pub fn big_sigma0_512<F: WordOps>(x: &F::Word) -> F::Word {
    rotate_mix::<F>(x, BIG_SIGMA0_512)
}

/// `Σ1` for the SHA-512 family.
#[inline(always)]
pub fn big_sigma1_512<F: WordOps>(x: &F::Word) -> F::Word {
    rotate_mix::<F>(x, BIG_SIGMA1_512)
}

/// `σ0` for the SHA-512 family.
#[inline(always)]
pub fn small_sigma0_512<F: WordOps>(x: &F::Word) -> F::Word {
    shift_mix::<F>(x, SMALL_SIGMA0_512)
}

/// `σ1` for the SHA-512 family.
#[inline(always)]
pub fn small_sigma1_512<F: WordOps>(x: &F::Word) -> F::Word {
    shift_mix::<F>(x, SMALL_SIGMA1_512)
}
