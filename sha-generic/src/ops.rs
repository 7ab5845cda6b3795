//! Word backends.
//!
//! The hash algorithms never touch a word directly: every AND, rotate or
//! modular add goes through a [`WordOps`] implementation. [`Native`] runs
//! them as machine arithmetic on `u8`, `u32` and `u64`. Another backend
//! can give `Word` a different meaning, for example a symbolic value that
//! records the operation instead of computing it, and the round functions,
//! schedules and engine above it stay untouched.

use core::{fmt, marker::PhantomData};

/// Fixed-width unsigned integer a backend can lift into a word.
pub trait Literal: Copy + Default + Eq + fmt::Debug + 'static {
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;

    /// Reads a big-endian value from exactly `Self::BYTES` bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Writes `self` big-endian into exactly `Self::BYTES` bytes.
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_literal {
    ($($t:ty),+) => {
        $(
            impl Literal for $t {
                const BITS: u32 = <$t>::BITS;
                const BYTES: usize = core::mem::size_of::<$t>();

                #[inline]
                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; core::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_be_bytes(buf)
                }

                #[inline]
                fn write_be(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }
            }
        )+
    };
}

impl_literal!(u8, u32, u64);

/// Capability set the hash algorithms are written against.
///
/// Implementations must be pure: no operation may depend on anything but
/// its arguments. Shift, rotate and bit positions must lie in
/// `0..Self::Literal::BITS`; passing anything else is a contract violation
/// and backends are expected to reject it rather than wrap the amount.
pub trait WordOps {
    /// Opaque word value.
    type Word: Clone;
    /// Opaque boolean value, produced by [`WordOps::test_bit`].
    type Bool: Clone;
    /// Concrete integer accepted by [`WordOps::constant`]. Its width is the
    /// word width.
    type Literal: Literal;

    /// Bitwise AND.
    fn and(x: &Self::Word, y: &Self::Word) -> Self::Word;
    /// Bitwise OR.
    fn or(x: &Self::Word, y: &Self::Word) -> Self::Word;
    /// Bitwise XOR.
    fn xor(x: &Self::Word, y: &Self::Word) -> Self::Word;
    /// Bitwise complement.
    fn not(x: &Self::Word) -> Self::Word;
    /// Addition modulo `2^BITS`.
    fn add(x: &Self::Word, y: &Self::Word) -> Self::Word;
    /// Multiplication modulo `2^BITS`.
    fn mul(x: &Self::Word, y: &Self::Word) -> Self::Word;
    /// Two's complement negation.
    fn negate(x: &Self::Word) -> Self::Word;
    /// Left shift by `n` bits.
    fn shl(x: &Self::Word, n: u32) -> Self::Word;
    /// Right shift by `n` bits.
    fn shr(x: &Self::Word, n: u32) -> Self::Word;
    /// Left rotation by `n` bits.
    fn rotl(x: &Self::Word, n: u32) -> Self::Word;
    /// Right rotation by `n` bits.
    fn rotr(x: &Self::Word, n: u32) -> Self::Word;
    /// Word holding the literal `value`.
    fn constant(value: Self::Literal) -> Self::Word;
    /// Whether bit `n` (0 is least significant) is set.
    fn test_bit(x: &Self::Word, n: u32) -> Self::Bool;
    /// `x` when `b` holds, otherwise `y`.
    fn select(b: &Self::Bool, x: &Self::Word, y: &Self::Word) -> Self::Word;
    /// All-ones word when `b` holds, otherwise zero.
    fn bitmask(b: &Self::Bool) -> Self::Word;
    /// Logical AND.
    fn logical_and(a: &Self::Bool, b: &Self::Bool) -> Self::Bool;
    /// Logical OR.
    fn logical_or(a: &Self::Bool, b: &Self::Bool) -> Self::Bool;
    /// Logical NOT.
    fn logical_not(a: &Self::Bool) -> Self::Bool;
    /// Table entry at `index`.
    fn lookup(table: &[Self::Word], index: usize) -> Self::Word;

    /// Multiplication by `x` in GF(2^BITS) reduced by `poly`.
    fn xtime(a: &Self::Word, poly: &Self::Word) -> Self::Word {
        let carry = Self::test_bit(a, Self::Literal::BITS - 1);
        let doubled = Self::shl(a, 1);
        Self::select(&carry, &Self::xor(&doubled, poly), &doubled)
    }

    /// Multiplication in GF(2^BITS) reduced by `poly`.
    ///
    /// Runs a fixed `BITS` iterations so that backends whose words have no
    /// concrete value can still use it.
    fn gf_mul(x: &Self::Word, y: &Self::Word, poly: &Self::Word) -> Self::Word {
        let mut acc = Self::constant(Self::Literal::default());
        let mut x = x.clone();
        for n in 0..Self::Literal::BITS {
            let mask = Self::bitmask(&Self::test_bit(y, n));
            acc = Self::xor(&acc, &Self::and(&x, &mask));
            x = Self::xtime(&x, poly);
        }
        acc
    }
}

/// Machine-integer backend.
///
/// Out-of-range shift, rotate and bit positions panic.
pub struct Native<W>(PhantomData<W>);

impl<W> fmt::Debug for Native<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Native")
    }
}

macro_rules! impl_native {
    ($($t:ty),+) => {
        $(
            impl WordOps for Native<$t> {
                type Word = $t;
                type Bool = bool;
                type Literal = $t;

                #[inline(always)]
                fn and(x: &$t, y: &$t) -> $t {
                    x & y
                }

                #[inline(always)]
                fn or(x: &$t, y: &$t) -> $t {
                    x | y
                }

                #[inline(always)]
                fn xor(x: &$t, y: &$t) -> $t {
                    x ^ y
                }

                #[inline(always)]
                fn not(x: &$t) -> $t {
                    !x
                }

                #[inline(always)]
                fn add(x: &$t, y: &$t) -> $t {
                    x.wrapping_add(*y)
                }

                #[inline(always)]
                fn mul(x: &$t, y: &$t) -> $t {
                    x.wrapping_mul(*y)
                }

                #[inline(always)]
                fn negate(x: &$t) -> $t {
                    x.wrapping_neg()
                }

                #[inline(always)]
                fn shl(x: &$t, n: u32) -> $t {
                    assert!(n < <$t>::BITS, "shift amount out of range");
                    x << n
                }

                #[inline(always)]
                fn shr(x: &$t, n: u32) -> $t {
                    assert!(n < <$t>::BITS, "shift amount out of range");
                    x >> n
                }

                #[inline(always)]
                fn rotl(x: &$t, n: u32) -> $t {
                    assert!(n < <$t>::BITS, "rotate amount out of range");
                    x.rotate_left(n)
                }

                #[inline(always)]
                fn rotr(x: &$t, n: u32) -> $t {
                    assert!(n < <$t>::BITS, "rotate amount out of range");
                    x.rotate_right(n)
                }

                #[inline(always)]
                fn constant(value: $t) -> $t {
                    value
                }

                #[inline(always)]
                fn test_bit(x: &$t, n: u32) -> bool {
                    assert!(n < <$t>::BITS, "bit index out of range");
                    (x >> n) & 1 == 1
                }

                #[inline(always)]
                fn select(b: &bool, x: &$t, y: &$t) -> $t {
                    if *b {
                        *x
                    } else {
                        *y
                    }
                }

                #[inline(always)]
                fn bitmask(b: &bool) -> $t {
                    if *b {
                        <$t>::MAX
                    } else {
                        0
                    }
                }

                #[inline(always)]
                fn logical_and(a: &bool, b: &bool) -> bool {
                    *a && *b
                }

                #[inline(always)]
                fn logical_or(a: &bool, b: &bool) -> bool {
                    *a || *b
                }

                #[inline(always)]
                fn logical_not(a: &bool) -> bool {
                    !*a
                }

                #[inline(always)]
                fn lookup(table: &[$t], index: usize) -> $t {
                    table[index]
                }
            }
        )+
    };
}

impl_native!(u8, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    type N8 = Native<u8>;
    type N32 = Native<u32>;
    type N64 = Native<u64>;

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(N32::add(&u32::MAX, &2), 1);
        assert_eq!(N8::mul(&0x80, &2), 0);
        assert_eq!(N64::negate(&1), u64::MAX);
        assert_eq!(N32::not(&0), u32::MAX);
    }

    #[test]
    fn rotations() {
        assert_eq!(N32::rotr(&1, 1), 0x8000_0000);
        assert_eq!(N32::rotl(&0x8000_0000, 1), 1);
        assert_eq!(N64::rotr(&0x0123_4567_89ab_cdef, 0), 0x0123_4567_89ab_cdef);
        assert_eq!(N64::rotl(&0xf000_0000_0000_0000, 4), 0xf);
        assert_eq!(N8::rotr(&0b0000_0011, 1), 0b1000_0001);
    }

    #[test]
    fn shifts() {
        assert_eq!(N32::shl(&0xffff_ffff, 31), 0x8000_0000);
        assert_eq!(N64::shr(&u64::MAX, 63), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn shift_by_width_rejected() {
        N32::shr(&1, 32);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rotate_by_width_rejected() {
        N64::rotl(&1, 64);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bit_past_width_rejected() {
        N8::test_bit(&1, 8);
    }

    #[test]
    fn booleans() {
        assert!(N32::test_bit(&0b100, 2));
        assert!(!N32::test_bit(&0b100, 1));
        assert_eq!(N32::bitmask(&true), u32::MAX);
        assert_eq!(N64::bitmask(&false), 0);
        assert_eq!(N8::select(&true, &1, &2), 1);
        assert_eq!(N8::select(&false, &1, &2), 2);
        assert!(N8::logical_or(&false, &true));
        assert!(!N8::logical_and(&false, &true));
        assert!(N8::logical_not(&false));
    }

    #[test]
    fn lookup_reads_table() {
        let table = [7u32, 11, 13];
        assert_eq!(N32::lookup(&table, 1), 11);
    }

    #[test]
    fn gf256_multiplication() {
        // FIPS 197 §4.2: {57} • {83} = {c1}, {57} • {13} = {fe}
        assert_eq!(N8::xtime(&0x57, &0x1b), 0xae);
        assert_eq!(N8::xtime(&0xae, &0x1b), 0x47);
        assert_eq!(N8::gf_mul(&0x57, &0x83, &0x1b), 0xc1);
        assert_eq!(N8::gf_mul(&0x57, &0x13, &0x1b), 0xfe);
        assert_eq!(N8::gf_mul(&0x57, &0x01, &0x1b), 0x57);
    }

    #[test]
    fn literal_round_trip_bytes() {
        let mut out = [0u8; 4];
        0x0102_0304u32.write_be(&mut out);
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(u64::from_be_slice(&[0, 0, 0, 0, 0, 0, 1, 0]), 0x100);
    }
}
