//! The engine over a backend whose words are not machine integers.

use sha_generic::{
    pad_message,
    variant::{Sha1, Sha224, Sha256},
    BlockSize, Engine, LiteralOf, Native, Variant, WordOps,
};

const WIDTH: usize = 32;

/// 32-bit words as vectors of bits, least significant first. Addition is a
/// ripple-carry adder and multiplication is shift-and-add, so nothing here
/// leans on the integer arithmetic the native backend uses.
struct Bits32;

impl Bits32 {
    fn value(x: &[bool]) -> u32 {
        x.iter()
            .enumerate()
            .fold(0, |acc, (i, &bit)| acc | (u32::from(bit) << i))
    }

    fn map2(x: &[bool], y: &[bool], f: impl Fn(bool, bool) -> bool) -> Vec<bool> {
        x.iter().zip(y).map(|(&a, &b)| f(a, b)).collect()
    }
}

impl WordOps for Bits32 {
    type Word = Vec<bool>;
    type Bool = bool;
    type Literal = u32;

    fn and(x: &Vec<bool>, y: &Vec<bool>) -> Vec<bool> {
        Self::map2(x, y, |a, b| a & b)
    }

    fn or(x: &Vec<bool>, y: &Vec<bool>) -> Vec<bool> {
        Self::map2(x, y, |a, b| a | b)
    }

    fn xor(x: &Vec<bool>, y: &Vec<bool>) -> Vec<bool> {
        Self::map2(x, y, |a, b| a ^ b)
    }

    fn not(x: &Vec<bool>) -> Vec<bool> {
        x.iter().map(|&a| !a).collect()
    }

    fn add(x: &Vec<bool>, y: &Vec<bool>) -> Vec<bool> {
        let mut carry = false;
        x.iter()
            .zip(y)
            .map(|(&a, &b)| {
                let sum = a ^ b ^ carry;
                carry = (a & b) | (carry & (a ^ b));
                sum
            })
            .collect()
    }

    fn mul(x: &Vec<bool>, y: &Vec<bool>) -> Vec<bool> {
        let mut acc = vec![false; WIDTH];
        for (n, &bit) in y.iter().enumerate() {
            if bit {
                acc = Self::add(&acc, &Self::shl(x, n as u32));
            }
        }
        acc
    }

    fn negate(x: &Vec<bool>) -> Vec<bool> {
        Self::add(&Self::not(x), &Self::constant(1))
    }

    fn shl(x: &Vec<bool>, n: u32) -> Vec<bool> {
        assert!(n < 32, "shift amount out of range");
        let n = n as usize;
        (0..WIDTH).map(|i| i >= n && x[i - n]).collect()
    }

    fn shr(x: &Vec<bool>, n: u32) -> Vec<bool> {
        assert!(n < 32, "shift amount out of range");
        let n = n as usize;
        (0..WIDTH).map(|i| i + n < WIDTH && x[i + n]).collect()
    }

    fn rotl(x: &Vec<bool>, n: u32) -> Vec<bool> {
        assert!(n < 32, "rotate amount out of range");
        let n = n as usize;
        (0..WIDTH).map(|i| x[(i + WIDTH - n) % WIDTH]).collect()
    }

    fn rotr(x: &Vec<bool>, n: u32) -> Vec<bool> {
        assert!(n < 32, "rotate amount out of range");
        let n = n as usize;
        (0..WIDTH).map(|i| x[(i + n) % WIDTH]).collect()
    }

    fn constant(value: u32) -> Vec<bool> {
        (0..WIDTH).map(|i| (value >> i) & 1 == 1).collect()
    }

    fn test_bit(x: &Vec<bool>, n: u32) -> bool {
        assert!(n < 32, "bit index out of range");
        x[n as usize]
    }

    fn select(b: &bool, x: &Vec<bool>, y: &Vec<bool>) -> Vec<bool> {
        if *b {
            x.clone()
        } else {
            y.clone()
        }
    }

    fn bitmask(b: &bool) -> Vec<bool> {
        vec![*b; WIDTH]
    }

    fn logical_and(a: &bool, b: &bool) -> bool {
        *a && *b
    }

    fn logical_or(a: &bool, b: &bool) -> bool {
        *a || *b
    }

    fn logical_not(a: &bool) -> bool {
        !*a
    }

    fn lookup(table: &[Vec<bool>], index: usize) -> Vec<bool> {
        table[index].clone()
    }
}

fn samples() -> Vec<u32> {
    let mut out = vec![0, 1, 0x8000_0000, u32::MAX, 0xdead_beef];
    let mut x = 0x9e37_79b9u32;
    for _ in 0..32 {
        out.push(x);
        x = x.wrapping_mul(0x0019_660d).wrapping_add(0x3c6e_f35f);
    }
    out
}

#[test]
fn bit_backend_agrees_with_native() {
    type N = Native<u32>;
    let samples = samples();
    let bits = |v: u32| Bits32::constant(v);

    for &x in &samples {
        assert_eq!(Bits32::value(&bits(x)), x);
        assert_eq!(Bits32::value(&Bits32::not(&bits(x))), N::not(&x));
        assert_eq!(Bits32::value(&Bits32::negate(&bits(x))), N::negate(&x));
        for n in [0u32, 1, 7, 13, 31].iter().copied() {
            assert_eq!(Bits32::value(&Bits32::shl(&bits(x), n)), N::shl(&x, n));
            assert_eq!(Bits32::value(&Bits32::shr(&bits(x), n)), N::shr(&x, n));
            assert_eq!(Bits32::value(&Bits32::rotl(&bits(x), n)), N::rotl(&x, n));
            assert_eq!(Bits32::value(&Bits32::rotr(&bits(x), n)), N::rotr(&x, n));
            assert_eq!(Bits32::test_bit(&bits(x), n), N::test_bit(&x, n));
        }
        for &y in &samples {
            assert_eq!(Bits32::value(&Bits32::add(&bits(x), &bits(y))), N::add(&x, &y));
            assert_eq!(Bits32::value(&Bits32::mul(&bits(x), &bits(y))), N::mul(&x, &y));
            assert_eq!(Bits32::value(&Bits32::xor(&bits(x), &bits(y))), N::xor(&x, &y));
        }
    }
}

#[test]
fn gf_mul_on_bit_backend() {
    // x^32 + x^7 + x^3 + x^2 + 1
    let poly = 0x0000_008d;
    for &x in &samples()[..8] {
        for &y in &samples()[..8] {
            let ours = Bits32::gf_mul(
                &Bits32::constant(x),
                &Bits32::constant(y),
                &Bits32::constant(poly),
            );
            assert_eq!(Bits32::value(&ours), Native::<u32>::gf_mul(&x, &y, &poly));
        }
    }
}

fn hash_both<V>(message: &[u8]) -> (Vec<u32>, Vec<u32>)
where
    V: Variant,
    Native<u32>: WordOps<Literal = LiteralOf<V>, Word = u32>,
    Bits32: WordOps<Literal = LiteralOf<V>, Word = Vec<bool>>,
{
    let padded = pad_message(BlockSize::Block512, message).unwrap();

    let mut native = Engine::<V, Native<u32>>::new();
    native.msg_bytes(&padded).unwrap();
    native.compute_hash().unwrap();

    let mut bits = Engine::<V, Bits32>::new();
    bits.msg_bytes(&padded).unwrap();
    bits.compute_hash().unwrap();

    let bit_digest = bits.digest().unwrap().iter().map(|w| Bits32::value(w)).collect();
    (native.digest().unwrap().to_vec(), bit_digest)
}

#[test]
fn engine_runs_on_bit_backend() {
    let (native, bits) = hash_both::<Sha256>(b"abc");
    assert_eq!(
        bits,
        [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    );
    assert_eq!(native, bits);

    let (native, bits) = hash_both::<Sha1>(b"abc");
    assert_eq!(bits, [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
    assert_eq!(native, bits);

    let (native, bits) =
        hash_both::<Sha224>(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
    assert_eq!(bits.len(), 7);
    assert_eq!(native, bits);
}
