//! The [SHA-1 and SHA-2][1] hash functions of FIPS 180-4, written once.
//!
//! SHA-1, SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224 and SHA-512/256
//! share a single Merkle–Damgård [`Engine`]. Each variant only supplies its
//! initial hash value, its compression family (schedule recurrence and round
//! body) and the width of the digest it exposes. Every word operation the
//! algorithm performs goes through a [`WordOps`] backend, so the same code
//! can run over something other than machine integers.
//!
//! # Usage
//!
//! The [`Digest`] front end:
//!
//! ```rust
//! use sha_generic::{Sha256, Digest};
//! use hex_literal::hex;
//!
//! // create a SHA-256 hasher instance
//! let mut hasher = Sha256::new();
//!
//! // process input message
//! hasher.update(b"abc");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 32]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("
//!     ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
//! ")[..]);
//! ```
//!
//! The engine itself, fed with padded words:
//!
//! ```rust
//! use sha_generic::{compute_padding, BlockSize, Sha1Engine};
//!
//! let mut message = b"abc".to_vec();
//! message.extend(compute_padding(BlockSize::Block512, 24).unwrap());
//!
//! let mut engine = Sha1Engine::new();
//! engine.msg_bytes(&message).unwrap();
//! engine.compute_hash().unwrap();
//! assert_eq!(
//!     engine.digest().unwrap(),
//!     &[0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d][..],
//! );
//! ```
//!
//! [1]: https://csrc.nist.gov/publications/detail/fips/180/4/final

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

pub mod compress;
mod consts;
mod engine;
mod error;
pub mod functions;
mod hasher;
pub mod ops;
mod padding;
pub mod variant;

pub use crate::engine::Engine;
pub use crate::error::Error;
pub use crate::hasher::{Hasher, HasherCore};
pub use crate::ops::{Literal, Native, WordOps};
pub use crate::padding::{compute_padding, is_padding_needed, pad_message, BlockSize};
pub use crate::variant::{LiteralOf, Variant};

/// SHA-1 hasher.
pub type Sha1 = Hasher<variant::Sha1>;
/// SHA-224 hasher.
pub type Sha224 = Hasher<variant::Sha224>;
/// SHA-256 hasher.
pub type Sha256 = Hasher<variant::Sha256>;
/// SHA-384 hasher.
pub type Sha384 = Hasher<variant::Sha384>;
/// SHA-512 hasher.
pub type Sha512 = Hasher<variant::Sha512>;
/// SHA-512/224 hasher.
#[allow(non_camel_case_types)]
pub type Sha512_224 = Hasher<variant::Sha512_224>;
/// SHA-512/256 hasher.
#[allow(non_camel_case_types)]
pub type Sha512_256 = Hasher<variant::Sha512_256>;

/// SHA-1 engine on machine integers.
pub type Sha1Engine = Engine<variant::Sha1, Native<u32>>;
/// SHA-224 engine on machine integers.
pub type Sha224Engine = Engine<variant::Sha224, Native<u32>>;
/// SHA-256 engine on machine integers.
pub type Sha256Engine = Engine<variant::Sha256, Native<u32>>;
/// SHA-384 engine on machine integers.
pub type Sha384Engine = Engine<variant::Sha384, Native<u64>>;
/// SHA-512 engine on machine integers.
pub type Sha512Engine = Engine<variant::Sha512, Native<u64>>;
/// SHA-512/224 engine on machine integers.
#[allow(non_camel_case_types)]
pub type Sha512_224Engine = Engine<variant::Sha512_224, Native<u64>>;
/// SHA-512/256 engine on machine integers.
#[allow(non_camel_case_types)]
pub type Sha512_256Engine = Engine<variant::Sha512_256, Native<u64>>;
