//! Merkle–Damgård driver.

use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::compress::{Compression, WorkingVars, BLOCK_WORDS};
use crate::ops::{Literal, WordOps};
use crate::padding::pad_message;
use crate::variant::{LiteralOf, Variant};
use crate::Error;

/// Hash engine for variant `V` over word backend `F`.
///
/// The engine hashes whatever is in its message buffer, which the caller
/// fills with already padded words (see [`compute_padding`]). Every
/// [`compute_hash`] starts over from the variant's initial hash value;
/// nothing carries over between runs except the buffer itself, which is
/// only emptied by [`clear_message`].
///
/// An engine is not meant to be shared between threads while hashing; use
/// one engine per concurrent computation.
///
/// [`compute_padding`]: crate::compute_padding
/// [`compute_hash`]: Engine::compute_hash
/// [`clear_message`]: Engine::clear_message
pub struct Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>>,
{
    message: Vec<F::Word>,
    state: [F::Word; 8],
    schedule: Vec<F::Word>,
    working: WorkingVars<F::Word>,
    digest: Option<Vec<F::Word>>,
    _variant: PhantomData<V>,
}

impl<V, F> Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>>,
{
    /// Creates an engine with an empty buffer and no digest.
    pub fn new() -> Self {
        Self {
            message: Vec::new(),
            state: Self::initial_state(),
            schedule: Vec::with_capacity(<V::Compression as Compression>::ROUNDS),
            working: Self::initial_state(),
            digest: None,
            _variant: PhantomData,
        }
    }

    fn initial_state() -> [F::Word; 8] {
        V::IV.map(F::constant)
    }

    /// Appends one word to the message buffer.
    pub fn msg_word(&mut self, word: F::Word) {
        self.message.push(word);
    }

    /// Appends words to the message buffer, in order.
    ///
    /// Accepts anything iterable: arrays, vectors, iterators.
    pub fn msg_input<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = F::Word>,
    {
        self.message.extend(words);
    }

    /// Appends `bytes`, read as big-endian words, to the message buffer.
    ///
    /// Nothing is appended unless the slice is a whole number of words.
    pub fn msg_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let width = <LiteralOf<V> as Literal>::BYTES;
        if bytes.len() % width != 0 {
            return Err(Error::PartialWord);
        }
        self.message.extend(
            bytes
                .chunks_exact(width)
                .map(|chunk| F::constant(<LiteralOf<V> as Literal>::from_be_slice(chunk))),
        );
        Ok(())
    }

    /// Empties the message buffer. The last digest stays available.
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Number of words buffered.
    pub fn message_len(&self) -> usize {
        self.message.len()
    }

    /// Whether the buffer holds a non-zero whole number of blocks.
    pub fn is_ready(&self) -> bool {
        self.check_message().is_ok()
    }

    fn check_message(&self) -> Result<(), Error> {
        let words = self.message.len();
        if words == 0 {
            Err(Error::EmptyMessage)
        } else if words % BLOCK_WORDS != 0 {
            Err(Error::UnalignedMessage { words })
        } else {
            Ok(())
        }
    }

    /// Hashes the buffered message.
    ///
    /// Fails without touching any state if the buffer is empty or not a
    /// whole number of blocks. The buffer is left as it was.
    pub fn compute_hash(&mut self) -> Result<(), Error> {
        self.check_message()?;

        self.state = Self::initial_state();
        for block in self.message.chunks_exact(BLOCK_WORDS) {
            // FIPS 180-4 {6.1.2, 6.2.2, 6.4.2} Step 1
            self.schedule.clear();
            self.schedule.extend_from_slice(block);
            <V::Compression as Compression>::expand::<F>(&mut self.schedule);

            // Step 2
            self.working.clone_from(&self.state);

            // Step 3
            for (t, wt) in self.schedule.iter().enumerate() {
                <V::Compression as Compression>::round::<F>(t, &mut self.working, wt);
            }

            // Step 4
            for (h, v) in self.state.iter_mut().zip(self.working.iter()) {
                *h = F::add(&*h, v);
            }
        }

        self.digest = Some(V::digest_view::<F>(&self.state));
        Ok(())
    }

    /// Digest of the last successful [`compute_hash`](Engine::compute_hash).
    ///
    /// Holds as many words as the variant exposes: 5 for SHA-1, 7 for
    /// SHA-224, 8 for SHA-256 and SHA-512, 6 for SHA-384, 4 for SHA-512/224
    /// and SHA-512/256.
    pub fn digest(&self) -> Result<&[F::Word], Error> {
        self.digest.as_deref().ok_or(Error::NoDigest)
    }
}

impl<V, F> Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>, Word = LiteralOf<V>>,
{
    /// The digest serialized big-endian, [`Variant::OUTPUT_BYTES`] long.
    pub fn digest_bytes(&self) -> Result<Vec<u8>, Error> {
        let words = self.digest()?;
        let width = <LiteralOf<V> as Literal>::BYTES;

        let mut out = alloc::vec![0u8; words.len() * width];
        for (chunk, word) in out.chunks_exact_mut(width).zip(words) {
            word.write_be(chunk);
        }
        out.truncate(V::OUTPUT_BYTES);
        Ok(out)
    }

    /// Pads `message`, hashes it and returns the digest bytes.
    ///
    /// Replaces whatever was buffered and leaves the buffer empty.
    pub fn hash(&mut self, message: &[u8]) -> Result<Vec<u8>, Error> {
        let padded = pad_message(V::BLOCK, message)?;
        self.clear_message();
        self.msg_bytes(&padded)?;
        let result = self.compute_hash().and_then(|()| self.digest_bytes());
        self.clear_message();
        result
    }
}

impl<V, F> Default for Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, F> Extend<F::Word> for Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>>,
{
    fn extend<I: IntoIterator<Item = F::Word>>(&mut self, words: I) {
        self.msg_input(words);
    }
}

impl<V, F> Clone for Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>>,
{
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            state: self.state.clone(),
            schedule: self.schedule.clone(),
            working: self.working.clone(),
            digest: self.digest.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V, F> fmt::Debug for Engine<V, F>
where
    V: Variant,
    F: WordOps<Literal = LiteralOf<V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Engine<{}> {{ ... }}", V::NAME)
    }
}
