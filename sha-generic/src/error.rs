use core::fmt;

/// Errors returned by [`Engine`](crate::Engine) and the padding routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `compute_hash` was called with nothing buffered.
    EmptyMessage,
    /// The buffered words do not form a whole number of blocks.
    UnalignedMessage {
        /// Number of words buffered.
        words: usize,
    },
    /// `digest` was called before any successful `compute_hash`.
    NoDigest,
    /// A byte slice does not divide into whole words.
    PartialWord,
    /// The message bit length is not a whole number of bytes.
    PartialByte,
    /// The message bit length does not fit the 64-bit length field.
    LengthOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyMessage => f.write_str("message buffer is empty"),
            Error::UnalignedMessage { words } => write!(
                f,
                "{} buffered words is not a whole number of 16-word blocks",
                words
            ),
            Error::NoDigest => f.write_str("no hash has been computed"),
            Error::PartialWord => f.write_str("byte count is not a whole number of words"),
            Error::PartialByte => f.write_str("bit length is not a whole number of bytes"),
            Error::LengthOverflow => f.write_str("message is 2^64 bits or longer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
