//! Error types and various operations on them.

use core::fmt;

/// Error that might occur when reading exact amount of bytes.
#[derive(Debug)]
pub enum ReadExactError<E> {
    /// Low-level error happened.
    Other(E),

    /// Reader reached end unexpectedly.
    ///
    /// For `FakeStream` this means fewer bytes remained than the buffer required.
    UnexpectedEnd,
}

impl<E> From<E> for ReadExactError<E> {
    fn from(e: E) -> Self {
        ReadExactError::Other(e)
    }
}

impl<E: fmt::Display> fmt::Display for ReadExactError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadExactError::Other(e) => write!(f, "read failed: {}", e),
            ReadExactError::UnexpectedEnd => write!(f, "reader ended before buffer was filled"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for ReadExactError<E> {}
