//! This crate provides `FakeStream`, a deterministic reader meant to be used as a controlled stub
//! in tests of code that consumes bytes from a reader.
//!
//! `FakeStream` yields a configured number of bytes counting upwards from a start value and
//! wrapping around at 256. Partial reads, end of stream and rewinding behave the same way on
//! every run, so consumers can be tested against exact expectations without touching real I/O.
//!
//! The stream implements the `Read` trait of this crate, which lets the reader define its own
//! error type (`Void` in case of `FakeStream`, as it can never fail) and works in `no_std`
//! environments. With the `std` feature (default), `std::io::Read` is implemented too, so the
//! stream can be passed to any code accepting `std` readers.

#![no_std]
#![deny(missing_docs)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate void;

#[cfg(feature = "std")]
pub mod std_impls;

pub mod error;
pub mod fake;

pub use fake::{FakeStream, ReadStatus};

use error::ReadExactError;
use void::Void;

/// Source of bytes.
///
/// Unlike `std::io::Read`, each reader picks its own error type, so readers that can't fail use
/// `Void` and callers don't have to handle impossible errors. The trait works without `std`.
pub trait Read {
    /// Error returned by `read()`. `Void` for readers that never fail.
    type ReadError;

    /// Copies the next bytes of the source into `buf` and returns their count.
    ///
    /// The count never exceeds `buf.len()`. Zero means the source has no more bytes for now, or
    /// that `buf` was empty. A failed read must not consume anything.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::ReadError>;

    /// Fills the whole `buf` or fails.
    ///
    /// Readers that know they can't provide `buf.len()` bytes (see `available_bytes()`) fail
    /// with `UnexpectedEnd` up front and keep their position. Other readers fail when a read
    /// returns zero, possibly after consuming some bytes.
    fn read_exact(&mut self, mut buf: &mut [u8]) -> Result<(), ReadExactError<Self::ReadError>> {
        if !self.available_bytes(buf.len()) {
            return Err(ReadExactError::UnexpectedEnd);
        }

        while !buf.is_empty() {
            let count = self.read(buf)?;
            if count == 0 {
                return Err(ReadExactError::UnexpectedEnd);
            }
            buf = &mut core::mem::take(&mut buf)[count..];
        }
        Ok(())
    }

    /// Returns false only if the reader is sure fewer than `at_least` bytes are left.
    ///
    /// Defaults to true, which is always correct.
    fn available_bytes(&self, _at_least: usize) -> bool {
        true
    }

    /// Borrows the reader, so adaptors taking it by value can be used without giving it up.
    fn by_ref(&mut self) -> &mut Self where Self: Sized {
        self
    }
}

impl<'a, R: Read + ?Sized> Read for &'a mut R {
    type ReadError = R::ReadError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::ReadError> {
        (*self).read(buf)
    }

    fn available_bytes(&self, at_least: usize) -> bool {
        (**self).available_bytes(at_least)
    }
}

impl<'a> Read for &'a [u8] {
    type ReadError = Void;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::ReadError> {
        let amt = core::cmp::min(buf.len(), self.len());
        let (a, b) = self.split_at(amt);

        buf[..amt].copy_from_slice(a);
        *self = b;
        Ok(amt)
    }

    fn available_bytes(&self, at_least: usize) -> bool {
        self.len() >= at_least
    }
}
