//! Deterministic fake reader.

use crate::Read;
use void::Void;

/// Outcome of a single read from `FakeStream`.
///
/// Unlike plain `usize` returned by `Read::read()`, this type can tell apart a buffer that was
/// filled completely from one that was only partially filled because the stream ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// The whole buffer was filled with this many bytes. More bytes may follow.
    Filled(usize),
    /// The stream ended after writing this many bytes (possibly zero).
    ///
    /// The bytes are valid and must be consumed by the caller.
    End(usize),
}

impl ReadStatus {
    /// Number of bytes written into the buffer.
    pub fn count(self) -> usize {
        match self {
            ReadStatus::Filled(count) | ReadStatus::End(count) => count,
        }
    }

    /// Returns true if the stream signalled its end.
    pub fn is_exhausted(self) -> bool {
        match self {
            ReadStatus::Filled(_) => false,
            ReadStatus::End(_) => true,
        }
    }
}

/// Reader producing a predictable sequence of bytes.
///
/// The stream counts upwards from `start` and yields `length` values in total. Each value is
/// truncated to a byte, so the output cycles through 0..=255 and wraps around. When the values
/// run out, reads become short and finally return zero, just as a file does at its end.
///
/// Call `reset()` to replay the very same sequence again.
///
/// # Example
///
/// ```
/// use fake_stream::{FakeStream, ReadStatus};
///
/// let mut stream = FakeStream::new(254, 3);
/// let mut buf = [0; 2];
///
/// assert_eq!(stream.read_status(&mut buf), ReadStatus::Filled(2));
/// assert_eq!(buf, [254, 255]);
/// assert_eq!(stream.read_status(&mut buf), ReadStatus::End(1));
/// assert_eq!(buf[0], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeStream {
    cursor: u64,
    start: u64,
    limit: u64,
}

impl FakeStream {
    /// Creates a stream yielding `length` bytes counting from `start`.
    ///
    /// If `start + length` doesn't fit into `u64` the stream ends at `u64::MAX`.
    pub fn new(start: u64, length: u64) -> Self {
        FakeStream {
            cursor: start,
            start,
            limit: start.saturating_add(length),
        }
    }

    /// Fills `buf` with the next bytes of the sequence.
    ///
    /// Returns `ReadStatus::End` if the stream ran out before the buffer was filled. Once the
    /// stream is exhausted, every call returns `End(0)` until `reset()` is called.
    ///
    /// Empty buffer yields `Filled(0)` unless the stream is already exhausted.
    pub fn read_status(&mut self, buf: &mut [u8]) -> ReadStatus {
        if buf.is_empty() {
            return if self.is_exhausted() {
                ReadStatus::End(0)
            } else {
                ReadStatus::Filled(0)
            };
        }

        let count = self.fill(buf);
        if count > 0 && self.is_exhausted() {
            log::trace!("fake stream {}..{} drained after {} bytes", self.start, self.limit, count);
        }
        if count < buf.len() {
            ReadStatus::End(count)
        } else {
            ReadStatus::Filled(count)
        }
    }

    /// Rewinds the stream to its start.
    ///
    /// Following reads will produce exactly the same bytes as a freshly created stream.
    pub fn reset(&mut self) {
        log::debug!("fake stream {}..{} reset at {}", self.start, self.limit, self.cursor);
        self.cursor = self.start;
    }

    /// The first value of the sequence.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// The value at which the stream ends (exclusive).
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The value that will be emitted next (before truncation to a byte).
    pub fn position(&self) -> u64 {
        self.cursor
    }

    /// Total number of bytes the stream yields between resets.
    pub fn len(&self) -> u64 {
        self.limit - self.start
    }

    /// Returns true if the stream was created with zero length.
    pub fn is_empty(&self) -> bool {
        self.limit == self.start
    }

    /// Number of bytes left until the end.
    pub fn remaining(&self) -> u64 {
        self.limit - self.cursor
    }

    /// Returns true if no more bytes are left.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.limit
    }

    fn fill(&mut self, buf: &mut [u8]) -> usize {
        // `remaining` may exceed `usize` on 32-bit targets, the buffer can't.
        let amt = if self.remaining() < buf.len() as u64 {
            self.remaining() as usize
        } else {
            buf.len()
        };

        for (byte, value) in buf[..amt].iter_mut().zip(self.cursor..self.limit) {
            *byte = value as u8;
        }
        self.cursor += amt as u64;
        amt
    }
}

impl Read for FakeStream {
    type ReadError = Void;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::ReadError> {
        Ok(self.read_status(buf).count())
    }

    fn available_bytes(&self, at_least: usize) -> bool {
        self.remaining() >= at_least as u64
    }
}
