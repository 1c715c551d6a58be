//! This module contains glue for `std::io`.

use crate::error::ReadExactError;
use crate::FakeStream;
use std::io;
use void::Void;

/// Same bytes as `FakeStream::read_status()`. The end is signalled by `Ok(0)`, as usual in `std`.
impl io::Read for FakeStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_status(buf).count())
    }
}

impl From<ReadExactError<Void>> for io::Error {
    fn from(e: ReadExactError<Void>) -> Self {
        match e {
            ReadExactError::Other(e) => void::unreachable(e),
            ReadExactError::UnexpectedEnd => io::ErrorKind::UnexpectedEof.into(),
        }
    }
}
