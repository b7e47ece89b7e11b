use log::trace;
use snafu::{OptionExt, ResultExt, Snafu};
use std::io::{ErrorKind, Read};

/// Owns the underlying byte stream for the duration of one decode. Reads are
/// strictly forward, one pass, with the running byte position carried into
/// every error. There is no lookahead: the trace format never needs to see a
/// byte before consuming it.
pub(crate) struct ByteSource<R: Read> {
    reader: R,
    position: u64,
}

#[derive(Debug, Snafu)]
pub(crate) enum ByteError {
    #[snafu(display("io error around byte {}: {}", position, source))]
    Io {
        position: u64,
        source: std::io::Error,
    },

    #[snafu(display("unexpected end of data around byte {}", position))]
    End { position: u64 },
}

pub(crate) type ByteResult<T> = std::result::Result<T, ByteError>;

impl<R: Read> ByteSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
        }
    }

    /// Read a single byte and advance, or `None` at the end of the stream.
    pub(crate) fn read(&mut self) -> ByteResult<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    trace!("read {:#04x} at position {}", buf[0], self.position);
                    self.position += 1;
                    return Ok(Some(buf[0]));
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => {
                    return Err(e).context(IoSnafu {
                        position: self.position,
                    })
                }
            }
        }
    }

    pub(crate) fn read_or_die(&mut self) -> ByteResult<u8> {
        let position = self.position;
        self.read()?.context(EndSnafu { position })
    }

    pub(crate) fn read4(&mut self) -> ByteResult<[u8; 4]> {
        let mut retval = [0u8; 4];
        for slot in retval.iter_mut() {
            *slot = self.read_or_die()?;
        }
        Ok(retval)
    }

    pub(crate) fn read_u16(&mut self) -> ByteResult<u16> {
        Ok(u16::from_be_bytes([self.read_or_die()?, self.read_or_die()?]))
    }

    pub(crate) fn read_u32(&mut self) -> ByteResult<u32> {
        Ok(u32::from_be_bytes(self.read4()?))
    }

    pub(crate) fn read_n(&mut self, num_bytes: usize) -> ByteResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(num_bytes);
        for _ in 0..num_bytes {
            bytes.push(self.read_or_die()?);
        }
        Ok(bytes)
    }

    /// Advance the position by `num_bytes` without decoding anything. Ending
    /// mid-skip is an error, the same as any other short read.
    pub(crate) fn skip(&mut self, num_bytes: u64) -> ByteResult<()> {
        trace!("skipping {} bytes at position {}", num_bytes, self.position);
        for _ in 0..num_bytes {
            self.read_or_die()?;
        }
        Ok(())
    }
}
