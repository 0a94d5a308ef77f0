use crate::error::RleError;
use std::io::{ErrorKind, Read};

/// Reads a stream in fixed-size chunks.
///
/// Each chunk is filled completely unless the source reaches end of data, so
/// short reads from pipes or sockets never shift chunk boundaries.
pub struct ChunkReader<R> {
    reader: R,
    buffer: Vec<u8>,
    next_id: usize,
    offset: u64,
    exhausted: bool,
}

/// A chunk borrowed from a [`ChunkReader`] buffer.
#[derive(Debug)]
pub struct RawChunk<'a> {
    pub id: usize,
    /// Stream position of the first byte.
    pub offset: u64,
    pub data: &'a [u8],
}

impl RawChunk<'_> {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<R: Read> ChunkReader<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: vec![0; chunk_size],
            next_id: 0,
            offset: 0,
            exhausted: false,
        }
    }

    /// Total bytes handed out so far.
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    /// Returns the next non-empty chunk, or `None` at end of data.
    pub fn next_chunk(&mut self) -> Result<Option<RawChunk<'_>>, RleError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(RleError::InputStream(e)),
            }
        }

        if filled == 0 {
            return Ok(None);
        }

        let id = self.next_id;
        let offset = self.offset;
        self.next_id += 1;
        self.offset += filled as u64;
        Ok(Some(RawChunk { id, offset, data: &self.buffer[..filled] }))
    }
}

/// Per-stream totals reported by the drivers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StreamStats {
    pub chunks: usize,
    pub bytes_read: u64,
    pub bytes_written: u64,
}

impl StreamStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chunk(&mut self, read: usize, written: u64) {
        self.chunks += 1;
        self.bytes_read += read as u64;
        self.bytes_written += written;
    }

    /// Input size over output size; 0.0 when nothing was written.
    pub fn ratio(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / self.bytes_written as f64
    }
}
