//! # RLE: streaming run-length encoding
//!
//! A lossless byte-oriented codec that turns data into `(count, byte)` runs.
//!
//! ## Format
//!
//! Compressed data is a bare sequence of 2-byte frames, `[count][byte]`, with
//! no header or trailer. `count` is 1..=255; longer runs are split over several
//! frames. Input is processed in independent chunks of [`CHUNK_SIZE`] bytes, so
//! no run ever crosses a chunk boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use rle::{compress_data, decompress_data};
//!
//! let original = b"AABBBAC";
//! let compressed = compress_data(original).unwrap();
//! assert_eq!(compressed, vec![2, b'A', 3, b'B', 1, b'A', 1, b'C']);
//!
//! let restored = decompress_data(&compressed).unwrap();
//! assert_eq!(restored, original.to_vec());
//! ```
//!
//! ### Working with Files
//!
//! ```rust
//! use rle::{pipeline, RleConfig};
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RleConfig::default();
//! let mut reader = BufReader::new(File::open("input.bin")?);
//! let mut writer = BufWriter::new(File::create("input.bin.out")?);
//!
//! let stats = pipeline::perform_encoding(&mut reader, &mut writer, &config)?;
//! println!("{} -> {} bytes", stats.bytes_read, stats.bytes_written);
//! # Ok(())
//! # }
//! ```

pub mod chunk;
pub mod cli;
pub mod config;
pub mod error;
pub mod framing;
pub mod pipeline;
pub mod run;
pub mod transforms;

pub use chunk::{ChunkReader, RawChunk, StreamStats};
pub use config::{Mode, RleConfig, ZeroCountPolicy, CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use error::{ErrorKind, Result, RleError};
pub use framing::{parse_encoded_input, to_byte_sequence, write_frames, FRAME_LEN};
pub use pipeline::{perform_decoding, perform_encoding, process};
pub use run::Run;
pub use transforms::rle::{decode, encode};

use std::io::Cursor;

/// Compresses an in-memory buffer with the default configuration.
pub fn compress_data(data: &[u8]) -> Result<Vec<u8>> {
    let mut input = Cursor::new(data);
    let mut output = Vec::new();

    pipeline::perform_encoding(&mut input, &mut output, &RleConfig::default())?;
    Ok(output)
}

/// Decompresses an in-memory buffer with the default configuration.
///
/// # Example
///
/// ```rust
/// use rle::{decompress_data, ErrorKind};
///
/// assert_eq!(decompress_data(&[3, b'x']).unwrap(), b"xxx");
/// let err = decompress_data(&[3, b'x', 4]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedFrame);
/// ```
pub fn decompress_data(compressed_data: &[u8]) -> Result<Vec<u8>> {
    let mut input = Cursor::new(compressed_data);
    let mut output = Vec::new();

    pipeline::perform_decoding(&mut input, &mut output, &RleConfig::default())?;
    Ok(output)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
