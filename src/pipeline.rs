use crate::chunk::{ChunkReader, StreamStats};
use crate::config::{Mode, RleConfig};
use crate::error::RleError;
use crate::framing::{parse_encoded_input, write_frames};
use crate::transforms::rle;
use std::io::{Read, Write};

/// Compresses `reader` into `writer` one chunk at a time.
///
/// Each chunk's frames are written as soon as the chunk is encoded. On error
/// whatever was already written stays in `writer`.
pub fn perform_encoding<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &RleConfig,
) -> Result<StreamStats, RleError> {
	config.validate(Mode::Compress)?;

	let mut chunks = ChunkReader::new(reader, config.chunk_size);
	let mut stats = StreamStats::new();

	while let Some(chunk) = chunks.next_chunk()? {
		let runs = rle::encode(chunk.data, chunk.size());
		let written = write_frames(writer, &runs).map_err(RleError::OutputStream)?;
		log::debug!("chunk {}: {} bytes -> {} runs", chunk.id, chunk.size(), runs.len());
		stats.add_chunk(chunk.size(), written);
	}

	writer.flush().map_err(RleError::OutputStream)?;
	log::info!("encoded {} bytes into {} bytes ({} chunks)", stats.bytes_read, stats.bytes_written, stats.chunks);
	Ok(stats)
}

/// Expands frames read from `reader` into `writer` one chunk at a time.
pub fn perform_decoding<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &RleConfig,
) -> Result<StreamStats, RleError> {
	config.validate(Mode::Decompress)?;

	let mut chunks = ChunkReader::new(reader, config.chunk_size);
	let mut stats = StreamStats::new();
	let mut decoded = Vec::new();

	while let Some(chunk) = chunks.next_chunk()? {
		let runs = parse_encoded_input(chunk.data, chunk.size(), config.zero_count)
			.map_err(|e| e.at_stream_offset(chunk.offset))?;

		decoded.clear();
		rle::decode_into(&runs, &mut decoded);
		writer.write_all(&decoded).map_err(RleError::OutputStream)?;
		log::debug!("chunk {}: {} runs -> {} bytes", chunk.id, runs.len(), decoded.len());
		stats.add_chunk(chunk.size(), decoded.len() as u64);
	}

	writer.flush().map_err(RleError::OutputStream)?;
	log::info!("decoded {} bytes into {} bytes ({} chunks)", stats.bytes_read, stats.bytes_written, stats.chunks);
	Ok(stats)
}

/// Runs the driver selected by `mode`.
pub fn process<R: Read, W: Write>(
	mode: Mode,
	reader: &mut R,
	writer: &mut W,
	config: &RleConfig,
) -> Result<StreamStats, RleError> {
	match mode {
		Mode::Compress => perform_encoding(reader, writer, config),
		Mode::Decompress => perform_decoding(reader, writer, config),
	}
}
