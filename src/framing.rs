use crate::config::ZeroCountPolicy;
use crate::error::RleError;
use crate::run::Run;
use byteorder::{ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Write};

/// Bytes per serialized run: `[count][byte]`.
pub const FRAME_LEN: usize = 2;

/// Serializes runs as consecutive `[count][byte]` frames.
pub fn to_byte_sequence(runs: &[Run]) -> Vec<u8> {
	let mut out = Vec::with_capacity(runs.len() * FRAME_LEN);
	for run in runs {
		out.push(run.count.get());
		out.push(run.byte);
	}
	out
}

/// Streams the frames for `runs` into `writer`, returning the byte count.
pub fn write_frames<W: Write>(writer: &mut W, runs: &[Run]) -> io::Result<u64> {
	for run in runs {
		writer.write_u8(run.count.get())?;
		writer.write_u8(run.byte)?;
	}
	Ok((runs.len() * FRAME_LEN) as u64)
}

/// Parses the first `count` bytes of `data` (clamped to its length) as frames.
///
/// Offsets in returned errors are relative to the start of `data`.
pub fn parse_encoded_input(data: &[u8], count: usize, zero_count: ZeroCountPolicy) -> Result<Vec<Run>, RleError> {
	let data = &data[..count.min(data.len())];
	let mut reader = Cursor::new(data);
	let mut runs = Vec::with_capacity(data.len() / FRAME_LEN);

	loop {
		let offset = reader.position();
		// Reads from an in-memory slice only fail at the end of the slice.
		let Ok(count) = reader.read_u8() else { break };
		let Ok(byte) = reader.read_u8() else {
			return Err(RleError::malformed(offset, "count byte has no paired value"));
		};

		match Run::new(count, byte) {
			Some(run) => runs.push(run),
			None => match zero_count {
				ZeroCountPolicy::Reject => return Err(RleError::malformed(offset, "run count is zero")),
				ZeroCountPolicy::Skip => log::trace!("skipping zero-length run at offset {}", offset),
			},
		}
	}
	Ok(runs)
}
