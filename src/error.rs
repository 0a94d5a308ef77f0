use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RleError>;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("Malformed frame at byte {offset}: {reason}")]
	MalformedFrame { offset: u64, reason: String },

	#[error("Failed to read input stream: {0}")]
	InputStream(#[source] std::io::Error),

	#[error("Failed to write output stream: {0}")]
	OutputStream(#[source] std::io::Error),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Cannot open {}: {source}", .path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Coarse classification of [`RleError`], handy for matching without
/// destructuring payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	MalformedFrame,
	InputStream,
	OutputStream,
	Config,
	Open,
}

impl RleError {
	pub fn malformed(offset: u64, reason: impl Into<String>) -> Self {
		RleError::MalformedFrame { offset, reason: reason.into() }
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			RleError::MalformedFrame { .. } => ErrorKind::MalformedFrame,
			RleError::InputStream(_) => ErrorKind::InputStream,
			RleError::OutputStream(_) => ErrorKind::OutputStream,
			RleError::Config(_) => ErrorKind::Config,
			RleError::Open { .. } => ErrorKind::Open,
		}
	}

	/// Shifts a chunk-relative frame offset to a stream-absolute one.
	pub(crate) fn at_stream_offset(self, base: u64) -> Self {
		match self {
			RleError::MalformedFrame { offset, reason } => {
				RleError::MalformedFrame { offset: base + offset, reason }
			}
			other => other,
		}
	}
}
