use crate::error::RleError;
use std::str::FromStr;

/// Bytes read from the source per encode/decode cycle.
///
/// Every chunk is encoded on its own, so a compressed stream is a plain
/// concatenation of whole frames. Decoding with any even chunk size therefore
/// never splits a frame, whatever size was used when encoding.
pub const CHUNK_SIZE: usize = 512;

/// Largest accepted chunk size. The chunk buffer is allocated up front.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

/// What the frame parser does with a stored count of zero. The encoder never
/// produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroCountPolicy {
    /// Fail with a malformed frame error.
    #[default]
    Reject,
    /// Treat the frame as a zero-length run and drop it.
    Skip,
}

#[derive(Debug, Clone)]
pub struct RleConfig {
    pub chunk_size: usize,
    pub zero_count: ZeroCountPolicy,
}

impl Default for RleConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            zero_count: ZeroCountPolicy::Reject,
        }
    }
}

impl RleConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_zero_count(mut self, policy: ZeroCountPolicy) -> Self {
        self.zero_count = policy;
        self
    }

    /// Checks the configuration for the given direction. Decoding reads frames
    /// in chunk-sized windows, so it needs an even chunk size.
    pub fn validate(&self, mode: Mode) -> Result<(), RleError> {
        if self.chunk_size == 0 {
            return Err(RleError::Config("chunk size must be non-zero".to_string()));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(RleError::Config(format!(
                "chunk size {} exceeds the maximum of {} bytes",
                self.chunk_size, MAX_CHUNK_SIZE
            )));
        }
        if mode == Mode::Decompress && self.chunk_size % 2 != 0 {
            return Err(RleError::Config(format!(
                "chunk size {} would split 2-byte frames; use an even size",
                self.chunk_size
            )));
        }
        Ok(())
    }
}

impl FromStr for ZeroCountPolicy {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(ZeroCountPolicy::Reject),
            "skip" => Ok(ZeroCountPolicy::Skip),
            _ => Err(RleError::Config(format!("Invalid zero-count policy: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RleConfig::default();
        assert_eq!(config.chunk_size, 512);
        assert_eq!(config.zero_count, ZeroCountPolicy::Reject);
        assert!(config.validate(Mode::Compress).is_ok());
        assert!(config.validate(Mode::Decompress).is_ok());
    }

    #[test]
    fn test_validate_chunk_size() {
        let zero = RleConfig::default().with_chunk_size(0);
        assert!(zero.validate(Mode::Compress).is_err());
        assert!(zero.validate(Mode::Decompress).is_err());

        let odd = RleConfig::default().with_chunk_size(511);
        assert!(odd.validate(Mode::Compress).is_ok());
        assert!(odd.validate(Mode::Decompress).is_err());

        let max = RleConfig::default().with_chunk_size(MAX_CHUNK_SIZE);
        assert!(max.validate(Mode::Decompress).is_ok());
        for size in [MAX_CHUNK_SIZE + 2, MAX_CHUNK_SIZE * 16, usize::MAX] {
            let huge = RleConfig::default().with_chunk_size(size);
            assert!(matches!(huge.validate(Mode::Compress), Err(RleError::Config(_))));
            assert!(matches!(huge.validate(Mode::Decompress), Err(RleError::Config(_))));
        }
    }

    #[test]
    fn test_parse_zero_count_policy() {
        assert_eq!("reject".parse::<ZeroCountPolicy>().unwrap(), ZeroCountPolicy::Reject);
        assert_eq!("Skip".parse::<ZeroCountPolicy>().unwrap(), ZeroCountPolicy::Skip);
        assert!("ignore".parse::<ZeroCountPolicy>().is_err());
    }
}
