use std::num::NonZeroU8;

/// `byte` repeated `count` times. The count is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub count: NonZeroU8,
    pub byte: u8,
}

impl Run {
    /// Longest run a single frame can carry.
    pub const MAX_COUNT: u8 = u8::MAX;

    /// Returns `None` for a zero count.
    pub fn new(count: u8, byte: u8) -> Option<Self> {
        NonZeroU8::new(count).map(|count| Self { count, byte })
    }

    /// Number of bytes this run expands to.
    pub fn expanded_len(&self) -> usize {
        self.count.get() as usize
    }
}
