//! Run-Length Encoding over raw bytes.
//! Every maximal stretch of equal bytes becomes one or more `Run`s, each
//! covering at most 255 bytes. Runs never carry state between calls, so a
//! caller encoding chunk by chunk gets runs that stop at chunk edges.
use crate::run::Run;
use std::num::NonZeroU8;

/// Encodes the first `count` bytes of `data` (clamped to its length).
pub fn encode(data: &[u8], count: usize) -> Vec<Run> {
    let data = &data[..count.min(data.len())];
    if data.is_empty() {
        return Vec::new();
    }

    let mut runs = Vec::new();
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        let mut len = NonZeroU8::MIN;
        i += 1;

        while i < data.len() && data[i] == byte && len.get() < Run::MAX_COUNT {
            len = len.saturating_add(1);
            i += 1;
        }

        runs.push(Run { count: len, byte });
    }

    runs
}

pub fn decode(runs: &[Run]) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(runs.iter().map(Run::expanded_len).sum());
    decode_into(runs, &mut decoded);
    decoded
}

/// Appends the expansion of `runs` to `out`.
pub fn decode_into(runs: &[Run], out: &mut Vec<u8>) {
    for run in runs {
        out.resize(out.len() + run.expanded_len(), run.byte);
    }
}
