//! Compact readout strings for the status line.

use core::fmt::Write;

use heapless::String as HeaplessString;

pub const READOUT_BYTES: usize = 32;

pub type Readout = HeaplessString<READOUT_BYTES>;

/// Words per minute at `speed`, rounded.
pub fn effective_wpm(base_wpm: u16, speed: f32) -> u32 {
    (f32::from(base_wpm) * speed).round().max(0.0) as u32
}

/// `"1.0x (244 wpm)"`
pub fn speed_label(base_wpm: u16, speed: f32) -> Readout {
    let mut out = Readout::new();
    // Cannot overflow: the widest value is "65535.0x (4294967295 wpm)".
    let _ = write!(out, "{speed:.1}x ({} wpm)", effective_wpm(base_wpm, speed));
    out
}

/// `"12/340"`
pub fn progress_label(position: usize, total: usize) -> Readout {
    let mut out = Readout::new();
    if write!(out, "{position}/{total}").is_err() {
        out.clear();
        let _ = out.push_str("?/?");
    }
    out
}

/// Completed fraction in `0..=100`, `100` for an empty text.
pub fn progress_percent(position: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((position.min(total) * 100) / total) as u8
}
