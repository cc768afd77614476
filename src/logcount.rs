//! Byte-wide logarithmic counters.
//!
//! Each sketch cell is a single byte. Codes up to [`EXACT_MAX`] count
//! exactly; past that the code indexes a geometric series, and an increment
//! only lands with probability `1 / gap` where `gap` is the decoded distance
//! to the next code. The decoded value stays an unbiased estimate of the
//! true count, and a byte stretches to counts near one billion.

use rand::Rng;
use std::sync::OnceLock;

/// Largest count represented exactly; codes above this are geometric.
pub const EXACT_MAX: u8 = 32;

/// Growth factor of the geometric region. `decode(255)` lands around 9e8.
const GROWTH: f64 = 1.08;

/// The 256-entry decode table, built once.
fn table() -> &'static [u64; 256] {
    static TABLE: OnceLock<[u64; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut t = [0u64; 256];
        for (code, slot) in t.iter_mut().enumerate() {
            *slot = if code <= usize::from(EXACT_MAX) {
                code as u64
            } else {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let decoded = (f64::from(EXACT_MAX)
                    * GROWTH.powi((code - usize::from(EXACT_MAX)) as i32))
                .round() as u64;
                decoded
            };
        }
        t
    })
}

/// Decodes a counter byte to its estimated count.
#[inline]
#[must_use]
pub fn decode(code: u8) -> u64 {
    table()[usize::from(code)]
}

/// Advances a counter byte by one observation.
///
/// Below the exact cutoff this always steps to the next code. In the
/// geometric region the step happens with probability `1 / gap`. Saturates
/// at 255.
pub fn increment<R: Rng>(code: u8, rng: &mut R) -> u8 {
    if code == u8::MAX {
        return code;
    }
    let gap = decode(code + 1) - decode(code);
    if gap <= 1 || rng.gen_range(0..gap) == 0 {
        code + 1
    } else {
        code
    }
}
