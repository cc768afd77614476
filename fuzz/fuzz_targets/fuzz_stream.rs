//! Fuzz target for the window scan and the ingest/query drivers.
//!
//! Feeds arbitrary bytes (any mix of valid and ambiguous characters)
//! through a full ingest-then-query round and checks the structural
//! contracts: one output entry per window, masked exactly where the
//! sequence is dirty, and no panic on any input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sketchmer::{ingest, query, Sketch, MASKED};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks k, the rest is the sequence.
    let k = usize::from(data[0] % 127) + 1;
    let seq = &data[1..];

    let mut sketch = Sketch::with_seed(256, 4, 777).unwrap();
    let added = ingest(&mut sketch, k, seq).unwrap();

    let windows = (seq.len() + 1).saturating_sub(k);
    assert!((added as usize) <= windows);

    let mut counts = vec![i64::MIN; windows];
    let written = query(&sketch, k, seq, &mut counts).unwrap();
    assert_eq!(written, windows);

    for (i, window) in seq.windows(k).enumerate() {
        let clean = window
            .iter()
            .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't'));
        if clean {
            assert!(counts[i] >= 1, "clean window {i} got {}", counts[i]);
        } else {
            assert_eq!(counts[i], MASKED, "dirty window {i} not masked");
        }
    }
});
