//! Fuzz target for canonicalization.
//!
//! Checks that a window and its reverse complement always collapse to the
//! same canonical value, and that the scan is strand-symmetric over whole
//! sequences.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sketchmer::{KmerLength, KmerStream, KmerWindow};

fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            _ => unreachable!(),
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 127 {
        return;
    }
    for &byte in data {
        if !matches!(byte, b'A' | b'C' | b'G' | b'T') {
            return;
        }
    }

    let k = KmerLength::new(data.len()).unwrap();
    let rc = reverse_complement(data);

    let forward: Vec<KmerWindow> = KmerStream::new(data, k).collect();
    let reverse: Vec<KmerWindow> = KmerStream::new(&rc, k).collect();
    assert_eq!(forward, reverse, "canonical form differs across strands");
});
