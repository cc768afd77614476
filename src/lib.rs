//! # Sketchmer
//!
//! Sketchmer approximates the frequency of canonical k-mers across DNA
//! sequences too large for exact counting. It pairs two tightly coupled
//! pieces:
//!
//! - a **canonical k-mer engine** ([`bitvec`], [`stream`]): windows of up to
//!   127 bases packed two bits per base into a 256-bit value, with the
//!   forward and reverse-complement windows slid together across the input
//!   and canonicalized as their unsigned minimum, and
//! - a **log-counter count-min sketch** ([`logcount`], [`sketch`],
//!   [`hashing`]): a width×depth matrix of single-byte counters on a
//!   geometric scale with probabilistic increments, addressed per row by
//!   seeded hashing, read back as the row minimum.
//!
//! Two operations tie them together: [`ingest`] feeds every valid k-mer
//! window of a sequence into the sketch, and [`query`] recovers an
//! estimated count per window, writing `-1` for windows that span a
//! non-ACGT byte.
//!
//! ```
//! use sketchmer::{ingest, query, Sketch};
//!
//! let mut sketch = Sketch::with_seed(1024, 10, 777)?;
//! ingest(&mut sketch, 4, b"ACGTACG")?;
//!
//! let mut counts = [0i64; 4];
//! let written = query(&sketch, 4, b"ACGTACG", &mut counts)?;
//! assert_eq!(written, 4);
//! assert_eq!(counts, [1, 2, 1, 2]);
//! # Ok::<(), sketchmer::SketchmerError>(())
//! ```
//!
//! Estimates never undercount a key while its count sits below the exact
//! counter cutoff; above it they stay unbiased with multiplicative error.
//! A sketch is cheap to share read-only across threads; mutation requires
//! exclusive access.

pub mod bitvec;
pub mod cli;
pub mod error;
pub mod hashing;
pub mod logcount;
pub mod sketch;
pub mod stream;

pub use bitvec::BitVec256;
pub use error::SketchmerError;
pub use sketch::Sketch;
pub use stream::{ingest, query, KmerLength, KmerStream, KmerWindow, MASKED};
