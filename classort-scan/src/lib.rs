//! Call-site discovery for classort.
//!
//! This crate plays the host-visitor role: it walks JS/TS/JSX source text,
//! finds calls to the configured combiner and variant-builder functions, and
//! extracts their argument sequences as typed items with byte spans. It is
//! tolerant: malformed source never fails a scan, it only makes
//! the scanner drop the affected candidate.

mod extract;
mod lexer;

pub use extract::{ScanConfig, literal_value, scan_source};
