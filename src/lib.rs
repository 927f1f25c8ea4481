//! Deterministic English cardinal number normalization.
//!
//! `cardinal-core` renders integers in [0, 1000] as English cardinal
//! phrases and rewrites standalone digit runs inside free-form text.
//! All operations are deterministic — identical inputs always produce
//! identical outputs, byte-for-byte, whether conversion runs through
//! the direct rule path or a precompiled lookup artifact.

pub mod cardinal;
pub mod normalize;
pub mod table;
