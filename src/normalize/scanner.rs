use std::ops::Range;

use crate::cardinal::MAX_CARDINAL;

/// A maximal run of ASCII digits found in the input.
///
/// `value` is the integer the run denotes when it is in [0, 1000];
/// runs that are out of range (or too long to parse) carry no value
/// and are copied through verbatim by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitRun {
    pub span: Range<usize>,
    pub value: Option<u16>,
}

/// Find every maximal digit run in `text`, left to right.
///
/// Boundary semantics are digit-vs-non-digit: a run ends at any
/// non-digit byte or the string edge, so "v2" yields the run "2".
/// ASCII digits never occur inside multi-byte UTF-8 sequences, so
/// byte scanning is safe and every span lies on a char boundary.
pub fn scan(text: &str) -> Vec<DigitRun> {
    let bytes = text.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        runs.push(DigitRun {
            span: start..i,
            value: parse_in_range(&text[start..i]),
        });
    }

    runs
}

/// Leading zeros denote their integer value ("007" is 7). Runs whose
/// value exceeds 1000, including runs too long for u32, parse to None.
fn parse_in_range(run: &str) -> Option<u16> {
    let value: u32 = run.parse().ok()?;
    if value <= u32::from(MAX_CARDINAL) {
        Some(value as u16)
    } else {
        None
    }
}
