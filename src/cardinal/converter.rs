use thiserror::Error;

use super::words::{TEENS, TENS, UNITS};

/// Highest value the converter renders.
pub const MAX_CARDINAL: u16 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("value {0} is outside the supported range 0-1000")]
    OutOfRange(u16),
}

/// Render `n` as its English cardinal phrase.
///
/// Total on [0, 1000]; out-of-range values are an error, never a clamp
/// or wrap. Output has single internal spaces, mandatory hyphens in
/// two-digit composites ("twenty-one"), and no conjunction in hundreds
/// ("one hundred one").
pub fn to_cardinal(n: u16) -> Result<String, ConvertError> {
    if n > MAX_CARDINAL {
        return Err(ConvertError::OutOfRange(n));
    }
    Ok(render(n))
}

/// Rendering rule for values already known to be in range.
/// The remainder recursion stays below 100, so rule order is:
/// terminal 1000, units, teens, tens, hundreds.
pub(crate) fn render(n: u16) -> String {
    debug_assert!(n <= MAX_CARDINAL, "render called with {n} out of range");
    match n {
        1000 => "one thousand".to_string(),
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => render_tens(n),
        _ => {
            let (hundreds, rest) = (n / 100, n % 100);
            if rest == 0 {
                format!("{} hundred", UNITS[hundreds as usize])
            } else {
                format!("{} hundred {}", UNITS[hundreds as usize], render(rest))
            }
        }
    }
}

fn render_tens(n: u16) -> String {
    let (tens, unit) = (n / 10, n % 10);
    if unit == 0 {
        TENS[(tens - 2) as usize].to_string()
    } else {
        format!("{}-{}", TENS[(tens - 2) as usize], UNITS[unit as usize])
    }
}

/// Conversion seam: selected once at initialization, either direct
/// computation or a precompiled lookup artifact. Both must produce
/// byte-identical output over the full domain.
pub trait Converter {
    fn convert(&self, n: u16) -> Result<String, ConvertError>;
}

/// v0: pure rule-based computation, no lookup artifact.
#[derive(Debug, Default)]
pub struct DirectConverter;

impl Converter for DirectConverter {
    fn convert(&self, n: u16) -> Result<String, ConvertError> {
        to_cardinal(n)
    }
}
