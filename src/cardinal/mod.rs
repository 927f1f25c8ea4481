pub mod converter;
pub mod words;

pub use converter::{to_cardinal, ConvertError, Converter, DirectConverter, MAX_CARDINAL};
