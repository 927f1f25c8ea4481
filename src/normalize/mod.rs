pub mod scanner;

use std::path::Path;

use crate::cardinal::{Converter, DirectConverter};
use crate::table::Backend;

pub use scanner::{scan, DigitRun};

/// Rewrites standalone digit runs in free-form text as English
/// cardinal phrases.
///
/// Total over all inputs: unmatched and out-of-range runs pass through
/// verbatim, and every byte outside a substituted run is copied
/// unchanged. Stateless, so calls are independent and safe to issue
/// concurrently.
pub struct TextNormalizer<C> {
    converter: C,
}

impl Default for TextNormalizer<DirectConverter> {
    fn default() -> Self {
        Self {
            converter: DirectConverter,
        }
    }
}

impl TextNormalizer<Backend> {
    /// Normalizer backed by a precompiled lookup artifact, falling
    /// back to direct computation when the artifact is absent or
    /// fails verification. Observable output is identical either way.
    pub fn with_artifact(artifact: Option<&Path>) -> Self {
        Self::new(Backend::select(artifact))
    }
}

impl<C: Converter> TextNormalizer<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn normalize(&self, text: &str) -> String {
        let runs = scanner::scan(text);
        if runs.is_empty() {
            return text.to_string();
        }

        // Detection ran against the original text; substitutions are
        // assembled into a separate buffer so they never shift the
        // boundaries of later matches.
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for run in runs {
            out.push_str(&text[cursor..run.span.start]);

            // The range guard lives here: the converter is only ever
            // handed in-range values, so a conversion failure is
            // unreachable and degrades to pass-through.
            match run.value.and_then(|v| self.converter.convert(v).ok()) {
                Some(words) => out.push_str(&words),
                None => out.push_str(&text[run.span.clone()]),
            }

            cursor = run.span.end;
        }

        out.push_str(&text[cursor..]);
        out
    }
}
