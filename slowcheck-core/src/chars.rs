//! Character and string generators derived from the combinator algebra.

use crate::error::{Result, SlowcheckError};
use crate::frequency::Frequency;
use crate::gen::Gen;

/// Code points in this gap are not scalar values; a range containing
/// them cannot be sampled uniformly as characters.
const SURROGATE_GAP: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

impl Gen<char> {
    /// Generate a character uniformly over `[min, max]` by scalar value.
    ///
    /// Fails with [`SlowcheckError::InvalidRange`] when `min > max` or
    /// when the range spans the surrogate gap, since those code points
    /// have no character value. Characters do not shrink.
    pub fn char_range(min: char, max: char) -> Result<Self> {
        let spans_gap =
            (min as u32) < *SURROGATE_GAP.start() && (max as u32) > *SURROGATE_GAP.end();
        if min > max || spans_gap {
            return Err(SlowcheckError::InvalidRange {
                min: min as i64,
                max: max as i64,
            });
        }
        Ok(Self::char_range_unchecked(min, max))
    }

    fn char_range_unchecked(min: char, max: char) -> Self {
        // Every code point in a validated range is a scalar value, so the
        // fallback never fires; it keeps the mapping total and in range.
        Gen::int_range_unchecked(min as i64, max as i64)
            .map(move |&code| char::from_u32(code as u32).unwrap_or(min))
            .no_shrink()
    }

    /// Printable ASCII, space through tilde.
    pub fn ascii_printable() -> Self {
        Self::char_range_unchecked(' ', '~')
    }

    /// ASCII uppercase letters.
    pub fn ascii_uppercase() -> Self {
        Self::char_range_unchecked('A', 'Z')
    }

    /// ASCII lowercase letters.
    pub fn ascii_lowercase() -> Self {
        Self::char_range_unchecked('a', 'z')
    }

    /// ASCII letters, lowercase nine times as often as uppercase.
    pub fn ascii_letter() -> Self {
        Gen::from_frequency_unchecked(
            Frequency::new()
                .with_alternative_unchecked(9, Self::ascii_lowercase())
                .with_alternative_unchecked(1, Self::ascii_uppercase()),
        )
        .no_shrink()
    }
}

impl Gen<String> {
    /// Generate a string from the given character generator.
    ///
    /// Shrinks like the underlying character vector: shorter strings
    /// first, then simpler characters.
    pub fn string_of(chars: Gen<char>) -> Gen<String> {
        Gen::vec_of(chars).map(|chars| chars.iter().collect())
    }

    /// Generate a string of ASCII letters.
    pub fn ascii_alpha() -> Gen<String> {
        Self::string_of(Gen::ascii_letter())
    }
}
