//! Error types for BlurHash encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a BlurHash string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurmarkError {
    /// The hash string (or its body, once the size prefix is stripped) has
    /// the wrong length for its component counts.
    #[error("invalid BlurHash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// The required length.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// A component count is outside the valid range (1..=9).
    #[error("component count out of range: {component} = {value} (must be 1..=9)")]
    InvalidComponentCount {
        /// Which component axis ("x" or "y").
        component: &'static str,
        /// The invalid value.
        value: u32,
    },

    /// An invalid character was encountered during base83 decoding.
    #[error("invalid base83 character: {0:?}")]
    InvalidBase83Character(char),

    /// A base83 string carries more digits than a 64-bit accumulator holds.
    #[error("base83 string {0:?} overflows a 64-bit value")]
    Base83Overflow(String),

    /// Fixed-width base83 encoding was asked to pack a value that does not fit.
    #[error("value {value} does not fit in {digits} base83 digits")]
    ValueTooLarge {
        /// The value that was supplied.
        value: u64,
        /// The requested field width.
        digits: usize,
    },

    /// The image dimensions are unusable (zero, oversized, or jagged rows).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
        /// Why the dimensions are invalid.
        reason: &'static str,
    },

    /// A flat pixel buffer does not hold `width * height * 3` entries.
    #[error("pixel buffer length {actual} does not match expected {expected}")]
    BufferSizeMismatch {
        /// The required buffer length.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// A pre-linearised map was supplied without the linear-source flag set.
    #[error("source is a linear map but `source_is_linear` is not set")]
    InvalidLinearInput,

    /// The `<W:H>` size prefix is malformed.
    #[error("invalid size prefix: {0}")]
    InvalidSizePrefix(String),

    /// A sampling resolution outside the supported range. Callers clamp the
    /// value and emit a warning rather than failing.
    #[error("resolution {requested} outside supported range {min}..={max}")]
    ResolutionOutOfRange {
        /// The resolution that was requested.
        requested: u32,
        /// Smallest supported resolution.
        min: u32,
        /// Largest supported resolution.
        max: u32,
    },
}
