//! The pixel-sampler collaborator seam.
//!
//! The codec never reads image files itself. Callers that start from a full
//! image hand encoding a [`PixelSampler`], which owns the decode-and-shrink
//! step and returns the small [`PixelMap`] the transform runs on.

use crate::error::BlurmarkError;
use crate::pixmap::PixelMap;

/// Smallest supported sampling resolution.
pub const MIN_RESOLUTION: u32 = 4;

/// Largest supported sampling resolution.
pub const MAX_RESOLUTION: u32 = 128;

/// Resolution used when the caller does not pick one.
pub const DEFAULT_RESOLUTION: u32 = 64;

/// Produces a downsampled [`PixelMap`] from some image source.
///
/// Implementations must return a map whose shorter edge equals `resolution`
/// and whose longer edge preserves the source aspect; see
/// [`scaled_dims`](crate::aspect::scaled_dims) for the expected geometry.
pub trait PixelSampler {
    /// Sample the source at the given (already clamped) resolution.
    fn sample(&self, resolution: u32) -> Result<PixelMap, BlurmarkError>;
}

/// Clamp a requested resolution into `[MIN_RESOLUTION, MAX_RESOLUTION]`,
/// warning when the request was out of bounds. Out-of-range requests are
/// not fatal.
pub(crate) fn clamp_resolution(requested: u32) -> u32 {
    if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&requested) {
        return requested;
    }
    let clamped = requested.clamp(MIN_RESOLUTION, MAX_RESOLUTION);
    let err = BlurmarkError::ResolutionOutOfRange {
        requested,
        min: MIN_RESOLUTION,
        max: MAX_RESOLUTION,
    };
    tracing::warn!(%err, clamped, "sampling resolution out of range");
    clamped
}
