//! The optional `<W:H>` size prefix carried in front of a hash body.
//!
//! The prefix records the source image's native dimensions so decoders can
//! reproduce its aspect without out-of-band information. A hash without a
//! leading `<` has no prefix.

use crate::error::BlurmarkError;

/// Render the prefix for a W×H source.
pub(crate) fn format_prefix(width: u32, height: u32) -> String {
    format!("<{width}:{height}>")
}

/// Split an optionally prefixed hash into its parsed prefix and body.
pub(crate) fn split_prefix(hash: &str) -> Result<(Option<(u32, u32)>, &str), BlurmarkError> {
    let Some(rest) = hash.strip_prefix('<') else {
        return Ok((None, hash));
    };
    let Some((dims, body)) = rest.split_once('>') else {
        return Err(BlurmarkError::InvalidSizePrefix(
            "missing closing '>'".into(),
        ));
    };
    let Some((w, h)) = dims.split_once(':') else {
        return Err(BlurmarkError::InvalidSizePrefix(format!(
            "missing ':' in {dims:?}"
        )));
    };
    let width: u32 = w
        .parse()
        .map_err(|_| BlurmarkError::InvalidSizePrefix(format!("bad width {w:?}")))?;
    let height: u32 = h
        .parse()
        .map_err(|_| BlurmarkError::InvalidSizePrefix(format!("bad height {h:?}")))?;
    if width == 0 || height == 0 {
        return Err(BlurmarkError::InvalidSizePrefix(
            "dimensions must be positive".into(),
        ));
    }
    Ok((Some((width, height)), body))
}
