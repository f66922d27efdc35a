//! BlurHash decoding: parse the base83 fields back into a component grid
//! and reconstruct an image of the requested size.

use crate::aspect::scaled_dims;
use crate::base83;
use crate::color::srgb_to_linear;
use crate::dct;
use crate::error::BlurmarkError;
use crate::pixmap::{validate_dimensions, PixelMap};
use crate::prefix::split_prefix;
use crate::quant::{dequantise, max_ac_norm, LEVELS};
use crate::sampler::clamp_resolution;

/// Knobs for the high-level decode entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
    /// Output width; inferred from the size prefix when absent.
    pub width: Option<u32>,
    /// Output height; inferred from the size prefix when absent.
    pub height: Option<u32>,
    /// Contrast multiplier applied uniformly to AC components.
    pub punch: f64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            punch: 1.0,
        }
    }
}

/// Source accepted by [`decode_to_pixels`].
#[derive(Debug, Clone)]
pub enum DecodeSource<'a> {
    /// An already decoded map, returned unchanged.
    Map(PixelMap),
    /// A hash string, decoded at a size derived from its prefix or the
    /// requested resolution.
    Hash(&'a str),
}

impl From<PixelMap> for DecodeSource<'static> {
    fn from(map: PixelMap) -> Self {
        DecodeSource::Map(map)
    }
}

impl<'a> From<&'a str> for DecodeSource<'a> {
    fn from(hash: &'a str) -> Self {
        DecodeSource::Hash(hash)
    }
}

/// Extract the component counts `(x, y)` from a hash. A size prefix, if
/// present, is skipped.
///
/// # Examples
///
/// ```
/// use blurmark::components;
/// let (cx, cy) = components("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap();
/// assert_eq!((cx, cy), (4, 3));
/// ```
pub fn components(hash: &str) -> Result<(u32, u32), BlurmarkError> {
    let (_, body) = split_prefix(hash)?;
    parse_header(body)
}

/// Decode a hash into a flat RGB buffer of `width * height * 3` bytes.
///
/// A size prefix, if present, is skipped; the explicit dimensions win.
///
/// # Examples
///
/// ```
/// use blurmark::decode;
/// let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0).unwrap();
/// assert_eq!(pixels.len(), 32 * 32 * 3);
/// ```
pub fn decode(
    hash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, BlurmarkError> {
    let (_, body) = split_prefix(hash)?;
    decode_body(body, width, height, punch)
}

/// Decode a hash into a [`PixelMap`], resolving the output size from the
/// options and the size prefix.
///
/// Explicit width and height win. A lone edge plus a prefix derives the
/// other edge from the prefixed aspect. With neither edge given, the
/// prefix dimensions are adopted as-is; a hash with no prefix then has
/// nothing to size the output with and fails.
///
/// # Examples
///
/// ```
/// use blurmark::{decode_map, encode_map, DecodeOptions, EncodeOptions, PixelMap};
/// let map = PixelMap::from_raw(4, 2, vec![200; 24]).unwrap();
/// let hash = encode_map(&map, &EncodeOptions::default()).unwrap();
/// let out = decode_map(&hash, &DecodeOptions::default()).unwrap();
/// assert_eq!((out.width(), out.height()), (4, 2));
/// ```
pub fn decode_map(hash: &str, options: &DecodeOptions) -> Result<PixelMap, BlurmarkError> {
    let (prefix, body) = split_prefix(hash)?;
    let (width, height) = resolve_output_size(options.width, options.height, prefix)?;
    let data = decode_body(body, width, height, options.punch)?;
    PixelMap::from_raw(width, height, data)
}

/// Decode a hash (or pass a map through) at placeholder resolution.
///
/// For a hash with a size prefix, the output is the prefixed aspect scaled
/// so its shorter edge equals `resolution` (clamped into the supported
/// range); without a prefix the output is a `resolution` sided square.
pub fn decode_to_pixels<'a>(
    source: impl Into<DecodeSource<'a>>,
    resolution: u32,
) -> Result<PixelMap, BlurmarkError> {
    match source.into() {
        DecodeSource::Map(map) => Ok(map),
        DecodeSource::Hash(hash) => {
            let resolution = clamp_resolution(resolution);
            let (prefix, body) = split_prefix(hash)?;
            let (width, height) = match prefix {
                Some((w, h)) => scaled_dims(w, h, resolution),
                None => (resolution, resolution),
            };
            let data = decode_body(body, width, height, 1.0)?;
            PixelMap::from_raw(width, height, data)
        }
    }
}

fn parse_header(body: &str) -> Result<(u32, u32), BlurmarkError> {
    if body.len() < 6 {
        return Err(BlurmarkError::InvalidLength {
            expected: 6,
            actual: body.len(),
        });
    }
    let header = base83::decode(&body[0..1])?;
    Ok(((header % 9 + 1) as u32, (header / 9 + 1) as u32))
}

/// Parse a hash body into its linear component grid, with `punch` applied
/// to every AC component.
fn parse_grid(body: &str, punch: f64) -> Result<(Vec<[f64; 3]>, u32, u32), BlurmarkError> {
    let (components_x, components_y) = parse_header(body)?;
    let count = (components_x * components_y) as usize;
    let expected = 4 + 2 * count;
    if body.len() != expected {
        return Err(BlurmarkError::InvalidLength {
            expected,
            actual: body.len(),
        });
    }

    let quant_max_ac = base83::decode(&body[1..2])?;
    let max_value = max_ac_norm(quant_max_ac) * punch;

    let dc_value = base83::decode(&body[2..6])?;
    let mut grid = Vec::with_capacity(count);
    grid.push([
        srgb_to_linear((dc_value >> 16) as u8),
        srgb_to_linear(((dc_value >> 8) & 255) as u8),
        srgb_to_linear((dc_value & 255) as u8),
    ]);

    for index in 1..count {
        let start = 4 + index * 2;
        let field = base83::decode(&body[start..start + 2])?;
        grid.push([
            dequantise(field / (LEVELS * LEVELS)) * max_value,
            dequantise((field / LEVELS) % LEVELS) * max_value,
            dequantise(field % LEVELS) * max_value,
        ]);
    }
    Ok((grid, components_x, components_y))
}

fn decode_body(
    body: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, BlurmarkError> {
    validate_dimensions(width, height)?;
    let (grid, components_x, components_y) = parse_grid(body, punch)?;
    Ok(dct::reconstruct(
        &grid,
        components_x as usize,
        components_y as usize,
        width as usize,
        height as usize,
    ))
}

fn resolve_output_size(
    width: Option<u32>,
    height: Option<u32>,
    prefix: Option<(u32, u32)>,
) -> Result<(u32, u32), BlurmarkError> {
    match (width, height, prefix) {
        (Some(w), Some(h), _) => Ok((w, h)),
        (Some(w), None, Some((pw, ph))) => Ok((w, derive_edge(w, ph, pw))),
        (None, Some(h), Some((pw, ph))) => Ok((derive_edge(h, pw, ph), h)),
        (None, None, Some((pw, ph))) => Ok((pw, ph)),
        (w, h, None) => Err(BlurmarkError::InvalidDimensions {
            width: w.unwrap_or(0),
            height: h.unwrap_or(0),
            reason: "output size needs both edges or a size prefix",
        }),
    }
}

/// Scale `given` by the prefixed aspect `num/den` to find the missing edge.
fn derive_edge(given: u32, num: u32, den: u32) -> u32 {
    ((f64::from(given) * f64::from(num) / f64::from(den)).round() as u32).max(1)
}
