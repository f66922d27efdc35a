//! BlurHash encoding: project an RGB image onto the cosine grid and pack
//! the quantised components into a base83 string.

use crate::aspect::{resolve_components, ComponentChoice};
use crate::base83;
use crate::color::{linear_to_srgb, srgb_to_linear};
use crate::dct;
use crate::error::BlurmarkError;
use crate::pixmap::{validate_dimensions, LinearMap, PixelMap};
use crate::prefix::format_prefix;
use crate::quant::{max_ac_norm, quantise, quantise_max_ac, LEVELS};
use crate::sampler::{clamp_resolution, PixelSampler, DEFAULT_RESOLUTION};

/// Knobs for the high-level encode entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// How to pick component counts when the caller does not fix them.
    pub components: ComponentChoice,
    /// Prepend the `<W:H>` size prefix recording the source dimensions.
    pub prefix_size: bool,
    /// Sampling resolution handed to a [`PixelSampler`], clamped into
    /// [4, 128].
    pub resolution: u32,
    /// Must be set when the source is a pre-linearised map.
    pub source_is_linear: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            components: ComponentChoice::Infer,
            prefix_size: true,
            resolution: DEFAULT_RESOLUTION,
            source_is_linear: false,
        }
    }
}

/// Encode a flat RGB buffer into an unprefixed BlurHash string with
/// explicit component counts.
///
/// `pixels` holds `width * height * 3` bytes in row-major order.
///
/// # Errors
///
/// Fails when the component counts are outside 1..=9, the dimensions are
/// unusable, or the buffer length does not match.
///
/// # Examples
///
/// ```
/// use blurmark::encode;
/// let pixels = [255, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0];
/// let hash = encode(&pixels, 2, 2, 4, 3).unwrap();
/// assert_eq!(hash.len(), 4 + 2 * 4 * 3);
/// ```
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
) -> Result<String, BlurmarkError> {
    validate_components(components_x, components_y)?;
    validate_dimensions(width, height)?;
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(BlurmarkError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let samples: Vec<f64> = pixels.iter().map(|&b| srgb_to_linear(b)).collect();
    let grid = dct::project(
        &samples,
        width as usize,
        height as usize,
        components_x as usize,
        components_y as usize,
    );
    Ok(assemble(&grid, components_x, components_y))
}

/// Encode a [`PixelMap`], resolving the component choice against its
/// dimensions and optionally prepending the `<W:H>` prefix.
///
/// # Errors
///
/// Fails with [`BlurmarkError::InvalidLinearInput`] when
/// [`EncodeOptions::source_is_linear`] is set: the flag promises a
/// pre-linearised source, which a pixel map is not.
///
/// # Examples
///
/// ```
/// use blurmark::{encode_map, EncodeOptions, PixelMap};
/// let map = PixelMap::from_raw(2, 2, vec![128; 12]).unwrap();
/// let hash = encode_map(&map, &EncodeOptions::default()).unwrap();
/// assert!(hash.starts_with("<2:2>"));
/// ```
pub fn encode_map(map: &PixelMap, options: &EncodeOptions) -> Result<String, BlurmarkError> {
    if options.source_is_linear {
        return Err(BlurmarkError::InvalidLinearInput);
    }
    let (components_x, components_y) =
        resolve_components(options.components, map.width(), map.height());
    let body = encode(
        map.as_bytes(),
        map.width(),
        map.height(),
        components_x,
        components_y,
    )?;
    Ok(apply_prefix(body, map.width(), map.height(), options.prefix_size))
}

/// Encode a pre-linearised [`LinearMap`].
///
/// The caller must set [`EncodeOptions::source_is_linear`]; handing a
/// linear map to an entry point expecting sRGB silently produces garbage,
/// so the flag is demanded explicitly.
///
/// # Errors
///
/// Fails with [`BlurmarkError::InvalidLinearInput`] when the flag is unset.
pub fn encode_linear(map: &LinearMap, options: &EncodeOptions) -> Result<String, BlurmarkError> {
    if !options.source_is_linear {
        return Err(BlurmarkError::InvalidLinearInput);
    }
    let (components_x, components_y) =
        resolve_components(options.components, map.width(), map.height());
    validate_components(components_x, components_y)?;
    let grid = dct::project(
        map.samples(),
        map.width() as usize,
        map.height() as usize,
        components_x as usize,
        components_y as usize,
    );
    let body = assemble(&grid, components_x, components_y);
    Ok(apply_prefix(body, map.width(), map.height(), options.prefix_size))
}

/// Encode whatever image a [`PixelSampler`] stands in front of.
///
/// The requested resolution is clamped into the supported range (with a
/// warning) before the sampler runs.
pub fn encode_with_sampler<S: PixelSampler>(
    sampler: &S,
    options: &EncodeOptions,
) -> Result<String, BlurmarkError> {
    let resolution = clamp_resolution(options.resolution);
    let map = sampler.sample(resolution)?;
    encode_map(&map, options)
}

fn validate_components(components_x: u32, components_y: u32) -> Result<(), BlurmarkError> {
    if !(1..=9).contains(&components_x) {
        return Err(BlurmarkError::InvalidComponentCount {
            component: "x",
            value: components_x,
        });
    }
    if !(1..=9).contains(&components_y) {
        return Err(BlurmarkError::InvalidComponentCount {
            component: "y",
            value: components_y,
        });
    }
    Ok(())
}

fn apply_prefix(body: String, width: u32, height: u32, prefix_size: bool) -> String {
    if prefix_size {
        let mut hash = format_prefix(width, height);
        hash.push_str(&body);
        hash
    } else {
        body
    }
}

/// Pack a projected component grid into the hash body. Every field is
/// structurally in range (header <= 80, DC <= 0xFFFFFF, AC <= 18*361 +
/// 18*19 + 18), so assembly cannot fail.
fn assemble(grid: &[[f64; 3]], components_x: u32, components_y: u32) -> String {
    let dc = grid[0];
    let dc_value = (u64::from(linear_to_srgb(dc[0])) << 16)
        | (u64::from(linear_to_srgb(dc[1])) << 8)
        | u64::from(linear_to_srgb(dc[2]));

    let max_ac = grid[1..]
        .iter()
        .flat_map(|component| component.iter())
        .fold(0.0f64, |acc, &v| acc.max(v.abs()));
    let quant_max_ac = quantise_max_ac(max_ac);
    let norm = max_ac_norm(quant_max_ac);

    let header = u64::from(components_x - 1) + u64::from(components_y - 1) * 9;

    let mut buf = vec![0u8; 4 + 2 * grid.len()];
    let mut offset = base83::encode_to_buf(header, 1, &mut buf, 0);
    offset = base83::encode_to_buf(quant_max_ac, 1, &mut buf, offset);
    offset = base83::encode_to_buf(dc_value, 4, &mut buf, offset);
    for component in &grid[1..] {
        let field = quantise(component[0] / norm) * LEVELS * LEVELS
            + quantise(component[1] / norm) * LEVELS
            + quantise(component[2] / norm);
        offset = base83::encode_to_buf(field, 2, &mut buf, offset);
    }
    debug_assert_eq!(offset, buf.len());
    buf.into_iter().map(char::from).collect()
}
