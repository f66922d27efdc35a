//! sRGB and linear-light conversion.
//!
//! Both directions run through precomputed tables: 256 entries for sRGB
//! bytes going linear, 4096 for the return trip. The inverse table is fine
//! enough that converting any byte to linear and back reproduces it exactly.

use std::sync::OnceLock;

/// Entries in the linear-to-sRGB table. 4096 gives 12-bit coverage of the
/// linear range, enough for exact byte round-trips at 4 KiB.
const INVERSE_TABLE_SIZE: usize = 4096;

/// IEC 61966-2-1 decode: one sRGB byte to linear light in [0, 1].
fn srgb_to_linear_exact(byte: u8) -> f64 {
    let v = f64::from(byte) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encode: linear light to an sRGB byte, clamped.
fn linear_to_srgb_exact(linear: f64) -> u8 {
    let l = linear.clamp(0.0, 1.0);
    let value = if l <= 0.003_130_8 {
        l * 12.92 * 255.0 + 0.5
    } else {
        (1.055 * l.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5
    };
    value.clamp(0.0, 255.0) as u8
}

fn forward_table() -> &'static [f64; 256] {
    static TABLE: OnceLock<[f64; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0.0; 256];
        for (byte, slot) in table.iter_mut().enumerate() {
            *slot = srgb_to_linear_exact(byte as u8);
        }
        table
    })
}

fn inverse_table() -> &'static [u8; INVERSE_TABLE_SIZE] {
    static TABLE: OnceLock<[u8; INVERSE_TABLE_SIZE]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u8; INVERSE_TABLE_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = linear_to_srgb_exact(i as f64 / (INVERSE_TABLE_SIZE - 1) as f64);
        }
        table
    })
}

/// Convert an sRGB byte value (0..=255) to linear light (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use blurmark::color::srgb_to_linear;
/// assert!(srgb_to_linear(0).abs() < 1e-10);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-10);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    forward_table()[value as usize]
}

/// Convert linear light to an sRGB byte value. Inputs outside [0.0, 1.0]
/// are clamped.
///
/// # Examples
///
/// ```
/// use blurmark::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(-0.5), 0);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    let index = (clamped * (INVERSE_TABLE_SIZE - 1) as f64 + 0.5) as usize;
    inverse_table()[index.min(INVERSE_TABLE_SIZE - 1)]
}

/// Compute `sign(value) * |value|^exp`, with `sign(0) = 0`.
///
/// # Examples
///
/// ```
/// use blurmark::color::sign_pow;
/// assert!((sign_pow(4.0, 0.5) - 2.0).abs() < 1e-10);
/// assert!((sign_pow(-4.0, 0.5) + 2.0).abs() < 1e-10);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}
