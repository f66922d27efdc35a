//! The separable cosine transform at the heart of the codec.
//!
//! Projection and reconstruction share the same basis,
//! `cos(PI * k * t / extent)`, evaluated once per axis into flat tables so
//! the pixel loops are pure multiply-accumulate. The DC term carries norm 1
//! and every AC term norm 2 on the encode side, which pre-absorbs the
//! inverse-transform weight: reconstruction applies no norm at all.

use std::f64::consts::PI;

use crate::color::linear_to_srgb;

/// `cos(PI * k * t / extent)` for every component `k` and coordinate `t`,
/// flattened component-major (`k * extent + t`).
fn cosine_table(components: usize, extent: usize) -> Vec<f64> {
    let extent_f = extent as f64;
    (0..components)
        .flat_map(|k| {
            (0..extent).map(move |t| (PI * k as f64 * t as f64 / extent_f).cos())
        })
        .collect()
}

/// Project linear-light samples onto an `x_components * y_components`
/// cosine grid.
///
/// `samples` is a flat row-major buffer, three channels per pixel. The
/// returned grid is y-major; index 0 is the DC component, the average
/// colour of the image.
pub(crate) fn project(
    samples: &[f64],
    width: usize,
    height: usize,
    x_components: usize,
    y_components: usize,
) -> Vec<[f64; 3]> {
    debug_assert_eq!(samples.len(), width * height * 3);

    let cos_x = cosine_table(x_components, width);
    let cos_y = cosine_table(y_components, height);
    let scale = 1.0 / (width as f64 * height as f64);

    let mut grid = Vec::with_capacity(x_components * y_components);
    for j in 0..y_components {
        for i in 0..x_components {
            let norm = if i == 0 && j == 0 { 1.0 } else { 2.0 };
            let mut sum = [0.0f64; 3];
            for y in 0..height {
                let cy = cos_y[j * height + y];
                let row = y * width;
                for x in 0..width {
                    let basis = norm * cos_x[i * width + x] * cy;
                    let px = (row + x) * 3;
                    sum[0] += basis * samples[px];
                    sum[1] += basis * samples[px + 1];
                    sum[2] += basis * samples[px + 2];
                }
            }
            grid.push([sum[0] * scale, sum[1] * scale, sum[2] * scale]);
        }
    }
    grid
}

/// Reconstruct sRGB pixels of the requested size from a component grid.
///
/// The grid is y-major as produced by [`project`] (or parsed from a hash).
/// Output is a flat row-major RGB buffer.
pub(crate) fn reconstruct(
    grid: &[[f64; 3]],
    x_components: usize,
    y_components: usize,
    width: usize,
    height: usize,
) -> Vec<u8> {
    debug_assert_eq!(grid.len(), x_components * y_components);

    let cos_x = cosine_table(x_components, width);
    let cos_y = cosine_table(y_components, height);

    let mut pixels = vec![0u8; width * height * 3];
    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f64; 3];
            for j in 0..y_components {
                let cy = cos_y[j * height + y];
                for i in 0..x_components {
                    let basis = cos_x[i * width + x] * cy;
                    let component = grid[j * x_components + i];
                    sum[0] += component[0] * basis;
                    sum[1] += component[1] * basis;
                    sum[2] += component[2] * basis;
                }
            }
            let out = (y * width + x) * 3;
            pixels[out] = linear_to_srgb(sum[0]);
            pixels[out + 1] = linear_to_srgb(sum[1]);
            pixels[out + 2] = linear_to_srgb(sum[2]);
        }
    }
    pixels
}
