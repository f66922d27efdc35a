//! # blurmark
//!
//! [BlurHash](https://blurha.sh/) encoding and decoding in pure Rust, with
//! two additions to the public format: an optional `<W:H>` size prefix that
//! carries the source's native aspect inside the string, and automatic
//! component-count selection from that aspect when the caller does not pick
//! one.
//!
//! ## Quick start
//!
//! ```
//! use blurmark::{decode, encode};
//!
//! // Encode: image pixels -> BlurHash string
//! let pixels = vec![128u8; 4 * 4 * 3]; // 4x4 gray image
//! let hash = encode(&pixels, 4, 4, 4, 3).unwrap();
//!
//! // Decode: BlurHash string -> image pixels
//! let decoded = decode(&hash, 32, 32, 1.0).unwrap();
//! assert_eq!(decoded.len(), 32 * 32 * 3);
//! ```
//!
//! ## Size-prefixed hashes
//!
//! ```
//! use blurmark::{decode_map, encode_map, DecodeOptions, EncodeOptions, PixelMap};
//!
//! let map = PixelMap::from_raw(8, 6, vec![64u8; 8 * 6 * 3]).unwrap();
//! let hash = encode_map(&map, &EncodeOptions::default()).unwrap();
//! assert!(hash.starts_with("<8:6>"));
//!
//! // The prefix lets the decoder reproduce the aspect on its own.
//! let out = decode_map(&hash, &DecodeOptions::default()).unwrap();
//! assert_eq!((out.width(), out.height()), (8, 6));
//! ```

pub mod aspect;
pub mod base83;
pub mod color;
pub mod error;
pub mod pixmap;
pub mod quant;
pub mod sampler;

mod dct;
mod decode_impl;
mod encode_impl;
mod prefix;

// Re-export the primary surface at the crate root.
pub use aspect::{
    gcd, infer_components, orientation, reduce, scaled_dims, ComponentChoice, Orientation,
};
pub use color::{linear_to_srgb, sign_pow, srgb_to_linear};
pub use decode_impl::{
    components, decode, decode_map, decode_to_pixels, DecodeOptions, DecodeSource,
};
pub use encode_impl::{encode, encode_linear, encode_map, encode_with_sampler, EncodeOptions};
pub use error::BlurmarkError;
pub use pixmap::{LinearMap, PixelMap};
pub use sampler::{PixelSampler, DEFAULT_RESOLUTION, MAX_RESOLUTION, MIN_RESOLUTION};
