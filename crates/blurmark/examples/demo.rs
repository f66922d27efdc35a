//! Encode and decode walkthrough.
//!
//! Run with: cargo run --example demo

use blurmark::{
    components, decode_map, encode_map, DecodeOptions, EncodeOptions, PixelMap,
};

fn main() {
    // A 6x4 gradient: red rises left to right, green top to bottom.
    let width = 6usize;
    let height = 4usize;
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x as f64 / (width - 1) as f64) * 255.0) as u8);
            pixels.push(((y as f64 / (height - 1) as f64) * 255.0) as u8);
            pixels.push(128);
        }
    }
    let map = PixelMap::from_raw(width as u32, height as u32, pixels).expect("valid map");
    println!("source: {}x{} gradient", map.width(), map.height());

    // Component counts come from the aspect ratio, and the hash carries the
    // source size in its prefix.
    let hash = encode_map(&map, &EncodeOptions::default()).expect("encode");
    let (cx, cy) = components(&hash).expect("valid hash");
    println!("hash:   {hash}");
    println!("        {cx}x{cy} components, {} characters", hash.len());

    // No dimensions needed on the way back; the prefix remembers them.
    let decoded = decode_map(&hash, &DecodeOptions::default()).expect("decode");
    println!("decode: {}x{} pixels", decoded.width(), decoded.height());
    println!("        top-left {:?}", decoded.pixel(0, 0));
    println!(
        "        bottom-right {:?}",
        decoded.pixel(decoded.width() - 1, decoded.height() - 1)
    );

    // Decoding wider keeps the prefixed aspect.
    let wide = decode_map(
        &hash,
        &DecodeOptions {
            width: Some(120),
            ..DecodeOptions::default()
        },
    )
    .expect("decode wide");
    println!("scaled: {}x{} pixels", wide.width(), wide.height());
}
