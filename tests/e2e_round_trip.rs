//! End-to-end round trip: a directory of synthetic images compressed then
//! decompressed must reproduce pixel-identical bitmaps.

use image::{ImageBuffer, Rgba};
use tempfile::tempdir;

fn write_test_png(path: &std::path::Path, width: u32, height: u32, seed: u32) {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let v = (x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17)).wrapping_add(seed)) as u8;
        Rgba([v, v.wrapping_add(1), v.wrapping_add(2), 255])
    });
    img.save(path).unwrap();
}

#[test]
fn compress_then_decompress_reproduces_the_source_pixels() {
    let src_dir = tempdir().unwrap();
    let container_dir = tempdir().unwrap();
    let bitmap_dir = tempdir().unwrap();

    write_test_png(&src_dir.path().join("a.png"), 9, 6, 1);
    write_test_png(&src_dir.path().join("b.png"), 3, 3, 99);

    let mut log = Vec::new();
    pixz::start_compression(
        src_dir.path(),
        container_dir.path(),
        false,
        2,
        |_| {},
        |msg| log.push(msg.to_string()),
    )
    .unwrap();

    assert!(container_dir.path().join("a.lz77").exists());
    assert!(container_dir.path().join("b.lz77").exists());

    pixz::start_decompression(
        container_dir.path(),
        bitmap_dir.path(),
        false,
        2,
        |_| {},
        |msg| log.push(msg.to_string()),
    )
    .unwrap();

    for (name, width, height, seed) in [("a", 9u32, 6u32, 1u32), ("b", 3, 3, 99)] {
        let (_, _, original) = pixz::raster::load_pixels(&src_dir.path().join(format!("{name}.png"))).unwrap();
        let (w, h, decoded) = pixz::raster::load_pixels(&bitmap_dir.path().join(format!("{name}.bmp"))).unwrap();
        assert_eq!((w, h), (width, height));
        assert_eq!(decoded, original, "seed {seed} mismatch");
    }
}

#[test]
fn empty_source_directory_produces_no_containers_and_still_reports_progress() {
    let src_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let mut ticks = Vec::new();
    pixz::start_compression(src_dir.path(), out_dir.path(), false, 1, |p| ticks.push(p), |_| {}).unwrap();
    assert_eq!(ticks, vec![100]);
    assert_eq!(std::fs::read_dir(out_dir.path()).unwrap().count(), 0);
}
