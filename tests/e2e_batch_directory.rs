//! Directory batch scenario from the testable-properties list: N files,
//! `progress_cb` called exactly N+1 times in non-decreasing order, and every
//! decompressed bitmap pixel-identical to its source.

use image::{ImageBuffer, Rgba};
use tempfile::tempdir;

const N: u32 = 10;

fn write_random_png(path: &std::path::Path, seed: u32) {
    let width = 4 + (seed % 5);
    let height = 4 + (seed % 3);
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let v = ((x * 7 + y * 13 + seed * 29) % 251) as u8;
        Rgba([v, v.wrapping_mul(3), v.wrapping_mul(5), 255])
    });
    img.save(path).unwrap();
}

#[test]
fn n_file_directory_round_trips_with_correct_progress_ticks() {
    let src_dir = tempdir().unwrap();
    let container_dir = tempdir().unwrap();
    let bitmap_dir = tempdir().unwrap();

    for i in 0..N {
        write_random_png(&src_dir.path().join(format!("img{i:02}.png")), i);
    }

    let mut progress_calls = Vec::new();
    pixz::start_compression(
        src_dir.path(),
        container_dir.path(),
        false,
        4,
        |p| progress_calls.push(p),
        |_| {},
    )
    .unwrap();
    assert_eq!(progress_calls.len(), N as usize + 1);
    assert!(progress_calls.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*progress_calls.last().unwrap(), 100);

    let mut decompress_progress = Vec::new();
    pixz::start_decompression(
        container_dir.path(),
        bitmap_dir.path(),
        false,
        4,
        |p| decompress_progress.push(p),
        |_| {},
    )
    .unwrap();
    assert_eq!(decompress_progress.len(), N as usize + 1);

    for i in 0..N {
        let stem = format!("img{i:02}");
        let (_, _, original) = pixz::raster::load_pixels(&src_dir.path().join(format!("{stem}.png"))).unwrap();
        let (_, _, decoded) = pixz::raster::load_pixels(&bitmap_dir.path().join(format!("{stem}.bmp"))).unwrap();
        assert_eq!(decoded, original, "file {stem} mismatch");
    }
}

#[test]
fn both_backends_produce_identical_containers_over_the_directory() {
    let src_dir = tempdir().unwrap();
    for i in 0..N {
        write_random_png(&src_dir.path().join(format!("img{i:02}.png")), i);
    }

    let scalar_dir = tempdir().unwrap();
    let vector_dir = tempdir().unwrap();
    pixz::start_compression(src_dir.path(), scalar_dir.path(), false, 3, |_| {}, |_| {}).unwrap();
    pixz::start_compression(src_dir.path(), vector_dir.path(), true, 3, |_| {}, |_| {}).unwrap();

    for i in 0..N {
        let stem = format!("img{i:02}.lz77");
        let a = std::fs::read(scalar_dir.path().join(&stem)).unwrap();
        let b = std::fs::read(vector_dir.path().join(&stem)).unwrap();
        assert_eq!(a, b, "backend mismatch for {stem}");
    }
}
