//! Disc-masked 41x41 box blur over a 24bpp RGB buffer, parallel across row
//! bands. Row-level data parallelism over a read-only snapshot, the same
//! shape as `lz4r::io::compress_mt`'s `into_par_iter().map().collect()` use
//! of rayon, except here each row writes directly into its own disjoint
//! slice of the caller's buffer rather than collecting into a new one.

use rayon::prelude::*;

use crate::config::{BLUR_KERNEL_HALF_WIDTH, BLUR_KERNEL_SAMPLES};

/// Blurs every pixel within `radius` of `(center_x, center_y)` in place.
/// `pixels` is row-major 24bpp RGB (3 bytes per pixel, `width * height * 3`
/// bytes total). Out-of-disc pixels are left untouched. Capped at
/// `threads.max(1)` worker threads, further bounded by the available
/// hardware concurrency.
pub fn blur_inplace(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    center_x: i64,
    center_y: i64,
    radius: i64,
    threads: usize,
) {
    if width == 0 || height == 0 || radius <= 0 {
        return;
    }
    let stride = width * 3;
    let snapshot = pixels.to_vec();
    let nb_threads = threads
        .max(1)
        .min(crate::config::default_worker_count());
    let radius_sq = radius * radius;

    let run = || {
        pixels
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                let dy = y as i64 - center_y;
                for x in 0..width {
                    let dx = x as i64 - center_x;
                    if dx * dx + dy * dy > radius_sq {
                        continue;
                    }
                    let [r, g, b] = blur_pixel(&snapshot, width, height, stride, x, y);
                    let o = x * 3;
                    row[o] = r;
                    row[o + 1] = g;
                    row[o + 2] = b;
                }
            });
    };

    if let Ok(pool) = rayon::ThreadPoolBuilder::new().num_threads(nb_threads).build() {
        pool.install(run);
    } else {
        run();
    }
}

/// Edge-clamped 41x41 box mean of one pixel's neighbourhood in `snapshot`.
fn blur_pixel(snapshot: &[u8], width: usize, height: usize, stride: usize, x: usize, y: usize) -> [u8; 3] {
    let mut sums = [0u64; 3];
    for dy in -BLUR_KERNEL_HALF_WIDTH..=BLUR_KERNEL_HALF_WIDTH {
        let ny = (y as i64 + dy).clamp(0, height as i64 - 1) as usize;
        let row_off = ny * stride;
        for dx in -BLUR_KERNEL_HALF_WIDTH..=BLUR_KERNEL_HALF_WIDTH {
            let nx = (x as i64 + dx).clamp(0, width as i64 - 1) as usize;
            let idx = row_off + nx * 3;
            sums[0] += snapshot[idx] as u64;
            sums[1] += snapshot[idx + 1] as u64;
            sums[2] += snapshot[idx + 2] as u64;
        }
    }
    [
        (sums[0] / BLUR_KERNEL_SAMPLES) as u8,
        (sums[1] / BLUR_KERNEL_SAMPLES) as u8,
        (sums[2] / BLUR_KERNEL_SAMPLES) as u8,
    ]
}
