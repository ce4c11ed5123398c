//! `pixz` — a batch image codec.
//!
//! Two subsystems make up the core: [`codec`], a domain-specialised LZ77
//! variant whose literal/match unit is a packed RGBA pixel rather than a
//! byte; and [`batch`], a three-phase orchestrator (pre-load / measured
//! compute / post-write) that drives the codec across a directory of files
//! with a fixed-size worker pool. [`container`] frames compressed output on
//! disk, [`raster`] backs the raster load/save black box, and [`blur`] is a
//! small independent per-pixel kernel.

pub mod batch;
pub mod blur;
pub mod cli;
pub mod codec;
pub mod config;
pub mod container;
pub mod error;
pub mod raster;
pub mod threadpool;
pub mod util;

pub use batch::{start_compression, start_decompression};
pub use blur::blur_inplace;
pub use codec::{select_backend, CodecBackend};
pub use error::PixzError;

use std::sync::atomic::{AtomicU32, Ordering};

/// Crate-wide diagnostic verbosity, in the style of `lz4r`'s `DISPLAY_LEVEL`:
/// 0 = silent, 1 = errors only, 2 = normal, 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally prints to stderr at or above `level`. Used only by the CLI
/// binary layer for its own operational diagnostics (pool setup, file
/// enumeration) — library-level per-task status always goes through the
/// `log_cb` contract of `batch::start_compression` / `start_decompression`,
/// never through this macro.
#[macro_export]
macro_rules! displevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}
