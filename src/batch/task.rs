//! The per-file `Task` record: every buffer a codec call touches is owned
//! here, allocated in Phase 1 and freed only after Phase 3, so Phase 2 never
//! allocates.

use std::path::PathBuf;

use crate::error::PixzError;

/// `PENDING -> LOADED -> (COMPUTED | EXCEPTION | EMPTY) -> (WRITTEN | SKIPPED)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Loaded,
    Computed,
    Exception,
    Empty,
    Written,
    Skipped,
}

/// One file's worth of work, carried through all three phases. Compress and
/// decompress tasks share this shape; whichever set of buffers a direction
/// doesn't use is left empty.
pub struct Task {
    pub source_path: PathBuf,
    pub stem: String,
    pub state: TaskState,
    pub load_ok: bool,
    pub width: u32,
    pub height: u32,

    /// Compress only: decoded input pixels.
    pub pixels: Vec<u32>,
    /// Compress only: 272 KiB hash-chain scratch space.
    pub work: Vec<u8>,
    /// Compress only: pre-sized output buffer (`pixel_count * 12 + 64`).
    pub out_tokens: Vec<u8>,

    /// Decompress only: the container's token payload.
    pub token_payload: Vec<u8>,
    /// Decompress only: pre-sized, zero-filled output pixel buffer.
    pub out_pixels: Vec<u32>,

    /// Bytes written (compress) or pixels written (decompress) by the codec
    /// call, set only in Phase 2.
    pub out_len: usize,
    pub exception: Option<PixzError>,
}

impl Task {
    fn stem_of(path: &std::path::Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
            .to_string()
    }

    /// Builds a `LOADED` compress task from already-decoded pixels.
    pub fn for_compress(source_path: PathBuf, width: u32, height: u32, pixels: Vec<u32>) -> Self {
        let pixel_count = pixels.len();
        Task {
            stem: Self::stem_of(&source_path),
            source_path,
            state: TaskState::Loaded,
            load_ok: true,
            width,
            height,
            pixels,
            work: vec![0u8; crate::config::WORK_BUF_SIZE],
            out_tokens: vec![0u8; pixel_count * 12 + 64],
            token_payload: Vec::new(),
            out_pixels: Vec::new(),
            out_len: 0,
            exception: None,
        }
    }

    /// Builds a `PENDING` compress task for a source that failed to load.
    pub fn failed_compress(source_path: PathBuf, exception: PixzError) -> Self {
        Task {
            stem: Self::stem_of(&source_path),
            source_path,
            state: TaskState::Pending,
            load_ok: false,
            width: 0,
            height: 0,
            pixels: Vec::new(),
            work: Vec::new(),
            out_tokens: Vec::new(),
            token_payload: Vec::new(),
            out_pixels: Vec::new(),
            out_len: 0,
            exception: Some(exception),
        }
    }

    /// Builds a `LOADED` decompress task from an already-parsed container.
    pub fn for_decompress(source_path: PathBuf, width: u32, height: u32, token_payload: Vec<u8>) -> Self {
        let pixel_count = width as usize * height as usize;
        Task {
            stem: Self::stem_of(&source_path),
            source_path,
            state: TaskState::Loaded,
            load_ok: true,
            width,
            height,
            pixels: Vec::new(),
            work: Vec::new(),
            out_tokens: Vec::new(),
            token_payload,
            out_pixels: vec![0u32; pixel_count],
            out_len: 0,
            exception: None,
        }
    }

    /// Builds a `PENDING` decompress task for a container that failed to
    /// load or validate.
    pub fn failed_decompress(source_path: PathBuf, exception: PixzError) -> Self {
        Task {
            stem: Self::stem_of(&source_path),
            source_path,
            state: TaskState::Pending,
            load_ok: false,
            width: 0,
            height: 0,
            pixels: Vec::new(),
            work: Vec::new(),
            out_tokens: Vec::new(),
            token_payload: Vec::new(),
            out_pixels: Vec::new(),
            out_len: 0,
            exception: Some(exception),
        }
    }
}
