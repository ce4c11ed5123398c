//! Compile-time configuration constants for the codec, container and batch
//! layers. Grouped the way `lz4r::config` groups its LZ4-specific tunables.

/// Sliding window size, in pixels. A match candidate more than this many
/// pixels behind the cursor is no longer eligible.
pub const WINDOW_SIZE: usize = 4096;

/// Number of buckets in the `head` hash table (2^16, one per 16-bit hash).
pub const HASH_TABLE_SIZE: usize = 1 << 16;

/// Sentinel stored in `head`/`prev` slots that have never been written.
pub const NO_CANDIDATE: u32 = u32::MAX;

/// Maximum number of hash-chain candidates visited per match attempt.
pub const MAX_CHAIN: usize = 32;

/// Maximum match length a single token can encode.
pub const MAX_MATCH: usize = 64;

/// Encoded size of one token: three little-endian `u32` fields.
pub const TOKEN_SIZE: usize = 12;

/// Byte size of the `head` + `prev` working tables a compressor needs.
/// `head` is `HASH_TABLE_SIZE` u32s, `prev` is `WINDOW_SIZE` u32s.
pub const WORK_BUF_SIZE: usize = (HASH_TABLE_SIZE + WINDOW_SIZE) * 4;

/// Container magic number, little-endian on the wire: `b"77ZL"` reversed.
pub const CONTAINER_MAGIC: u32 = 0x4C5A_3737;

/// Encoded size of the container header (magic + width + height + payload len).
pub const CONTAINER_HEADER_SIZE: usize = 20;

/// Upper bound on a container's declared payload length. Anything larger is
/// treated as a corrupt header rather than an attempt to allocate it.
pub const MAX_CONTAINER_PAYLOAD: u64 = 512 * 1024 * 1024;

/// File extensions `batch::start_compression` treats as source images.
pub const COMPRESS_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif"];

/// Extension `batch::start_decompression` looks for in its source directory,
/// and the extension `batch::start_compression` writes its containers with.
pub const CONTAINER_EXTENSION: &str = "lz77";

/// Half-width of the square blur kernel: a 41x41 box is `2 * 20 + 1`.
pub const BLUR_KERNEL_HALF_WIDTH: i64 = 20;

/// Number of samples a fully edge-clamped blur kernel always contributes.
pub const BLUR_KERNEL_SAMPLES: u64 = (2 * BLUR_KERNEL_HALF_WIDTH as u64 + 1).pow(2);

/// Default worker count when the caller does not specify one: all available
/// cores, falling back to a single thread if the count cannot be determined.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
