//! Dual interchangeable codec back ends.
//!
//! The compressor's inner equal-run counter can be scalar or 4-pixel-block
//! vectorized; the decoder has no such split (its block-copy optimization is
//! unconditional whenever `offset >= 4`, see `codec::decompress`), so both
//! back ends decode identically. This is a compiled-in trait-object pair
//! rather than a runtime-loaded shared library: selecting a back end is a
//! constructor-time choice, not a dynamic-load step.

use crate::codec::compress::{self, match_len_scalar, match_len_vectorized};
use crate::codec::decompress;
use crate::error::PixzError;

/// A compiled-in codec implementation. `ScalarBackend` and
/// `VectorizedBackend` must produce byte-identical compressed output for
/// identical input (see the `e2e_backend_equivalence` integration test).
pub trait CodecBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn compress(
        &self,
        src: &[u32],
        dst: &mut [u8],
        work: Option<&mut [u8]>,
    ) -> Result<usize, PixzError>;

    fn decompress(&self, src: &[u8], dst: &mut [u32]) -> Result<usize, PixzError> {
        decompress::decompress(src, dst)
    }
}

/// Pixel-by-pixel match extension. The baseline, always-correct back end.
pub struct ScalarBackend;

impl CodecBackend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn compress(
        &self,
        src: &[u32],
        dst: &mut [u8],
        work: Option<&mut [u8]>,
    ) -> Result<usize, PixzError> {
        compress::compress(src, dst, work, match_len_scalar)
    }
}

/// 4-pixel-block match extension with a scalar tail.
pub struct VectorizedBackend;

impl CodecBackend for VectorizedBackend {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn compress(
        &self,
        src: &[u32],
        dst: &mut [u8],
        work: Option<&mut [u8]>,
    ) -> Result<usize, PixzError> {
        compress::compress(src, dst, work, match_len_vectorized)
    }
}

/// Selects a back end the way the orchestrator's `use_asm` flag does: `true`
/// picks the vectorized back end, `false` the scalar one.
pub fn select_backend(use_asm: bool) -> Box<dyn CodecBackend> {
    if use_asm {
        Box::new(VectorizedBackend)
    } else {
        Box::new(ScalarBackend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_backends_round_trip_through_each_other() {
        let src: Vec<u32> = (0..300).map(|i| (i % 13) as u32).collect();
        let mut work = vec![0u8; crate::config::WORK_BUF_SIZE];
        let mut dst = vec![0u8; src.len() * 12];
        let scalar = select_backend(false);
        let n = scalar.compress(&src, &mut dst, Some(&mut work)).unwrap();

        let vectorized = select_backend(true);
        let mut out = vec![0u32; src.len()];
        let decoded = vectorized.decompress(&dst[..n], &mut out).unwrap();
        assert_eq!(decoded, src.len());
        assert_eq!(out, src);
    }
}
