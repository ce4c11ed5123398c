//! Corruption rejection: scenario 8 (a token whose offset exceeds the
//! current output position decodes to nothing) plus the batch-level
//! behaviour of skipping unreadable containers without aborting the batch.

use pixz::codec::{select_backend, Token};
use pixz::config::CONTAINER_MAGIC;
use pixz::PixzError;
use tempfile::tempdir;

#[test]
fn decoder_rejects_a_forward_reference_at_position_zero() {
    let mut stream = vec![0u8; 12];
    stream[0..4].copy_from_slice(&1u32.to_le_bytes()); // offset = 1
    stream[4..8].copy_from_slice(&1u32.to_le_bytes()); // length = 1
    stream[8..12].copy_from_slice(&0u32.to_le_bytes()); // next = 0

    let backend = select_backend(false);
    let mut dst = [0u32; 4];
    let err = backend.decompress(&stream, &mut dst).unwrap_err();
    assert!(matches!(err, PixzError::CorruptStream));
}

#[test]
fn decoder_ignores_a_truncated_trailing_token() {
    let mut bytes = vec![0u8; 12 + 5];
    // A valid literal token followed by 5 dangling bytes (fewer than one
    // full token) — these must be silently ignored, not treated as corrupt.
    let t = Token::literal(42);
    let mut pos = 0;
    t.write(&mut bytes[..12], &mut pos).unwrap();

    let backend = select_backend(false);
    let mut dst = [0u32; 1];
    let n = backend.decompress(&bytes, &mut dst).unwrap();
    assert_eq!(n, 1);
    assert_eq!(dst[0], 42);
}

#[test]
fn batch_decompress_skips_a_container_with_bad_magic_without_aborting() {
    let src_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    // A well-formed container alongside a corrupt one.
    let good_tokens = {
        let t = Token::literal(7);
        let mut buf = [0u8; 12];
        let mut pos = 0;
        t.write(&mut buf, &mut pos).unwrap();
        buf
    };
    pixz::container::write_container(&src_dir.path().join("good.lz77"), 1, 1, &good_tokens).unwrap();

    let mut bad_header = vec![0u8; 20 + 12];
    bad_header[0..4].copy_from_slice(&(CONTAINER_MAGIC.wrapping_add(1)).to_le_bytes());
    std::fs::write(src_dir.path().join("bad.lz77"), &bad_header).unwrap();

    let mut logs = Vec::new();
    pixz::start_decompression(src_dir.path(), out_dir.path(), false, 2, |_| {}, |msg| logs.push(msg.to_string()))
        .unwrap();

    assert!(out_dir.path().join("good.bmp").exists());
    assert!(!out_dir.path().join("bad.bmp").exists());
    assert!(logs.iter().any(|l| l.contains("bad")));
}
