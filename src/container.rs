//! The 20-byte container format: a fixed header (magic, width, height,
//! payload length, all little-endian) followed by the raw token stream.
//!
//! Reads and writes go through explicit byte accessors rather than a
//! `#[repr(C)]` struct cast, so the format is reproducible regardless of
//! host alignment or endianness.

use std::fs;
use std::path::Path;

use crate::config::{CONTAINER_HEADER_SIZE, CONTAINER_MAGIC, MAX_CONTAINER_PAYLOAD};
use crate::error::PixzError;

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub payload: u64,
}

fn encode_header(width: u32, height: u32, payload: u64) -> [u8; CONTAINER_HEADER_SIZE] {
    let mut buf = [0u8; CONTAINER_HEADER_SIZE];
    buf[0..4].copy_from_slice(&CONTAINER_MAGIC.to_le_bytes());
    buf[4..8].copy_from_slice(&width.to_le_bytes());
    buf[8..12].copy_from_slice(&height.to_le_bytes());
    buf[12..20].copy_from_slice(&payload.to_le_bytes());
    buf
}

/// Validates and parses a 20-byte header. Does not check the payload against
/// any buffer length — callers with a full file in hand should also verify
/// `bytes.len() - CONTAINER_HEADER_SIZE >= header.payload`.
pub fn parse_header(bytes: &[u8]) -> Result<Header, PixzError> {
    if bytes.len() < CONTAINER_HEADER_SIZE {
        return Err(PixzError::CorruptContainer);
    }
    let magic = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
    if magic != CONTAINER_MAGIC {
        return Err(PixzError::CorruptContainer);
    }
    let width = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    let height = u32::from_le_bytes(bytes[8..12].try_into().unwrap());
    let payload = u64::from_le_bytes(bytes[12..20].try_into().unwrap());
    if payload == 0 || payload > MAX_CONTAINER_PAYLOAD {
        return Err(PixzError::CorruptContainer);
    }
    Ok(Header {
        width,
        height,
        payload,
    })
}

/// Writes a container file in one shot: header and payload are assembled in
/// memory and handed to a single `fs::write` call, so a write failure cannot
/// leave a file with a valid header but truncated payload on disk.
pub fn write_container(path: &Path, width: u32, height: u32, tokens: &[u8]) -> Result<(), PixzError> {
    let mut buf = Vec::with_capacity(CONTAINER_HEADER_SIZE + tokens.len());
    buf.extend_from_slice(&encode_header(width, height, tokens.len() as u64));
    buf.extend_from_slice(tokens);
    fs::write(path, buf)?;
    Ok(())
}

/// Reads and validates a container file, returning its dimensions and the
/// raw token payload (the header is stripped).
pub fn read_container(path: &Path) -> Result<(Header, Vec<u8>), PixzError> {
    let bytes = fs::read(path)?;
    let header = parse_header(&bytes)?;
    let payload_start = CONTAINER_HEADER_SIZE;
    let payload_end = payload_start + header.payload as usize;
    if bytes.len() < payload_end {
        return Err(PixzError::CorruptContainer);
    }
    Ok((header, bytes[payload_start..payload_end].to_vec()))
}
