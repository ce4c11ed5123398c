//! Scratch working tables for the greedy hash-chain matcher: `head[65536]`
//! maps a hash to the most recent pixel position that produced it, and
//! `prev[4096]` chains each window slot back to whichever earlier position
//! shared its slot, forming a singly-linked candidate list per hash bucket.
//!
//! Both tables are backed by one caller-supplied byte buffer and addressed
//! with explicit little-endian accessors, matching the rest of the codec's
//! "no pointer casts" discipline — a raw `&mut [u8]` is what a task's
//! preallocated scratch buffer is, not a typed array.

use crate::config::{self, NO_CANDIDATE};

fn get_u32(buf: &[u8], idx: usize) -> u32 {
    let o = idx * 4;
    u32::from_le_bytes(buf[o..o + 4].try_into().unwrap())
}

fn set_u32(buf: &mut [u8], idx: usize, v: u32) {
    let o = idx * 4;
    buf[o..o + 4].copy_from_slice(&v.to_le_bytes());
}

/// A view over a `config::WORK_BUF_SIZE`-byte scratch buffer, split into the
/// `head` and `prev` regions.
pub struct MatchTables<'a> {
    head: &'a mut [u8],
    prev: &'a mut [u8],
}

impl<'a> MatchTables<'a> {
    /// Builds a table view over `work`, initializing `head` to the
    /// no-candidate sentinel. Returns `None` if `work` is smaller than
    /// `config::WORK_BUF_SIZE`; `prev` is left uninitialized since every
    /// slot is written before it is ever read (a chain link is only
    /// followed after this position already wrote it).
    pub fn new(work: &'a mut [u8]) -> Option<Self> {
        if work.len() < config::WORK_BUF_SIZE {
            return None;
        }
        let (head, prev) = work.split_at_mut(config::HASH_TABLE_SIZE * 4);
        for slot in 0..config::HASH_TABLE_SIZE {
            set_u32(head, slot, NO_CANDIDATE);
        }
        Some(MatchTables { head, prev })
    }

    pub fn head_at(&self, hash: usize) -> u32 {
        get_u32(self.head, hash)
    }

    pub fn set_head(&mut self, hash: usize, pos: u32) {
        set_u32(self.head, hash, pos);
    }

    pub fn prev_at(&self, pos: usize) -> u32 {
        get_u32(self.prev, pos % config::WINDOW_SIZE)
    }

    pub fn set_prev(&mut self, pos: usize, older: u32) {
        set_u32(self.prev, pos % config::WINDOW_SIZE, older);
    }

    /// Records that `pos` is the newest position hashing to `hash`, chaining
    /// whatever position previously held that bucket behind it.
    pub fn insert(&mut self, hash: usize, pos: usize) {
        let older = self.head_at(hash);
        self.set_prev(pos, older);
        self.set_head(hash, pos as u32);
    }
}
