//! CLI-facing support: identity constants consumed by `src/bin/pixz.rs`.
//! Argument parsing itself lives in the binary crate via `clap`'s derive
//! macros, since it has no library-side callers.

pub mod constants;
