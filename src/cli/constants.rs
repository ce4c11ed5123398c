//! Identity strings and size constants used by the CLI binary layer.

pub const PROGRAM_NAME: &str = "pixz";
pub const AUTHOR: &str = "pixz contributors";
