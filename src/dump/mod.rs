/// Hex-dump domain layer: whole-file read, hex encoding, line chunking.
pub mod errors;
pub mod lines;

pub use errors::DumpError;
pub use lines::{dump_file, hex_lines, HexLines};
