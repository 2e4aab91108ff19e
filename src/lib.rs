#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! bintools — dump binaries as multiline hex text and forward files to
//! clang-format.
//!
//! Two small utilities share this library:
//!
//! - `bin2hex` reads a file and prints its bytes as lowercase hex, a fixed
//!   number of bytes per line ([`dump`]).
//! - `cfmt` hands a file to a clang-format executable with a fixed style,
//!   without waiting for it to finish ([`forward`]).

pub mod dump;
pub mod forward;
