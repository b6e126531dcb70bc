//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! - `fs/` - File system implementations (Local, Memory)

pub mod fs;

pub use fs::{LocalFs, MemoryFs};
