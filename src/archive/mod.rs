//! Zip container operations
//!
//! Content-pack jars are plain zip archives. This module handles the two
//! container-level operations of the pipeline: extracting an input jar into
//! a scratch tree and repacking the finished tree into a new jar.

mod creator;
mod extractor;

pub use creator::create_archive;
pub use extractor::extract_archive;
