//! # mtsfix
//!
//! A small library for repackaging MTS (Minecraft Transport Simulator)
//! content-pack jars for newer game versions (1.16.5 → 1.20.1).
//!
//! Older packs reference item icons directly from their texture folders;
//! 1.20-era loaders expect one model descriptor JSON per item under the
//! `mts` namespace. This crate extracts a pack jar, synthesizes those
//! descriptors, optionally cleans non-numeric characters out of the
//! `META-INF/mods.toml` version string, and writes a `_fixed` sibling jar.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mtsfix::converter::convert_archive;
//!
//! // Rewrite item textures into model descriptors and repack
//! let output = convert_archive("MyPack.jar", false)?;
//! println!("wrote {}", output.display());
//! # Ok::<(), mtsfix::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mtsfix` command-line binary

pub mod archive;
pub mod converter;
pub mod error;
pub mod metadata;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{Error, Result};
