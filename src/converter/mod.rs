//! Content-pack conversion pipeline
//!
//! The single operation of this crate: extract a pack jar into a scratch
//! tree, rewrite item textures into model descriptors, optionally patch
//! the `mods.toml` version string, and repack everything into a `_fixed`
//! sibling archive.

pub mod models;
pub mod packs;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::archive::{create_archive, extract_archive};
use crate::error::{Error, Result};
use crate::metadata::fix_mods_toml_file;

pub use models::{ModelDescriptor, generate_pack_models};
pub use packs::{RESERVED_NAMESPACE, find_content_packs, normalize_item_dir};

/// Convert a content-pack archive for the 1.20 model format.
///
/// Extracts `input` into a temporary tree, emits one model descriptor per
/// item texture under `assets/mts/models/item/`, optionally strips
/// letters out of the `META-INF/mods.toml` version string, and repacks
/// the whole tree next to the input as `<stem>_fixed<ext>`.
///
/// The input archive is never modified. The scratch tree is deleted on
/// every exit path, success or failure.
///
/// # Errors
/// Fails when the archive cannot be opened or extracted, or when the
/// extracted tree has no `assets/` root. Rename and metadata-patch
/// failures are logged and do not abort the conversion.
pub fn convert_archive<P: AsRef<Path>>(input: P, fix_metadata: bool) -> Result<PathBuf> {
    let input = input.as_ref();
    tracing::info!("Converting {:?} (fix_metadata: {fix_metadata})", input);

    // Dropped on every exit path below, removing the scratch tree.
    let scratch = TempDir::new()?;
    extract_archive(input, scratch.path())?;

    let assets = scratch.path().join("assets");
    if !assets.is_dir() {
        return Err(Error::NoAssetsRoot);
    }

    let content_packs = find_content_packs(&assets)?;
    if !content_packs.is_empty() {
        fs::create_dir_all(assets.join(RESERVED_NAMESPACE).join("models").join("item"))?;
    }

    for pack in &content_packs {
        let textures = assets.join(pack).join("textures");
        if !textures.exists() {
            continue;
        }
        let Some(item_root) = normalize_item_dir(&textures) else {
            continue;
        };
        generate_pack_models(pack, &item_root, &assets)?;
    }

    if fix_metadata {
        let mods_toml = scratch.path().join("META-INF").join("mods.toml");
        if mods_toml.exists() {
            // The descriptors above may already be in place; a broken
            // mods.toml must not cost us the whole conversion.
            if let Err(e) = fix_mods_toml_file(&mods_toml) {
                tracing::warn!("Error while processing mods.toml: {e}");
            }
        }
    }

    let output = fixed_output_path(input)?;
    create_archive(scratch.path(), output.as_path())?;

    tracing::info!("Conversion complete: {:?}", output);
    Ok(output)
}

/// Derive the output path: same directory and stem as the input, with
/// `_fixed` appended before the extension.
fn fixed_output_path(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .ok_or_else(|| Error::InvalidPath(input.display().to_string()))?;

    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_fixed.{}", ext.to_string_lossy()),
        None => format!("{stem}_fixed"),
    };

    Ok(input.with_file_name(file_name))
}
