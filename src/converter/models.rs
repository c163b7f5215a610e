//! Model descriptor generation
//!
//! One descriptor JSON is emitted per item texture, pointing the 1.20
//! model loader at the pack's texture via a namespaced reference.

use std::fs;
use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};

use super::packs::RESERVED_NAMESPACE;

/// A generated item model descriptor.
///
/// Serializes to exactly the shape the game expects:
/// `{"parent": "mts:item/basic", "textures": {"layer0": "<pack>:item/<subpath>/<base>"}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    parent: String,
    textures: TextureLayers,
}

#[derive(Debug, Clone, Serialize)]
struct TextureLayers {
    layer0: String,
}

impl ModelDescriptor {
    /// Build a descriptor for one item texture.
    ///
    /// # Arguments
    /// * `pack` - Owning content pack (becomes the namespace prefix)
    /// * `sub_folders` - Path components below `textures/item/`
    /// * `base` - Texture file name without its `.png` suffix
    #[must_use]
    pub fn new(pack: &str, sub_folders: &[String], base: &str) -> Self {
        let mut segments = Vec::with_capacity(sub_folders.len() + 2);
        segments.push("item");
        segments.extend(sub_folders.iter().map(String::as_str));
        segments.push(base);

        Self {
            parent: format!("{RESERVED_NAMESPACE}:item/basic"),
            textures: TextureLayers {
                layer0: format!("{pack}:{}", segments.join("/")),
            },
        }
    }

    /// The `<pack>:item/...` texture reference this descriptor points at.
    pub fn texture_reference(&self) -> &str {
        &self.textures.layer0
    }
}

/// Scan a pack's `textures/item/` tree and write one descriptor per
/// `.png` found, at any depth.
///
/// Descriptors land in `assets/mts/models/item/<pack>.<base>.json` with
/// 2-space indentation. Non-PNG files are ignored. Textures sharing a
/// base name in different sub-folders map to the same descriptor file;
/// the last one scanned wins (a warning is logged on overwrite).
///
/// # Returns
/// The number of descriptors written.
pub fn generate_pack_models(pack: &str, item_root: &Path, assets: &Path) -> Result<usize> {
    let model_dir = assets.join(RESERVED_NAMESPACE).join("models").join("item");
    fs::create_dir_all(&model_dir)?;

    let mut count = 0;
    for entry in WalkDir::new(item_root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        {
            continue;
        }

        let relative = path
            .strip_prefix(item_root)
            .map_err(|e| Error::InvalidPath(e.to_string()))?;
        let sub_folders: Vec<String> = relative
            .parent()
            .map(|p| {
                p.components()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();
        let base = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;

        let descriptor = ModelDescriptor::new(pack, &sub_folders, &base);
        let json = serde_json::to_string_pretty(&descriptor)?;
        let model_path = model_dir.join(format!("{pack}.{base}.json"));
        if model_path.exists() {
            tracing::warn!("Overwriting {:?}: duplicate base name {base} in pack {pack}", model_path);
        }
        fs::write(&model_path, json)?;
        count += 1;
    }

    tracing::info!("Pack {pack}: wrote {count} model descriptors");
    Ok(count)
}
