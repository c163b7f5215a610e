//! Content-pack discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Namespace the generated model descriptors live in; never a content pack.
pub const RESERVED_NAMESPACE: &str = "mts";

/// Find content packs under the assets root.
///
/// A content pack is any immediate subdirectory of `assets/` other than
/// the reserved `mts` namespace. The list is sorted so one run always
/// processes packs in the same order.
pub fn find_content_packs(assets: &Path) -> Result<Vec<String>> {
    let mut packs = Vec::new();
    for entry in fs::read_dir(assets)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name != RESERVED_NAMESPACE {
            packs.push(name);
        }
    }
    packs.sort();
    Ok(packs)
}

/// Resolve a pack's item texture directory, renaming the legacy
/// `textures/items/` to `textures/item/` when present.
///
/// The rename is best-effort: older packs sometimes ship both spellings,
/// and a failed rename (destination exists, permissions) only means we
/// scan whatever `item/` already holds. Returns the item directory if it
/// exists after the attempt, `None` when the pack has no item textures.
pub fn normalize_item_dir(textures: &Path) -> Option<PathBuf> {
    let items_dir = textures.join("items");
    let item_dir = textures.join("item");

    if items_dir.exists() {
        if let Err(e) = fs::rename(&items_dir, &item_dir) {
            tracing::warn!("Can't rename {:?} to {:?}: {e}", items_dir, item_dir);
        }
    }

    item_dir.exists().then_some(item_dir)
}
