//! Archive creation

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};

/// Pack the full contents of `source_dir` into a new zip archive at
/// `output`.
///
/// Entry paths are relative to `source_dir` with `/` separators; every
/// file is deflate-compressed. Empty directories are not given entries of
/// their own.
///
/// # Returns
/// The number of file entries written.
pub fn create_archive<P: AsRef<Path>>(source_dir: P, output: P) -> Result<usize> {
    let base_path = source_dir.as_ref();
    tracing::info!("Packing {:?} into {:?}", base_path, output.as_ref());

    let file = File::create(output.as_ref())?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(base_path) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(base_path)
            .map_err(|e| Error::InvalidPath(e.to_string()))?
            .to_string_lossy()
            .replace('\\', "/");

        writer.start_file(relative_path, options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut writer)?;
        count += 1;
    }

    writer.finish()?;
    tracing::info!("Packed {count} files");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip_tree() {
        let temp = TempDir::new().unwrap();
        let tree = temp.path().join("tree");
        fs::create_dir_all(tree.join("assets/foo/textures/item")).unwrap();
        fs::write(tree.join("assets/foo/textures/item/sword.png"), b"data").unwrap();
        fs::write(tree.join("pack.mcmeta"), b"{}").unwrap();

        let zip_path = temp.path().join("out.zip");
        let count = create_archive(&tree, &zip_path).unwrap();
        assert_eq!(count, 2);

        let mut zip = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"assets/foo/textures/item/sword.png".to_string()));
        assert!(names.contains(&"pack.mcmeta".to_string()));
    }
}
