//! Archive extraction

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use crate::error::Result;

/// Extract every entry of a zip-compatible archive into `dest`.
///
/// Entries whose names would escape the destination (absolute paths,
/// `..` components) are skipped. Parent directories are created as
/// needed.
///
/// # Arguments
/// * `archive` - Path to the zip/jar file to extract
/// * `dest` - Directory to extract into (must already exist)
///
/// # Returns
/// The number of files written.
pub fn extract_archive<P: AsRef<Path>>(archive: P, dest: P) -> Result<usize> {
    let archive = archive.as_ref();
    let dest = dest.as_ref();
    tracing::info!("Extracting {:?} to {:?}", archive, dest);

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file)?;

    let mut count = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;

        let Some(entry_path) = entry.enclosed_name() else {
            tracing::warn!("Skipping unsafe entry name: {}", entry.name());
            continue;
        };
        let output_path = dest.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
            count += 1;
        }
    }

    tracing::info!("Extracted {count} files");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_test_zip(dir: &Path, files: &[(&str, &[u8])]) -> std::path::PathBuf {
        let zip_path = dir.join("input.zip");
        let file = File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, content) in files {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        zip_path
    }

    #[test]
    fn test_extract_preserves_tree() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_test_zip(
            temp.path(),
            &[
                ("assets/foo/a.png", b"png".as_slice()),
                ("META-INF/mods.toml", b"version = \"1.0\"".as_slice()),
            ],
        );

        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();
        let count = extract_archive(&zip_path, &out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read(out.join("assets/foo/a.png")).unwrap(), b"png");
        assert!(out.join("META-INF/mods.toml").is_file());
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let not_a_zip = temp.path().join("broken.jar");
        fs::write(&not_a_zip, b"definitely not a zip").unwrap();

        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();
        assert!(extract_archive(&not_a_zip, &out).is_err());
    }
}
