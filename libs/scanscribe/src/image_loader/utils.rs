use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::common::{to_absolute_path, LoadedImage, SkippedItem, Stage};

/// Expands the user's inputs into absolute file paths.
///
/// Directories are listed one level deep: entries that are themselves
/// directories are dropped and the rest are sorted by file name. Plain
/// paths are passed through in the order given, whether or not they exist.
pub fn expand_inputs(inputs: &[PathBuf]) -> (Vec<PathBuf>, Vec<SkippedItem>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for input in inputs {
        let path = match to_absolute_path(input) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{} cannot be resolved: {:#}", input.display(), e);
                skipped.push(SkippedItem::new(input.clone(), Stage::Load, format!("{:#}", e)));
                continue;
            }
        };

        if !path.is_dir() {
            files.push(path);
            continue;
        }

        match std::fs::read_dir(&path) {
            Ok(read_dir) => {
                let (entries, unreadable) =
                    collect_entries(&path, read_dir.map(|entry| entry.map(|e| e.path())));
                log::debug!("{} expanded to {} file(s)", path.display(), entries.len());
                files.extend(entries);
                skipped.extend(unreadable);
            }
            Err(e) => {
                log::warn!("{} cannot be listed: {}", path.display(), e);
                skipped.push(SkippedItem::new(path, Stage::Load, e.to_string()));
            }
        }
    }

    (files, skipped)
}

/// Keeps the non-directory entries of `dir`, sorted by file name. Entries
/// the OS fails to return are reported against `dir`.
fn collect_entries(
    dir: &Path,
    entries: impl Iterator<Item = std::io::Result<PathBuf>>,
) -> (Vec<PathBuf>, Vec<SkippedItem>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for entry in entries {
        match entry {
            Ok(path) if path.is_dir() => log::trace!("Skipping subdirectory {}", path.display()),
            Ok(path) => files.push(path),
            Err(e) => {
                log::warn!("Unreadable entry in {}: {}", dir.display(), e);
                skipped.push(SkippedItem::new(dir.to_path_buf(), Stage::Load, e.to_string()));
            }
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    (files, skipped)
}

pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path)?;
    log::debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(LoadedImage::new(path.to_path_buf(), image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::io::{Error, ErrorKind};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32) {
        RgbImage::from_pixel(width, 4, Rgb([255, 255, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_directory_expansion_is_shallow() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("b.png"), 2);
        write_png(&dir.path().join("a.png"), 1);
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        write_png(&nested.join("c.png"), 3);

        let (files, skipped) = expand_inputs(&[dir.path().to_path_buf()]);

        assert!(skipped.is_empty());
        assert_eq!(
            files,
            vec![dir.path().join("a.png"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_input_order_is_preserved() {
        let dir = tempdir().unwrap();
        let second = dir.path().join("z.png");
        let first = dir.path().join("a.png");
        write_png(&second, 1);
        write_png(&first, 1);

        let (files, _) = expand_inputs(&[second.clone(), first.clone()]);
        assert_eq!(files, vec![second, first]);
    }

    #[test]
    fn test_unreadable_entry_is_reported() {
        let dir = PathBuf::from("/scans");
        let entries = vec![
            Ok(PathBuf::from("/scans/b.png")),
            Err(Error::new(ErrorKind::PermissionDenied, "entry vanished")),
            Ok(PathBuf::from("/scans/a.png")),
        ];

        let (files, skipped) = collect_entries(&dir, entries.into_iter());

        assert_eq!(
            files,
            vec![PathBuf::from("/scans/a.png"), PathBuf::from("/scans/b.png")]
        );
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, dir);
        assert_eq!(skipped[0].stage, Stage::Load);
        assert!(skipped[0].reason.contains("entry vanished"));
    }

    #[test]
    fn test_non_image_fails_to_load() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("b.txt");
        std::fs::write(&text, "not an image").unwrap();

        assert!(load_image(&text).is_err());
    }

    #[test]
    fn test_missing_file_fails_to_load() {
        let dir = tempdir().unwrap();
        assert!(load_image(&dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn test_image_keeps_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.png");
        write_png(&path, 3);

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.image.width(), 3);
    }
}
