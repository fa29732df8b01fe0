use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolves `path` against the current directory without touching the
/// filesystem, so missing files still get a printable absolute path.
pub fn to_absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(current_dir.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path() {
        let abs_path = if cfg!(windows) {
            "C:\\Users\\test\\file.png"
        } else {
            "/Users/test/file.png"
        };
        let result = to_absolute_path(Path::new(abs_path)).unwrap();
        assert_eq!(result, PathBuf::from(abs_path));
    }

    #[test]
    fn test_relative_path() {
        let result = to_absolute_path(Path::new("scans/page.png")).unwrap();
        assert!(result.is_absolute());
        assert!(result.ends_with("scans/page.png"));
        assert!(result.starts_with(std::env::current_dir().unwrap()));
    }
}
