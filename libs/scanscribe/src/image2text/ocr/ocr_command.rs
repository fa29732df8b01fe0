use anyhow::{bail, Context, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use tokio::process::Command;

/// Runs `program <image> stdout` on a temporary PNG copy of `image`.
pub async fn perform_ocr_command(image: &DynamicImage, program: &Path) -> Result<String> {
    let tmpdir = tempfile::Builder::new()
        .prefix("scanscribe")
        .tempdir()
        .context("cannot create tesseract working directory")?;
    let input_path = tmpdir.path().join("input.png");
    image
        .save_with_format(&input_path, ImageFormat::Png)
        .context("cannot write tesseract input file")?;

    let output = Command::new(program)
        .arg(&input_path)
        .arg("stdout")
        .output()
        .await
        .with_context(|| format!("cannot run {}", program.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} failed with {}: {}",
            program.display(),
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn fake_tesseract(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("tesseract");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn blank_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])))
    }

    #[tokio::test]
    async fn test_command_output_is_returned() {
        let dir = tempdir().unwrap();
        let program = fake_tesseract(
            dir.path(),
            "test -f \"$1\" || exit 3\necho \"hello $2\"",
        );

        let text = perform_ocr_command(&blank_image(), &program).await.unwrap();
        assert_eq!(text, "hello stdout\n");
    }

    #[tokio::test]
    async fn test_command_failure_is_an_error() {
        let dir = tempdir().unwrap();
        let program = fake_tesseract(dir.path(), "echo 'broken engine' >&2\nexit 1");

        let err = perform_ocr_command(&blank_image(), &program)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("broken engine"));
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let dir = tempdir().unwrap();
        let program = dir.path().join("no-such-tesseract");

        let result = perform_ocr_command(&blank_image(), &program).await;
        assert!(result.is_err());
    }
}
