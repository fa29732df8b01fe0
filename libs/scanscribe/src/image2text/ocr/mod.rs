// OCR module structure
mod ocr_command;
mod ocr_tesseract;

mod types;
pub use types::{OcrBackend, OcrConfig};

use anyhow::Result;
use image::DynamicImage;

pub async fn process_ocr(img: &DynamicImage, config: &OcrConfig) -> Result<String> {
    match &config.backend {
        OcrBackend::Library => {
            use self::ocr_tesseract::perform_ocr_tesseract;
            let image = img.clone();
            tokio::task::spawn_blocking(move || perform_ocr_tesseract(&image)).await?
        }
        OcrBackend::Command(program) => {
            use self::ocr_command::perform_ocr_command;
            perform_ocr_command(img, program).await
        }
    }
}
