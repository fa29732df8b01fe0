use anyhow::Result;
use image::DynamicImage;

use super::ocr::{process_ocr, OcrConfig};
use crate::common::{LoadedImage, PageContent, PageText, ScanMode, SkippedItem, Stage};

/// Anything that turns an image into text.
#[allow(async_fn_in_trait)]
pub trait TextRecognizer {
    async fn recognize(&self, image: &DynamicImage) -> Result<String>;
}

impl TextRecognizer for OcrConfig {
    async fn recognize(&self, image: &DynamicImage) -> Result<String> {
        process_ocr(image, self).await
    }
}

/// Shapes raw engine output for the given mode.
///
/// Words mode splits on single spaces and keeps empty tokens, so runs of
/// spaces survive a round trip. Compound mode drops the trailing
/// whitespace tesseract appends after the last line.
pub fn shape_text(raw: &str, mode: ScanMode) -> PageContent {
    match mode {
        ScanMode::Words => PageContent::Words(raw.split(' ').map(str::to_string).collect()),
        ScanMode::Compound => PageContent::Whole(raw.trim_end().to_string()),
    }
}

/// Recognizes one image, consuming it. A failure is reported against the
/// image's own path and contributes no text.
pub async fn recognize_image<R: TextRecognizer>(
    loaded: LoadedImage,
    recognizer: &R,
    mode: ScanMode,
) -> Result<PageText, SkippedItem> {
    let ocr_start = std::time::Instant::now();
    match recognizer.recognize(&loaded.image).await {
        Ok(text) => {
            log::debug!(
                "OCR of {} took {:?}",
                loaded.path.display(),
                ocr_start.elapsed()
            );
            Ok(PageText::new(loaded.path, shape_text(&text, mode)))
        }
        Err(e) => {
            log::warn!("Failed to process OCR for {}: {:#}", loaded.path.display(), e);
            Err(SkippedItem::new(loaded.path, Stage::Recognize, format!("{:#}", e)))
        }
    }
}
