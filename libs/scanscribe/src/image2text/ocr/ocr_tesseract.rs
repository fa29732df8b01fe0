use anyhow::Result;
use image::DynamicImage;
use rusty_tesseract::{Args, Image};
use std::collections::HashMap;

/// Runs tesseract with its own defaults: no page segmentation, engine
/// mode or dpi overrides.
pub fn perform_ocr_tesseract(image: &DynamicImage) -> Result<String> {
    let args = Args {
        lang: "eng".to_string(),
        config_variables: HashMap::new(),
        dpi: None,
        psm: None,
        oem: None,
    };

    let ocr_image = Image::from_dynamic_image(image)
        .map_err(|e| anyhow::anyhow!("Error preparing image for tesseract: {:?}", e))?;

    rusty_tesseract::image_to_string(&ocr_image, &args)
        .map_err(|e| anyhow::anyhow!("tesseract failed: {:?}", e))
}
