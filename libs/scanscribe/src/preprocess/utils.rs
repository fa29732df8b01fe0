use image::DynamicImage;

use crate::common::LoadedImage;

/// Single-channel 8-bit copy of `image`.
pub fn to_grayscale(image: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(image.to_luma8())
}

/// Converts the image to grayscale when enabled. The colour original is
/// dropped so only the converted image reaches recognition.
pub fn preprocess_image(loaded: LoadedImage, grayscale: bool) -> LoadedImage {
    if !grayscale {
        return loaded;
    }

    log::debug!("Converting {} to grayscale", loaded.path.display());
    let image = to_grayscale(&loaded.image);
    LoadedImage::new(loaded.path, image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage};
    use std::path::PathBuf;

    fn colour_image() -> LoadedImage {
        let image = RgbImage::from_pixel(3, 2, Rgb([200, 10, 10]));
        LoadedImage::new(PathBuf::from("/scans/a.png"), DynamicImage::ImageRgb8(image))
    }

    #[test]
    fn test_grayscale_is_single_channel() {
        let gray = to_grayscale(&colour_image().image);
        assert_eq!(gray.color(), ColorType::L8);
        assert_eq!((gray.width(), gray.height()), (3, 2));
    }

    #[test]
    fn test_preprocess_replaces_image() {
        let loaded = preprocess_image(colour_image(), true);
        assert_eq!(loaded.image.color(), ColorType::L8);
        assert_eq!(loaded.path, PathBuf::from("/scans/a.png"));
    }

    #[test]
    fn test_preprocess_disabled_keeps_image() {
        let loaded = preprocess_image(colour_image(), false);
        assert_eq!(loaded.image.color(), ColorType::Rgb8);
    }
}
