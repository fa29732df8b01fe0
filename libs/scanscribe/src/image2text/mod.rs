mod ocr;
pub use ocr::{process_ocr, OcrBackend, OcrConfig};

mod recognize;
pub use recognize::{recognize_image, shape_text, TextRecognizer};
