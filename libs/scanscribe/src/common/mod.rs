mod path_utils;
mod types;

pub use path_utils::to_absolute_path;
pub use types::{LoadedImage, PageContent, PageText, ScanMode, SkippedItem, Stage};
