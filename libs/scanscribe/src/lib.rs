pub mod common;
pub mod correction;
pub mod image2text;
pub mod image_loader;
pub mod output;
pub mod preprocess;
pub mod process;
