mod utils;

pub use utils::preprocess_image;
pub use utils::to_grayscale;
