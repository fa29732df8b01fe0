mod utils;

pub use utils::expand_inputs;
pub use utils::load_image;
