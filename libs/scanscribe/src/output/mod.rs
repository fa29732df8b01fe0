mod utils;

pub use utils::render_document;
pub use utils::render_page;
pub use utils::write_output;
