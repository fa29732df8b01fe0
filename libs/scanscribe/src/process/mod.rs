mod types;
mod utils;

pub use types::{BatchSummary, ProcessorConfig};
pub use utils::{process_batch, process_batch_with};
