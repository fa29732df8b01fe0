mod casing;
mod symspell_service;
mod types;
mod utils;

pub use casing::transfer_casing;
pub use symspell_service::SymSpellService;
pub use types::{CorrectionConfig, DictionaryPaths, SpellingService, Suggestion};
pub use utils::{correct_compound, correct_page, correct_pages, correct_words};
