use anyhow::{bail, Context, Result};
use std::path::Path;
use symspell::{SymSpell, UnicodeStringStrategy, Verbosity};

use super::types::{CorrectionConfig, DictionaryPaths, SpellingService, Suggestion};

/// SymSpell dictionaries, loaded once per run.
pub struct SymSpellService {
    symspell: SymSpell<UnicodeStringStrategy>,
    max_edit_distance: i64,
}

impl SymSpellService {
    pub fn load(paths: &DictionaryPaths) -> Result<Self> {
        let mut symspell: SymSpell<UnicodeStringStrategy> = SymSpell::default();

        let unigram = path_str(&paths.unigram)?;
        if !symspell.load_dictionary(unigram, 0, 1, " ") {
            bail!("cannot load dictionary {}", paths.unigram.display());
        }
        log::info!("Loaded dictionary {}", paths.unigram.display());

        match &paths.bigram {
            Some(bigram_path) => {
                let bigram = path_str(bigram_path)?;
                if !symspell.load_bigram_dictionary(bigram, 0, 2, " ") {
                    bail!("cannot load bigram dictionary {}", bigram_path.display());
                }
                log::info!("Loaded bigram dictionary {}", bigram_path.display());
            }
            None => log::warn!("No bigram dictionary, compound correction uses word counts only"),
        }

        Ok(Self {
            symspell,
            max_edit_distance: CorrectionConfig::get_default_max_edit_distance(),
        })
    }
}

fn path_str(path: &Path) -> Result<&str> {
    if !path.is_file() {
        bail!("dictionary not found: {}", path.display());
    }
    path.to_str()
        .with_context(|| format!("dictionary path is not valid UTF-8: {}", path.display()))
}

impl SpellingService for SymSpellService {
    fn lookup_top(&self, word: &str) -> Option<Suggestion> {
        self.symspell
            .lookup(word, Verbosity::Top, self.max_edit_distance)
            .into_iter()
            .next()
            .map(|s| Suggestion {
                term: s.term,
                distance: s.distance,
                count: s.count,
            })
    }

    fn lookup_compound(&self, text: &str, max_edit_distance: i64) -> Vec<Suggestion> {
        self.symspell
            .lookup_compound(text, max_edit_distance.min(self.max_edit_distance))
            .into_iter()
            .map(|s| Suggestion {
                term: s.term,
                distance: s.distance,
                count: s.count,
            })
            .collect()
    }
}
