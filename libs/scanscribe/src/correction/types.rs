use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::common::ScanMode;

pub const UNIGRAM_DICTIONARY_FILE: &str = "frequency_dictionary_en_82_765.txt";
pub const BIGRAM_DICTIONARY_FILE: &str = "frequency_bigramdictionary_en_243_342.txt";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub term: String,
    pub distance: i64,
    pub count: i64,
}

/// Dictionary-backed suggestions. Implementations never fail: a miss is
/// an empty answer.
pub trait SpellingService {
    fn lookup_top(&self, word: &str) -> Option<Suggestion>;
    fn lookup_compound(&self, text: &str, max_edit_distance: i64) -> Vec<Suggestion>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    pub mode: ScanMode,
    pub max_edit_distance: i64,
    pub transfer_casing: bool,
}

impl CorrectionConfig {
    pub fn new(mode: ScanMode, max_edit_distance: i64, transfer_casing: bool) -> Self {
        Self {
            mode,
            max_edit_distance,
            transfer_casing,
        }
    }

    /// Per-token top suggestion, terms emitted as the dictionary spells them.
    pub fn words() -> Self {
        Self::new(ScanMode::Words, Self::get_default_max_edit_distance(), false)
    }

    /// Whole-line correction that keeps the original capitalisation.
    pub fn compound() -> Self {
        Self::new(ScanMode::Compound, Self::get_default_max_edit_distance(), true)
    }

    pub fn get_default_max_edit_distance() -> i64 {
        2
    }
}

/// Frequency tables: `term count` lines, and optional `term term count`
/// bigram lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryPaths {
    pub unigram: PathBuf,
    pub bigram: Option<PathBuf>,
}

impl DictionaryPaths {
    pub fn new(unigram: PathBuf, bigram: Option<PathBuf>) -> Self {
        Self { unigram, bigram }
    }

    /// Fills any path not given from `<data dir>/scanscribe/`.
    pub fn resolve(unigram: Option<PathBuf>, bigram: Option<PathBuf>) -> Result<Self> {
        let unigram = match unigram {
            Some(path) => path,
            None => Self::default_dir()?.join(UNIGRAM_DICTIONARY_FILE),
        };
        let bigram = match bigram {
            Some(path) => Some(path),
            None => Self::default_dir()
                .ok()
                .map(|dir| dir.join(BIGRAM_DICTIONARY_FILE))
                .filter(|path| path.is_file()),
        };
        Ok(Self::new(unigram, bigram))
    }

    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("scanscribe"))
            .context("no data directory for the default dictionaries; pass --dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths_win() {
        let paths = DictionaryPaths::resolve(
            Some(PathBuf::from("/dicts/words.txt")),
            Some(PathBuf::from("/dicts/pairs.txt")),
        )
        .unwrap();
        assert_eq!(paths.unigram, PathBuf::from("/dicts/words.txt"));
        assert_eq!(paths.bigram, Some(PathBuf::from("/dicts/pairs.txt")));
    }

    #[test]
    fn test_presets() {
        assert_eq!(CorrectionConfig::words().mode, ScanMode::Words);
        assert!(!CorrectionConfig::words().transfer_casing);
        assert!(CorrectionConfig::compound().transfer_casing);
        assert_eq!(CorrectionConfig::compound().max_edit_distance, 2);
    }
}
