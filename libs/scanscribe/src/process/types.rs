use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::common::{ScanMode, SkippedItem};
use crate::correction::CorrectionConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessorConfig {
    pub scan_mode: ScanMode,
    pub grayscale: bool,
    pub correction: CorrectionConfig,
}

impl ProcessorConfig {
    pub fn new(scan_mode: ScanMode, grayscale: bool, correction: CorrectionConfig) -> Self {
        Self {
            scan_mode,
            grayscale,
            correction,
        }
    }

    /// Space-split tokens, per-word correction, colour images as loaded.
    pub fn words() -> Self {
        Self::new(ScanMode::Words, false, CorrectionConfig::words())
    }

    /// Whole text, compound correction, grayscale before recognition.
    pub fn compound() -> Self {
        Self::new(ScanMode::Compound, true, CorrectionConfig::compound())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::compound()
    }
}

/// Outcome of one run. Per-item failures never abort the batch, so this is
/// the only place partial success shows up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub output: PathBuf,
    pub processed: usize,
    pub corrected: bool,
    pub skipped: Vec<SkippedItem>,
    pub write_error: Option<String>,
}

impl BatchSummary {
    pub fn output_written(&self) -> bool {
        self.write_error.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.output_written()
    }
}
