use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Selects how recognized text is shaped and corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Text split on single spaces, corrected one token at a time.
    Words,
    /// Text kept whole, corrected line by line in compound mode.
    Compound,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Words => write!(f, "Words"),
            ScanMode::Compound => write!(f, "Compound"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Load,
    Recognize,
}

/// An input dropped from the batch, with the stage that rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub path: PathBuf,
    pub stage: Stage,
    pub reason: String,
}

impl SkippedItem {
    pub fn new(path: PathBuf, stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            path,
            stage,
            reason: reason.into(),
        }
    }

    /// The console line reported for this item.
    pub fn diagnostic(&self) -> String {
        format!("{} cannot be opened.({})", self.path.display(), self.reason)
    }
}

pub struct LoadedImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl LoadedImage {
    pub fn new(path: PathBuf, image: DynamicImage) -> Self {
        Self { path, image }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Words(Vec<String>),
    Whole(String),
}

/// Text for one image, tied to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub path: PathBuf,
    pub content: PageContent,
}

impl PageText {
    pub fn new(path: PathBuf, content: PageContent) -> Self {
        Self { path, content }
    }

    pub fn with_content(&self, content: PageContent) -> Self {
        Self {
            path: self.path.clone(),
            content,
        }
    }
}
