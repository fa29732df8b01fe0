use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OcrBackend {
    /// rusty-tesseract, which finds `tesseract` on the PATH.
    Library,
    /// An explicit tesseract executable.
    Command(PathBuf),
}

impl fmt::Display for OcrBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrBackend::Library => write!(f, "Library"),
            OcrBackend::Command(program) => write!(f, "Command({})", program.display()),
        }
    }
}

impl From<Option<PathBuf>> for OcrBackend {
    fn from(program: Option<PathBuf>) -> Self {
        match program {
            Some(program) => OcrBackend::Command(program),
            None => OcrBackend::Library,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrConfig {
    pub backend: OcrBackend,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            backend: OcrBackend::Library,
        }
    }
}

impl OcrConfig {
    pub fn new(backend: OcrBackend) -> Self {
        Self { backend }
    }

    pub fn with_program(program: Option<PathBuf>) -> Self {
        Self::new(OcrBackend::from(program))
    }
}
