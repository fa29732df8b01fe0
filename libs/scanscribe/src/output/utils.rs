use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::common::{PageContent, PageText};

/// One newline-terminated block per page. Tokens are each followed by a
/// single space.
pub fn render_page(page: &PageText) -> String {
    let mut text = String::new();
    match &page.content {
        PageContent::Words(tokens) => {
            for token in tokens {
                text.push_str(token);
                text.push(' ');
            }
        }
        PageContent::Whole(whole) => text.push_str(whole),
    }
    text.push('\n');
    text
}

pub fn render_document(pages: &[PageText]) -> String {
    pages.iter().map(render_page).collect()
}

/// Appends `document` to `path` in a single write, creating the file and
/// any missing parent directories.
pub fn write_output(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {}", parent.display()))?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    file.write_all(document.as_bytes())
        .with_context(|| format!("cannot write {}", path.display()))?;
    file.flush()?;

    log::info!("Appended {} bytes to {}", document.len(), path.display());
    Ok(())
}
