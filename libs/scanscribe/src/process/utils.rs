use std::path::{Path, PathBuf};

use super::types::{BatchSummary, ProcessorConfig};
use crate::common::{SkippedItem, Stage};
use crate::correction::{correct_pages, SpellingService};
use crate::image2text::{recognize_image, TextRecognizer};
use crate::image_loader::{expand_inputs, load_image};
use crate::output::{render_document, write_output};
use crate::preprocess::preprocess_image;

/// [`process_batch_with`] without a skip callback.
pub async fn process_batch<R: TextRecognizer>(
    inputs: &[PathBuf],
    output: &Path,
    config: &ProcessorConfig,
    recognizer: &R,
    speller: Option<&dyn SpellingService>,
) -> BatchSummary {
    process_batch_with(inputs, output, config, recognizer, speller, |_| {}).await
}

/// Runs load, preprocess, recognize, correct and append over `inputs`.
///
/// Each file is loaded, converted and recognized before the next one is
/// opened, so at most one decoded image is alive at a time. `on_skip` sees
/// every dropped item as soon as it is dropped. Correction runs only when a
/// `speller` is given. Per-file failures and a failed write end up in the
/// summary; nothing here returns early.
pub async fn process_batch_with<R, F>(
    inputs: &[PathBuf],
    output: &Path,
    config: &ProcessorConfig,
    recognizer: &R,
    speller: Option<&dyn SpellingService>,
    mut on_skip: F,
) -> BatchSummary
where
    R: TextRecognizer,
    F: FnMut(&SkippedItem),
{
    let (files, mut skipped) = expand_inputs(inputs);
    skipped.iter().for_each(&mut on_skip);
    log::info!("Scanning {} file(s)", files.len());

    let mut pages = Vec::with_capacity(files.len());
    for file in files {
        let loaded = match load_image(&file) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!("Failed to load image from {}: {}", file.display(), e);
                let item = SkippedItem::new(file, Stage::Load, e.to_string());
                on_skip(&item);
                skipped.push(item);
                continue;
            }
        };

        let loaded = preprocess_image(loaded, config.grayscale);
        match recognize_image(loaded, recognizer, config.scan_mode).await {
            Ok(page) => pages.push(page),
            Err(item) => {
                on_skip(&item);
                skipped.push(item);
            }
        }
    }
    log::info!("Recognized {} image(s), {} skipped", pages.len(), skipped.len());

    let pages = match speller {
        Some(speller) => correct_pages(pages, speller, &config.correction),
        None => pages,
    };

    let document = render_document(&pages);
    let write_error = match write_output(output, &document) {
        Ok(()) => None,
        Err(e) => {
            log::error!("Failed to write {}: {:#}", output.display(), e);
            Some(format!("{:#}", e))
        }
    };

    BatchSummary {
        output: output.to_path_buf(),
        processed: pages.len(),
        corrected: speller.is_some(),
        skipped,
        write_error,
    }
}
