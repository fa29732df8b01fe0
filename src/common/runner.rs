use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::ExitCode;

use scanscribe::correction::{DictionaryPaths, SpellingService, SymSpellService};
use scanscribe::image2text::{OcrConfig, TextRecognizer};
use scanscribe::process::{process_batch_with, BatchSummary, ProcessorConfig};

use super::cli::EngineArgs;

/// Everything one run needs, after flag parsing.
pub struct RunRequest {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub config: ProcessorConfig,
    pub ocr_config: OcrConfig,
    pub auto_correct: bool,
    pub engine: EngineArgs,
}

/// Loads the dictionaries when auto-correct is on. Failing here stops the
/// run before any image is touched.
pub fn load_speller(request: &RunRequest) -> Result<Option<SymSpellService>> {
    if !request.auto_correct {
        return Ok(None);
    }
    let paths = DictionaryPaths::resolve(
        request.engine.dictionary.clone(),
        request.engine.bigram_dictionary.clone(),
    )?;
    let speller = SymSpellService::load(&paths).context("auto-correct is enabled")?;
    Ok(Some(speller))
}

pub async fn run(request: RunRequest) -> Result<ExitCode> {
    let speller = load_speller(&request)?;
    log::info!(
        "Scanning {} input(s) into {} using {} OCR, auto-correct {}",
        request.inputs.len(),
        request.output.display(),
        request.ocr_config.backend,
        if request.auto_correct { "on" } else { "off" }
    );
    run_with(
        &request,
        &request.ocr_config,
        speller.as_ref().map(|s| s as &dyn SpellingService),
    )
    .await
}

/// Runs the batch and reports on stdout: each skipped file as it is
/// dropped, one line for a failed write, then the JSON summary if asked for.
pub async fn run_with<R: TextRecognizer>(
    request: &RunRequest,
    recognizer: &R,
    speller: Option<&dyn SpellingService>,
) -> Result<ExitCode> {
    let summary = process_batch_with(
        &request.inputs,
        &request.output,
        &request.config,
        recognizer,
        speller,
        |item| println!("{}", item.diagnostic()),
    )
    .await;

    if let Some(line) = write_failure_line(&summary) {
        println!("{}", line);
    }
    if request.engine.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    log::info!(
        "Processed {} image(s), skipped {}",
        summary.processed,
        summary.skipped.len()
    );

    Ok(exit_code(&summary, request.engine.strict))
}

pub fn write_failure_line(summary: &BatchSummary) -> Option<String> {
    summary
        .write_error
        .as_ref()
        .map(|e| format!("FAILED: The output file cannot be written to.({})", e))
}

/// Stdout line for an error that stopped the run before any work.
pub fn startup_failure_line(e: &anyhow::Error) -> String {
    format!("FAILED: {:#}", e)
}

pub fn exit_code(summary: &BatchSummary, strict: bool) -> ExitCode {
    if strict && !summary.is_complete() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
