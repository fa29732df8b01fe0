use clap::{Args, Parser};
use std::path::PathBuf;

use scanscribe::image2text::OcrConfig;
use scanscribe::process::ProcessorConfig;

use super::runner::RunRequest;

/// Flags shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    #[arg(
        long = "tesseract-cmd",
        env = "TESSERACT_CMD",
        value_name = "PATH",
        help = "Tesseract executable (default: rusty-tesseract's tesseract on PATH)"
    )]
    pub tesseract_cmd: Option<PathBuf>,
    #[arg(
        long,
        env = "SCANSCRIBE_DICTIONARY",
        value_name = "PATH",
        help = "Unigram frequency dictionary (term count)"
    )]
    pub dictionary: Option<PathBuf>,
    #[arg(
        long,
        env = "SCANSCRIBE_BIGRAM_DICTIONARY",
        value_name = "PATH",
        help = "Bigram frequency dictionary (term term count)"
    )]
    pub bigram_dictionary: Option<PathBuf>,
    #[arg(
        long,
        help = "Exit with status 2 when any file was skipped or the output could not be written",
        default_value_t = false
    )]
    pub strict: bool,
    #[arg(
        long,
        help = "Print the batch summary as JSON",
        default_value_t = false
    )]
    pub summary_json: bool,
}

#[derive(Parser, Debug)]
#[command(version, about = "Scan images to text, correcting words one at a time", long_about = None)]
pub struct WordsCli {
    #[arg(
        short = 'i',
        long = "in",
        value_name = "PATHS",
        required = true,
        help = "Paths to the images to be scanned, or directories holding them"
    )]
    pub inputs: Vec<PathBuf>,
    #[arg(
        short = 'o',
        long = "out",
        value_name = "PATH",
        help = "Output file; text is appended and missing directories are created"
    )]
    pub output: PathBuf,
    #[arg(
        short = 'a',
        long = "auto-correct",
        help = "Whether to use auto-correct",
        default_value_t = false
    )]
    pub auto_correct: bool,
    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Parser, Debug)]
#[command(version, about = "Scan images to text with compound auto-correct", long_about = None)]
pub struct CompoundCli {
    #[arg(
        short = 'i',
        long = "in",
        value_name = "PATHS",
        required = true,
        help = "Paths to the images to be scanned, or directories holding them"
    )]
    pub inputs: Vec<PathBuf>,
    #[arg(
        short = 'o',
        long = "out",
        value_name = "PATH",
        help = "Output file; text is appended and missing directories are created"
    )]
    pub output: PathBuf,
    #[arg(
        short = 'n',
        long = "no-auto-correct",
        help = "Disable auto-correct",
        default_value_t = false
    )]
    pub no_auto_correct: bool,
    #[command(flatten)]
    pub engine: EngineArgs,
}

impl From<WordsCli> for RunRequest {
    fn from(cli: WordsCli) -> Self {
        RunRequest {
            ocr_config: OcrConfig::with_program(cli.engine.tesseract_cmd.clone()),
            inputs: cli.inputs,
            output: cli.output,
            config: ProcessorConfig::words(),
            auto_correct: cli.auto_correct,
            engine: cli.engine,
        }
    }
}

impl From<CompoundCli> for RunRequest {
    fn from(cli: CompoundCli) -> Self {
        RunRequest {
            ocr_config: OcrConfig::with_program(cli.engine.tesseract_cmd.clone()),
            inputs: cli.inputs,
            output: cli.output,
            config: ProcessorConfig::compound(),
            auto_correct: !cli.no_auto_correct,
            engine: cli.engine,
        }
    }
}
