use clap::Parser;
use scanscribe_cli::common::cli::CompoundCli;
use scanscribe_cli::common::logger::init_logger_exe;
use scanscribe_cli::common::runner::{run, startup_failure_line};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger_exe();
    let cli = CompoundCli::parse();

    match run(cli.into()).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            println!("{}", startup_failure_line(&e));
            ExitCode::FAILURE
        }
    }
}
