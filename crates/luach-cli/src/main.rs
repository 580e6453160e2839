use luach_core::logging;

mod cli;
mod server;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Log file under the XDG state dir when writable, stderr otherwise.
    logging::init();

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("luach error: {:#}", err);
        std::process::exit(1);
    }
}
