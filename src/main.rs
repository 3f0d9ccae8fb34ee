use std::process::ExitCode;

use tweet_pin::{app, logging, Cli, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse_args(std::env::args_os());
    match app::run(Config::from_cli(cli)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::report(&err);
            ExitCode::FAILURE
        }
    }
}
