//! scorebridge binary entry point.

use clap::Parser;

use scorebridge_server::{App, CliArgs};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let app = match App::from_args(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
