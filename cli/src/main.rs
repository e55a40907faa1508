use clap::Parser;
use colored::Colorize;
use presentation::cli::{Cli, CliApp};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let app = CliApp::new();
    if let Err(err) = app.run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
