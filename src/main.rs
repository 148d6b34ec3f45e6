//! Network Speed Tester - Main CLI Application

use clap::Parser;
use network_speed_tester::{app::App, cli::Cli};
use std::process;

#[tokio::main]
async fn main() {
    // Exit with a clean message instead of a raw backtrace dump
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();

    if let Err(e) = App::new(cli).run().await {
        eprintln!("{}", e.format_for_console(true));
        if e.is_recoverable() {
            eprintln!("This error might be temporary. You can try running the command again.");
        }
        process::exit(e.exit_code());
    }
}
