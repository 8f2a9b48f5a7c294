//! Foodweb CLI - Interactive food web analysis
//!
//! Builds a small predator/prey graph from user input, reports its
//! characteristics (apex predators, producers, heights, vore types)
//! and then lets the user modify it, honoring the basic/debug/quiet
//! run modes.

use colored::Colorize;
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod modes;
mod scanner;
mod session;

use modes::Modes;
use session::Session;

fn on_or_off(mode: bool) -> &'static str {
    if mode {
        "ON"
    } else {
        "OFF"
    }
}

fn run(modes: Modes, input: impl BufRead) -> io::Result<()> {
    println!("Program Settings:");
    println!("  basic mode = {}", on_or_off(modes.basic));
    println!("  debug mode = {}", on_or_off(modes.debug));
    println!("  quiet mode = {}", on_or_off(modes.quiet));
    println!();

    Session::new(modes, input).run()
}

fn main() {
    // Logging goes to stderr so it never mixes with protocol output.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();

    let modes = match Modes::parse(std::env::args().skip(1)) {
        Ok(modes) => modes,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(e) = run(modes, stdin.lock()) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
