//! Batch TypeScript resource bundler.
//!
//! Reads a declarative list of source-to-target bundle entries, synthesizes
//! one aggregating entry point per entry, and hands the actual bundling to
//! esbuild.

use std::process;

use ts_resource_bundler::cli;

#[tokio::main]
async fn main() {
    // Progress lines must be visible without RUST_LOG set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
