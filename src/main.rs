//! release_model - inspect release models and packager artifact selection.
//!
//! This binary loads a release.toml and prints the artifacts a packager
//! would publish, or the model itself as JSON.

use release_model::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

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
