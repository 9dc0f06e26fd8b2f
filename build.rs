//! Build script for the Spotify Play Tally CLI.
//!
//! This build script handles setup tasks that need to occur during the
//! compilation process, primarily copying the configuration template to the
//! user's local data directory. This ensures that users have a ready-to-edit
//! configuration example in the location where the application looks for its
//! `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the platform-specific
/// local data directory under `spotally/`.
///
/// # Build Process
///
/// 1. **Dependency Tracking**: re-runs when the template file changes
/// 2. **Path Resolution**: determines source and destination paths
/// 3. **Directory Creation**: ensures the target directory exists
/// 4. **File Copying**: copies the template next to where `.env` is expected
///
/// # Destination Location
///
/// - Linux: `~/.local/share/spotally/.env.example`
/// - macOS: `~/Library/Application Support/spotally/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotally/.env.example`
///
/// # Error Handling Strategy
///
/// A missing template issues a cargo warning and the build continues;
/// directory creation and copy failures are treated as build errors.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotally");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
