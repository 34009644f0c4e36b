//! Validate command implementation

use anyhow::Result;
use clap::Args;
use clinsent_core::Config;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the classifier configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Config::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Punctuation entries: {}", config.punct_chars().len());
                println!(
                    "  Capitalized shapes: {}",
                    config
                        .capitalized_shapes()
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!("  Ignore excluded: {}", config.ignore_excluded());
                println!("  Check capitalized: {}", config.check_capitalized());
                for warning in config.warnings() {
                    println!("  ⚠ {warning}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
