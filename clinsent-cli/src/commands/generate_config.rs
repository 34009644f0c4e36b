//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use clinsent_core::Config;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating classifier configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the punctuation and shape lists");
        println!("2. Validate your configuration:");
        println!("   clinsent validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   clinsent process -i notes/*.json --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let body = Config::default()
            .to_toml_string()
            .context("Failed to render default configuration")?;

        Ok(format!(
            "# Sentence boundary classifier configuration\n\
             #\n\
             # punct_chars        token texts that end a sentence\n\
             # capitalized_shapes shapes allowed to start a sentence after a newline\n\
             # ignore_excluded    skip tokens tagged as excluded\n\
             # check_capitalized  require a capitalized shape after a newline\n\n\
             {body}"
        ))
    }
}
