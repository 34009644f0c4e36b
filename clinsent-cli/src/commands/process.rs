//! Process command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, DocumentReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use clinsent_core::config::file::ConfigFile;
use clinsent_core::{Config, ConfigBuilder, SentenceClassifier};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input token documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Classifier configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "CLINSENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Evaluate excluded tokens like any other token
    #[arg(long)]
    pub keep_excluded: bool,

    /// Restart after a newline even when the next word is not capitalised
    #[arg(long)]
    pub no_check_capitalized: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with token spans
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting sentence classification");
        log::debug!("Arguments: {:?}", self);

        let config = self.build_config()?;
        let classifier = SentenceClassifier::new(&config);
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads.unwrap_or_else(num_cpus::get))
            .build()
            .context("Failed to build worker pool")?;

        let mut formatter = self.create_formatter()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total_sentences = 0;
        for path in &files {
            let documents = DocumentReader::read(path)?;
            let all_flags = pool.install(|| classifier.classify_batch(&documents));

            for (doc, flags) in documents.iter().zip(all_flags) {
                let spans = clinsent_core::sentence_spans(&flags);
                formatter.begin_document(doc.id.as_deref().unwrap_or_default())?;
                for span in spans {
                    formatter.format_sentence(&span.text(&doc.tokens), span)?;
                    total_sentences += 1;
                }
            }

            progress.file_completed(&path.display().to_string());
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Classified {} file(s), {} sentence(s)",
            files.len(),
            total_sentences
        );
        Ok(())
    }

    /// Merge the configuration file with command-line overrides
    pub fn build_config(&self) -> Result<Config> {
        let mut builder = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                let file: ConfigFile = toml::from_str(&text)
                    .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
                ConfigBuilder::from(file)
            }
            None => Config::builder(),
        };

        if self.keep_excluded {
            builder = builder.ignore_excluded(false);
        }
        if self.no_check_capitalized {
            builder = builder.check_capitalized(false);
        }

        // warnings are already logged by the builder
        Ok(builder.build()?)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ProcessArgs {
        ProcessArgs {
            input,
            output: None,
            format: OutputFormat::Text,
            config: None,
            keep_excluded: false,
            no_check_capitalized: false,
            threads: Some(1),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_default_config() {
        let config = args(vec![]).build_config().unwrap();
        assert!(config.ignore_excluded());
        assert!(config.check_capitalized());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clinsent.toml");
        fs::write(&path, "punct_chars = [\";\"]\nignore_excluded = true\n").unwrap();

        let mut args = args(vec![]);
        args.config = Some(path);
        args.keep_excluded = true;
        args.no_check_capitalized = true;

        let config = args.build_config().unwrap();
        assert!(config.punct_chars().contains(";"));
        assert!(!config.ignore_excluded());
        assert!(!config.check_capitalized());
    }

    #[test]
    fn test_malformed_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "punct_chars = [1, 2]").unwrap();

        let mut args = args(vec![]);
        args.config = Some(path);

        let err = args.build_config().unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("note.json");
        let output = temp_dir.path().join("out.txt");
        fs::write(
            &input,
            r#"{"tokens": [
                {"text": "Go"}, {"text": ".", "whitespace": " "},
                {"text": "leave"}, {"text": "."}
            ]}"#,
        )
        .unwrap();

        let mut args = args(vec![input.display().to_string()]);
        args.output = Some(output.clone());
        args.execute().unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert_eq!(written, "Go.\nleave.\n");
    }
}
