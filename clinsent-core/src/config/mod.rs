//! Configuration API for the sentence classifier

pub mod defaults;
pub mod file;

use crate::error::{Error, Result};
use file::ConfigFile;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Non-fatal problem found while building a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Option kept for backward compatibility; it no longer has any effect
    DeprecatedOption {
        /// Option name
        name: &'static str,
        /// Migration hint
        note: &'static str,
    },
    /// Key not recognised by the configuration schema
    UnknownOption(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::DeprecatedOption { name, note } => {
                write!(f, "option '{name}' is deprecated and ignored: {note}")
            }
            ConfigWarning::UnknownOption(name) => write!(f, "unknown option '{name}' ignored"),
        }
    }
}

/// Classifier configuration
///
/// Fixed once built; share it freely between classifiers and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) punct_chars: BTreeSet<String>,
    pub(crate) capitalized_shapes: BTreeSet<String>,
    pub(crate) ignore_excluded: bool,
    pub(crate) check_capitalized: bool,
    pub(crate) warnings: Vec<ConfigWarning>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            punct_chars: defaults::PUNCT_CHARS.iter().map(|s| s.to_string()).collect(),
            capitalized_shapes: defaults::CAPITALIZED_SHAPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignore_excluded: defaults::IGNORE_EXCLUDED,
            check_capitalized: defaults::CHECK_CAPITALIZED,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        ConfigBuilder::from(file).build()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.to_file())?)
    }

    /// Sentence-final punctuation texts
    pub fn punct_chars(&self) -> &BTreeSet<String> {
        &self.punct_chars
    }

    /// Shapes that allow a restart after a newline
    pub fn capitalized_shapes(&self) -> &BTreeSet<String> {
        &self.capitalized_shapes
    }

    /// Whether excluded tokens are skipped
    pub fn ignore_excluded(&self) -> bool {
        self.ignore_excluded
    }

    /// Whether a newline restart requires a capitalised shape
    pub fn check_capitalized(&self) -> bool {
        self.check_capitalized
    }

    /// Warnings collected while building
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    fn to_file(&self) -> ConfigFile {
        ConfigFile {
            punct_chars: Some(self.punct_chars.iter().cloned().collect()),
            capitalized_shapes: Some(self.capitalized_shapes.iter().cloned().collect()),
            ignore_excluded: Some(self.ignore_excluded),
            check_capitalized: Some(self.check_capitalized),
            ..ConfigFile::default()
        }
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    punct_chars: Option<Vec<String>>,
    capitalized_shapes: Option<Vec<String>>,
    ignore_excluded: Option<bool>,
    check_capitalized: Option<bool>,
    use_endlines: Option<bool>,
    unknown: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentence-final punctuation (empty = builtin list)
    pub fn punct_chars<I, S>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.punct_chars = Some(chars.into_iter().map(Into::into).collect());
        self
    }

    /// Set the capitalised shapes (empty = builtin set)
    pub fn capitalized_shapes<I, S>(mut self, shapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capitalized_shapes = Some(shapes.into_iter().map(Into::into).collect());
        self
    }

    /// Skip excluded tokens during the scan
    pub fn ignore_excluded(mut self, ignore: bool) -> Self {
        self.ignore_excluded = Some(ignore);
        self
    }

    /// Gate newline restarts on capitalisation
    pub fn check_capitalized(mut self, check: bool) -> Self {
        self.check_capitalized = Some(check);
        self
    }

    /// Accepted for older configurations; has no effect
    #[deprecated(note = "newline handling is always enabled")]
    pub fn use_endlines(mut self, value: bool) -> Self {
        self.use_endlines = Some(value);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(chars) = self.punct_chars.filter(|c| !c.is_empty()) {
            config.punct_chars = sanitize("punct_chars", chars)?;
        }

        if let Some(shapes) = self.capitalized_shapes.filter(|s| !s.is_empty()) {
            config.capitalized_shapes = sanitize("capitalized_shapes", shapes)?;
        }

        if let Some(ignore) = self.ignore_excluded {
            config.ignore_excluded = ignore;
        }

        if let Some(check) = self.check_capitalized {
            config.check_capitalized = check;
        }

        if self.use_endlines.is_some() {
            config.warnings.push(ConfigWarning::DeprecatedOption {
                name: "use_endlines",
                note: "newline handling is always enabled",
            });
        }

        config.warnings.extend(
            self.unknown
                .into_iter()
                .map(ConfigWarning::UnknownOption),
        );

        for warning in &config.warnings {
            tracing::warn!("{warning}");
        }

        Ok(config)
    }
}

impl From<ConfigFile> for ConfigBuilder {
    fn from(file: ConfigFile) -> Self {
        Self {
            punct_chars: file.punct_chars,
            capitalized_shapes: file.capitalized_shapes,
            ignore_excluded: file.ignore_excluded,
            check_capitalized: file.check_capitalized,
            use_endlines: file.use_endlines,
            unknown: file.unknown.into_keys().collect(),
        }
    }
}

fn sanitize(option: &str, values: Vec<String>) -> Result<BTreeSet<String>> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(Error::Configuration(format!(
            "{option} must not contain empty strings"
        )));
    }
    Ok(values.into_iter().collect())
}
