//! Report configuration for minic
//!
//! Controls how analysis results are rendered: output format, color, and which sections appear.

use std::io::IsTerminal;

/// Environment variable overriding the color choice (`auto`, `always`, `never`).
pub const COLOR_ENV: &str = "MINIC_COLOR";

/// Environment variable that disables color when set to any non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Human-readable text or machine-readable JSON
    pub format: OutputFormat,
    /// Whether ANSI colors are used in text output
    pub color: ColorChoice,
    /// Treat warnings as failures when computing the exit code
    pub deny_warnings: bool,
    /// Print the per-kind token counts
    pub show_counts: bool,
    /// Print the token table before analysis reports
    pub show_tokens: bool,
    /// Prefix diagnostics with `name:line:col`
    pub show_locations: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Parse a choice as spelled on the command line or in [`COLOR_ENV`].
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorChoice::Auto),
            "always" => Some(ColorChoice::Always),
            "never" => Some(ColorChoice::Never),
            _ => None,
        }
    }

    /// Choice requested by the environment, if any.
    ///
    /// [`NO_COLOR_ENV`] wins over [`COLOR_ENV`].
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            return Some(ColorChoice::Never);
        }
        let value = lookup(COLOR_ENV)?;
        let choice = Self::parse(&value);
        if choice.is_none() {
            tracing::warn!(%value, "ignoring unrecognized MINIC_COLOR value");
        }
        choice
    }

    /// Resolve to a yes/no answer for an output stream.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Resolve against stdout.
    pub fn enabled_for_stdout(self) -> bool {
        self.enabled(std::io::stdout().is_terminal())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: ColorChoice::Auto,
            deny_warnings: false,
            show_counts: true,
            show_tokens: true,
            show_locations: true,
        }
    }
}

impl ReportConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }

    pub fn with_show_counts(mut self, show: bool) -> Self {
        self.show_counts = show;
        self
    }

    pub fn with_show_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }

    pub fn with_show_locations(mut self, show: bool) -> Self {
        self.show_locations = show;
        self
    }

    /// Apply environment overrides on top of the current settings.
    ///
    /// The environment only replaces a color choice left at `Auto`; an explicit flag wins.
    pub fn with_env_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.color != ColorChoice::Auto {
            return self;
        }
        match ColorChoice::from_env_with(lookup) {
            Some(color) => self.with_color(color),
            None => self,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(!config.deny_warnings);
        assert!(config.show_counts);
        assert!(config.show_tokens);
        assert!(config.show_locations);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ReportConfig::new(), ReportConfig::default());
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_format() {
        let config = ReportConfig::new().with_format(OutputFormat::Json);
        assert!(config.is_json());
        // Other fields unchanged
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_builder_chain_all() {
        let config = ReportConfig::new()
            .with_color(ColorChoice::Never)
            .with_deny_warnings(true)
            .with_show_counts(false)
            .with_show_tokens(false)
            .with_show_locations(false);

        assert_eq!(config.color, ColorChoice::Never);
        assert!(config.deny_warnings);
        assert!(!config.show_counts);
        assert!(!config.show_tokens);
        assert!(!config.show_locations);
    }

    // ========================================
    // Color resolution tests
    // ========================================

    #[test]
    fn test_color_parse() {
        assert_eq!(ColorChoice::parse("Always"), Some(ColorChoice::Always));
        assert_eq!(ColorChoice::parse(" never "), Some(ColorChoice::Never));
        assert_eq!(ColorChoice::parse("sometimes"), None);
    }

    #[test]
    fn test_color_enabled() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }

    #[test]
    fn test_no_color_wins() {
        let lookup = env(&[("NO_COLOR", "1"), ("MINIC_COLOR", "always")]);
        assert_eq!(ColorChoice::from_env_with(lookup), Some(ColorChoice::Never));
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        let lookup = env(&[("NO_COLOR", ""), ("MINIC_COLOR", "always")]);
        assert_eq!(ColorChoice::from_env_with(lookup), Some(ColorChoice::Always));
    }

    #[test]
    fn test_explicit_flag_beats_environment() {
        let config = ReportConfig::new()
            .with_color(ColorChoice::Always)
            .with_env_overrides(env(&[("NO_COLOR", "1")]));
        assert_eq!(config.color, ColorChoice::Always);

        let config = ReportConfig::new().with_env_overrides(env(&[("MINIC_COLOR", "never")]));
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_unknown_env_value_keeps_auto() {
        let config = ReportConfig::new().with_env_overrides(env(&[("MINIC_COLOR", "rainbow")]));
        assert_eq!(config.color, ColorChoice::Auto);
    }
}
