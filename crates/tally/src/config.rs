//! Configuration file and command-line flags.
//!
//! The file lives at `<config dir>/tally/config.toml` unless `--config` names
//! another one. Every field is optional; command-line flags override it.

use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::{OutputTarget, ProgramOptions};
use thiserror::Error;

const MAX_FPS: u32 = 120;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Stream the UI is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiOutput {
    #[default]
    Stdout,
    /// Keeps stdout free for the final count when it is redirected.
    Stderr,
}

impl From<UiOutput> for OutputTarget {
    fn from(output: UiOutput) -> Self {
        match output {
            UiOutput::Stdout => OutputTarget::Stdout,
            UiOutput::Stderr => OutputTarget::Stderr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub fps: u32,
    pub mouse: bool,
    pub alt_screen: bool,
    pub title: Option<String>,
    pub output: UiOutput,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            mouse: true,
            alt_screen: true,
            title: Some("tally".to_string()),
            output: UiOutput::Stdout,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// No file means no logging.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directives, e.g. `"debug"` or `"tally=trace"`.
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    /// `<config dir>/tally/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
    }

    /// Load from `path`, or from [`default_path`](Config::default_path) when
    /// `path` is `None`. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Config::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_FPS).contains(&self.ui.fps) {
            return Err(ConfigError::Invalid {
                message: format!("ui.fps must be between 1 and {MAX_FPS}, got {}", self.ui.fps),
            });
        }
        Ok(())
    }

    /// Runtime options for the terminal program.
    pub fn program_options(&self) -> ProgramOptions {
        ProgramOptions {
            fps: self.ui.fps,
            alt_screen: self.ui.alt_screen,
            mouse_capture: self.ui.mouse,
            title: self.ui.title.clone(),
            output: self.ui.output.into(),
            ..ProgramOptions::default()
        }
    }
}

/// A terminal counter: increment, decrement, reset.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/tally/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Redraw rate in frames per second (1-120).
    #[arg(long)]
    pub fps: Option<u32>,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,

    /// Draw in the main screen instead of the alternate screen.
    #[arg(long)]
    pub inline: bool,

    /// Draw the UI on stderr, leaving stdout for the final count.
    #[arg(long)]
    pub stderr: bool,

    /// Write logs to this file (also: TALLY_LOG).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, e.g. "debug" (default: RUST_LOG, then "info").
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Overlay the flags onto `config`. `env_log_file` is the value of
    /// `TALLY_LOG`, which sits between the flag and the file.
    pub fn apply(&self, config: &mut Config, env_log_file: Option<PathBuf>) -> Result<(), ConfigError> {
        if let Some(fps) = self.fps {
            config.ui.fps = fps;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        if self.inline {
            config.ui.alt_screen = false;
        }
        if self.stderr {
            config.ui.output = UiOutput::Stderr;
        }
        if let Some(file) = self.log_file.clone().or(env_log_file) {
            config.log.file = Some(file);
        }
        if let Some(level) = &self.log_level {
            config.log.level = Some(level.clone());
        }
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.ui.fps, 60);
        assert!(config.ui.mouse);
        assert!(config.log.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_file() {
        let file = write_config("[ui]\nfps = 30\n\n[log]\nlevel = \"debug\"\n");
        let config = Config::load(Some(file.path())).expect("config loads");
        assert_eq!(config.ui.fps, 30);
        assert!(config.ui.alt_screen);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn output_stream_from_file_or_flag() {
        let file = write_config("[ui]\noutput = \"stderr\"\n");
        let config = Config::load(Some(file.path())).expect("config loads");
        assert_eq!(config.program_options().output, OutputTarget::Stderr);

        let mut config = Config::default();
        assert_eq!(config.program_options().output, OutputTarget::Stdout);
        let cli = Cli::try_parse_from(["tally", "--stderr"]).expect("valid args");
        cli.apply(&mut config, None).expect("valid");
        assert_eq!(config.program_options().output, OutputTarget::Stderr);
    }

    #[test]
    fn rejects_unknown_output_stream() {
        let file = write_config("[ui]\noutput = \"printer\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn rejects_zero_fps() {
        let file = write_config("[ui]\nfps = 0\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");
    }

    #[test]
    fn rejects_unknown_keys() {
        let file = write_config("[ui]\ncolour = \"red\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::try_parse_from(["tally", "--fps", "24", "--no-mouse", "--inline"])
            .expect("valid args");
        let mut config = Config::default();
        cli.apply(&mut config, None).expect("valid");
        let opts = config.program_options();
        assert_eq!(opts.fps, 24);
        assert!(!opts.mouse_capture);
        assert!(!opts.alt_screen);
        assert_eq!(opts.title.as_deref(), Some("tally"));
    }

    #[test]
    fn log_file_precedence() {
        let mut config = Config::default();
        config.log.file = Some(PathBuf::from("from-file.log"));

        let cli = Cli::try_parse_from(["tally"]).expect("valid args");
        cli.apply(&mut config, Some(PathBuf::from("from-env.log")))
            .expect("valid");
        assert_eq!(config.log.file, Some(PathBuf::from("from-env.log")));

        let cli = Cli::try_parse_from(["tally", "--log-file", "from-flag.log"]).expect("valid args");
        cli.apply(&mut config, Some(PathBuf::from("from-env.log")))
            .expect("valid");
        assert_eq!(config.log.file, Some(PathBuf::from("from-flag.log")));
    }

    #[test]
    fn cli_fps_is_validated() {
        let cli = Cli::try_parse_from(["tally", "--fps", "500"]).expect("valid args");
        let mut config = Config::default();
        assert!(cli.apply(&mut config, None).is_err());
    }
}
