//! User configuration file and the settings resolved from it.
//!
//! The file is optional. Flags given on the command line win over the file,
//! and `SPARK_FOLIO_REDUCED_MOTION` wins over both for reduced motion.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{FolioError, Result};
use crate::state::media::DEFAULT_BREAKPOINT;

pub const DEFAULT_FPS: u16 = 60;

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fps: u16,
    pub reduced_motion: bool,
    pub breakpoint_columns: u16,
    /// Profile TOML to show instead of the built-in one
    pub profile: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            reduced_motion: false,
            breakpoint_columns: DEFAULT_BREAKPOINT,
            profile: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        let config = Self::parse(&text).map_err(|e| match e {
            FolioError::Config { message, .. } => FolioError::Config {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FolioError::Config {
            path: "<config>".into(),
            message: e.to_string(),
        })
    }
}

/// `$XDG_CONFIG_HOME/spark-folio/config.toml`, falling back to `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("spark-folio").join("config.toml"))
}

/// Everything the binary needs after merging flags, file and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub fps: u16,
    pub reduced_motion: bool,
    pub breakpoint_columns: u16,
    pub profile: Option<PathBuf>,
    pub export: bool,
    pub export_width: Option<u16>,
}

impl Settings {
    /// Merge in precedence order: env, then flags, then file.
    pub fn resolve(cli: &Cli, config: Config, env_reduced_motion: Option<bool>) -> Self {
        let reduced_motion =
            env_reduced_motion.unwrap_or(cli.reduced_motion || config.reduced_motion);
        Self {
            fps: cli.fps.unwrap_or(config.fps).max(1),
            reduced_motion,
            breakpoint_columns: config.breakpoint_columns,
            profile: cli.profile.clone().or(config.profile),
            export: cli.export,
            export_width: cli.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("spark-folio").chain(args.iter().copied()))
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("fps = 30\n").unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.breakpoint_columns, DEFAULT_BREAKPOINT);
        assert!(!config.reduced_motion);
        assert_eq!(config.profile, None);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        assert!(matches!(Config::parse("fps = \"fast\""), Err(FolioError::Config { .. })));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reduced_motion = true\nprofile = \"/tmp/me.toml\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.profile, Some(PathBuf::from("/tmp/me.toml")));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config {
            fps: 30,
            profile: Some(PathBuf::from("file.toml")),
            ..Config::default()
        };
        let flags = cli(&["--fps", "120", "--profile", "flag.toml"]);
        let settings = Settings::resolve(&flags, config, None);
        assert_eq!(settings.fps, 120);
        assert_eq!(settings.profile, Some(PathBuf::from("flag.toml")));
    }

    #[test]
    fn test_env_overrides_reduced_motion() {
        let config = Config {
            reduced_motion: true,
            ..Config::default()
        };
        let settings = Settings::resolve(&cli(&["--reduced-motion"]), config.clone(), Some(false));
        assert!(!settings.reduced_motion);

        let settings = Settings::resolve(&cli(&[]), Config::default(), Some(true));
        assert!(settings.reduced_motion);

        let settings = Settings::resolve(&cli(&[]), config, None);
        assert!(settings.reduced_motion);
    }
}
