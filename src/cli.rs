use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "spark-folio", version, about = "Animated single-page portfolio for the terminal")]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/spark-folio/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile TOML to show instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Hold decorative motion still and skip hover transforms
    #[arg(long)]
    pub reduced_motion: bool,

    /// Frames per second while animating
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=240))]
    pub fps: Option<u16>,

    /// Print the whole page once to stdout and exit
    #[arg(long)]
    pub export: bool,

    /// Width of the export (default: terminal width)
    #[arg(long, value_name = "N", requires = "export")]
    pub width: Option<u16>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["spark-folio"]);
        assert!(!cli.export && !cli.reduced_motion && !cli.verbose);
        assert_eq!(cli.fps, None);
    }

    #[test]
    fn test_width_requires_export() {
        assert!(Cli::try_parse_from(["spark-folio", "--width", "100"]).is_err());
        let cli = Cli::parse_from(["spark-folio", "--export", "--width", "100"]);
        assert_eq!(cli.width, Some(100));
    }

    #[test]
    fn test_fps_range() {
        assert!(Cli::try_parse_from(["spark-folio", "--fps", "0"]).is_err());
        assert_eq!(Cli::parse_from(["spark-folio", "--fps", "30"]).fps, Some(30));
    }
}
