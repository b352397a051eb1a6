use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use spark_folio::components::footer::current_year;
use spark_folio::logging::init_logging;
use spark_folio::pipeline::{export_to, run};
use spark_folio::state::Media;
use spark_folio::state::media::reduced_motion_from_env;
use spark_folio::{Cli, Config, Portfolio, Settings, SystemOpener, builtin_profile, load_profile};

const FALLBACK_SIZE: (u16, u16) = (100, 30);

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.verbose).context("cannot open log file")?;

    let config = Config::load(cli.config.as_deref()).context("cannot load config")?;
    let settings = Settings::resolve(&cli, config, reduced_motion_from_env());
    info!(?settings, version = env!("CARGO_PKG_VERSION"), "starting");

    let profile = match &settings.profile {
        Some(path) => {
            load_profile(path).with_context(|| format!("cannot load profile {}", path.display()))?
        }
        None => builtin_profile(),
    };

    let (width, height) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
    let width = settings.export_width.unwrap_or(width);
    let media = Media::new(width, height, settings.breakpoint_columns, settings.reduced_motion);
    let mut portfolio = Portfolio::new(
        profile,
        media,
        Box::new(SystemOpener),
        current_year(),
        Instant::now(),
    )
    .context("cannot lay out page")?;

    if settings.export {
        let mut stdout = io::stdout().lock();
        return export_to(&portfolio, &mut stdout).context("export failed");
    }

    run(&mut portfolio, settings.fps).context("terminal session failed")
}
