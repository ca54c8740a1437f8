//! Runs the vehicle tour and prints it to stdout.
//!
//! ```bash
//! vehicle_tour
//! vehicle_tour --config tour.toml --headers -v
//! ```

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vehicle_tour::{Result, Tour, TourConfig};

#[derive(Parser, Debug)]
#[command(name = "vehicle_tour", version, about = "A short tour of vehicles, colors and greetings")]
struct Cli {
    /// TOML file overriding the tour inputs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a title before each section
    #[arg(long)]
    headers: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match (quiet, verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        })
    });

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            TourConfig::load(path)?
        }
        None => TourConfig::default(),
    };
    config.headers |= cli.headers;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Tour::new(config).run(&mut out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vehicle_tour"]);
        assert!(cli.config.is_none());
        assert!(!cli.headers);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["vehicle_tour", "--config", "tour.toml", "--headers", "-vv"]);
        assert_eq!(cli.config, Some(PathBuf::from("tour.toml")));
        assert!(cli.headers);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vehicle_tour", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "vehicle_tour".to_string(),
            "--config".to_string(),
            dir.path().join("nope.toml").display().to_string(),
        ]);
        assert!(run(&cli).is_err());
    }
}
