use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "MUSICLIB_LOG";

#[derive(Parser, Debug)]
#[command(name = "musiclib", bin_name = "musiclib", version)]
#[command(about = "Interactive music library with whole-word album, artist and song search", long_about = None)]
pub struct Cli {
    /// Catalog files to load before the prompt starts
    pub files: Vec<String>,

    /// Directory holding config.json (defaults to the platform config directory)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber. `MUSICLIB_LOG` takes an `EnvFilter` directive
/// and wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "musiclib=debug"
    } else {
        "musiclib=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
