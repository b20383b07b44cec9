// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use iced_carousel::carousel::ImageSource;
use iced_carousel::config::{self, paths, SortOrder};
use iced_carousel::directory_scanner;
use iced_carousel::error::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
iced_carousel - modal image carousel

USAGE:
  iced_carousel [OPTIONS] <DIRECTORY | FILE...>

OPTIONS:
  --config-dir DIR     Directory holding settings.toml
  --sort ORDER         alphabetical | modified-date (directory input only)
  -h, --help           Print this help
";

struct Args {
    config_dir: Option<String>,
    sort: Option<SortOrder>,
    inputs: Vec<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let sort = args.opt_value_from_str("--sort")?;
    let inputs = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Args {
        config_dir,
        sort,
        inputs,
    }))
}

fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// A single directory is scanned; anything else is taken as a file list.
fn collect_sources(inputs: Vec<PathBuf>, sort_order: SortOrder) -> Result<Vec<ImageSource>> {
    match inputs.as_slice() {
        [dir] if dir.is_dir() => directory_scanner::scan_directory(dir, sort_order),
        _ => directory_scanner::sources_from_paths(inputs),
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) if !args.inputs.is_empty() => args,
        Ok(_) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {}\n\n{}", err, HELP);
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(args.config_dir);
    let (config, config_warning) = config::load();
    init_tracing(config.log_filter());

    let sort_order = args.sort.unwrap_or_else(|| config.sort_order());
    let sources = match collect_sources(args.inputs, sort_order) {
        Ok(sources) => sources,
        Err(err) => {
            tracing::error!(%err, "failed to collect images");
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        sources,
        config,
        config_warning,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
