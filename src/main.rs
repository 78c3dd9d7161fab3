// SPDX-License-Identifier: MPL-2.0
use itunes_gallery::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "itunes_gallery=info";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Usage: itunes_gallery [--lang <locale>] [--config-dir <path>]");
            std::process::exit(2);
        }
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
