// SPDX-License-Identifier: MPL-2.0
use avatar_picker::app::{self, paths, Flags};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "avatar_picker=info";

const HELP: &str = "\
avatar_picker

USAGE:
  avatar_picker [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <locale>         Interface language (e.g. en-US, fr)
  --config-dir <dir>      Directory holding settings.toml
  --i18n-dir <dir>        Directory with extra Fluent .ftl files

ENVIRONMENT:
  AVATAR_PICKER_CONFIG_DIR  Config directory when --config-dir is not given
  RUST_LOG                  Log filter (default: avatar_picker=info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "ignoring unknown argument");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
