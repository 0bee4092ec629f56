mod cli;
mod error_fmt;
mod run;

use clap::Parser;
use cli::{Cli, Commands, FILE_GUARD, JSON_MODE};
use eyre::Result;
use std::path::Path;

fn main() {
    let code = match real_main() {
        Ok(()) => 0,
        Err(e) => {
            if JSON_MODE.get().copied().unwrap_or(false) {
                eprintln!("{}", error_fmt::format_error_json(&e));
            } else {
                eprintln!("Error: {}", error_fmt::humanize(&e));
            }
            error_fmt::exit_code_for_error(&e)
        }
    };
    std::process::exit(code);
}

fn real_main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    let cfg = fruitshop_config::load(&cli.config)?;
    init_tracing(&cli, &cfg);
    tracing::debug!(config = %cli.config.display(), "config loaded");

    match cli.cmd {
        Commands::Demo => run::run_demo(&cfg, cli.json),
        Commands::Price { item, kilos, units } => run::run_price(&item, kilos, units, cli.json),
        Commands::Devices => run::run_devices(cli.json),
    }
}

fn init_tracing(cli: &Cli, cfg: &fruitshop_config::Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    // An explicit --log-level wins; otherwise the config may raise it.
    let level = if cli.log_level != "info" {
        cli.log_level.clone()
    } else {
        cfg.logging
            .level
            .clone()
            .unwrap_or_else(|| "info".to_string())
    };
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Console logs go to stderr so stdout stays clean for demo output.
    if let Some(file) = &cfg.logging.file {
        let path = Path::new(file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_else(|| "fruitshop.log".into());
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
            dir, name,
        ));
        let _ = FILE_GUARD.set(guard);
        if cli.json {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(fmt::layer().json().with_writer(writer))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(fmt::layer().json().with_writer(writer))
                .init();
        }
    } else if cli.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
