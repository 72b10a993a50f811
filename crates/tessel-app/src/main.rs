mod cli;
mod command_bar;
mod driver;
mod headless;
mod shell;

use std::fs::File;
use std::io::{self, BufReader};

use tessel_config::toml_loader::default_config_path;
use tessel_config::{ReloadManager, SettingsStore, TesselConfig};
use tokio::sync::watch;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::headless::HeadlessHost;
use crate::shell::BrowserShell;

fn open_settings(args: &cli::Args) -> SettingsStore {
    let path = match &args.config {
        Some(path) => {
            tracing::info!("Using settings override: {}", path.display());
            Ok(path.clone())
        }
        None => default_config_path(),
    };
    match path.and_then(SettingsStore::open) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("Settings unavailable, using defaults in memory: {e}");
            SettingsStore::in_memory()
        }
    }
}

fn watch_settings(
    runtime: &tokio::runtime::Runtime,
    settings: &SettingsStore,
) -> Option<watch::Receiver<TesselConfig>> {
    let path = settings.path()?.to_path_buf();
    let (_, rx) = runtime.block_on(ReloadManager::start(path));
    Some(rx)
}

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("tessel=info");
    let filter = EnvFilter::from_default_env();
    let filter = match log_directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("invalid log level '{log_directive}': {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    tracing::info!("Tessel v{} starting...", env!("CARGO_PKG_VERSION"));

    let settings = open_settings(&args);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => Some(rt),
        Err(e) => {
            tracing::warn!("Failed to start runtime, settings will not auto-reload: {e}");
            None
        }
    };
    let mut reloads = match &runtime {
        Some(rt) if !args.no_watch => watch_settings(rt, &settings),
        _ => None,
    };

    let mut shell = BrowserShell::new(HeadlessHost::new(), settings);
    if let Some(url) = &args.url {
        shell.navigate_active(url);
    }

    let apply_reloads = |shell: &mut driver::HeadlessShell| {
        let Some(rx) = reloads.as_mut() else {
            return;
        };
        if rx.has_changed().unwrap_or(false) {
            let config = rx.borrow_and_update().clone();
            if shell.settings().config() != &config {
                shell.apply_settings(config);
            }
        }
    };

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => driver::run(&mut shell, BufReader::new(file), io::stdout(), apply_reloads),
            Err(e) => {
                tracing::error!("Cannot open script {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => driver::run(&mut shell, io::stdin().lock(), io::stdout(), apply_reloads),
    };

    if let Err(e) = result {
        tracing::error!("I/O error: {e}");
    }
    tracing::info!("Shutdown complete");
}
