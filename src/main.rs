use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strukturwald::types::{ScanOptions, ScanSummary};
use strukturwald::{config, export, scanner};

fn main() -> anyhow::Result<()> {
    // Logging (non-blocking stdout)
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .init();
    // Guard am Leben halten (nicht fallen lassen), damit der Non-Blocking Writer korrekt flusht
    let _log_guard = stdout_guard;

    // Load configuration (embedded defaults -> strukturwald.toml -> env/.env)
    let app_cfg = config::load()?;

    // Container und Artefakt liegen neben dem Binary, Fallback auf das Arbeitsverzeichnis
    let program_dir = program_dir();
    let base_location = match &app_cfg.tree.location {
        Some(loc) => PathBuf::from(loc),
        None => program_dir.join(&app_cfg.tree.base_dir),
    };
    let output_path = program_dir.join(&app_cfg.output.file);

    info!("Scanning '{}' for {} roots", base_location.display(), app_cfg.tree.roots.len());

    let options = ScanOptions::from(&app_cfg.scan_defaults);
    let mut summary = ScanSummary::default();
    let forest = scanner::build_forest(&base_location, &app_cfg.tree, &options, &mut summary)?;

    export::write_manifest(&output_path, &forest)?;

    info!("Structure generated and saved to {}", output_path.display());
    info!(
        "Scanned {} folders and {} files ({} entries skipped, {} warnings)",
        summary.total_dirs, summary.total_files, summary.skipped, summary.warnings
    );
    Ok(())
}

fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
