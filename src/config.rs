use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    /// Name of the container folder next to the binary; also the web path label.
    pub base_dir: String,
    /// Root directory names inside the container. Order is authoritative and
    /// preserved verbatim in the output.
    pub roots: Vec<String>,
    /// Optional absolute override of the container location. When unset the
    /// container is resolved next to the executable.
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Artifact file name, written next to the binary.
    pub file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanDefaultsConfig {
    pub extension: String,
    pub follow_symlinks: bool,
    pub excludes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub tree: TreeConfig,
    pub output: OutputConfig,
    pub scan_defaults: ScanDefaultsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        let defaults: &str = include_str!("../config/default.toml");
        match ::config::Config::builder()
            .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: strukturwald.toml (in CWD)
        .add_source(::config::File::with_name("strukturwald").required(false));

    if let Ok(custom_path) = std::env::var("STRUKTURWALD_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("STRUKTURWALD").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    // Tree
    if cfg.tree.base_dir.is_empty() {
        return Err(anyhow::anyhow!("tree.base_dir must not be empty"));
    }
    if cfg.tree.base_dir.contains('/') || cfg.tree.base_dir.contains('\\') {
        return Err(anyhow::anyhow!(
            "tree.base_dir must be a plain folder name, got '{}'",
            cfg.tree.base_dir
        ));
    }
    if cfg.tree.roots.is_empty() {
        return Err(anyhow::anyhow!("tree.roots must not be empty"));
    }
    for name in &cfg.tree.roots {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(anyhow::anyhow!("tree.roots entries must be plain names, got '{}'", name));
        }
    }

    // Output
    if cfg.output.file.is_empty() {
        return Err(anyhow::anyhow!("output.file must not be empty"));
    }

    // Scan defaults
    if !cfg.scan_defaults.extension.starts_with('.') || cfg.scan_defaults.extension.len() < 2 {
        return Err(anyhow::anyhow!(
            "scan_defaults.extension must start with '.', got '{}'",
            cfg.scan_defaults.extension
        ));
    }

    Ok(())
}
