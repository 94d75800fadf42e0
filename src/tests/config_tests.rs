#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig};
    use std::env;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // config::load() reads process environment; serialize the tests that touch it
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.tree.base_dir, "pdfs");
        assert_eq!(config.tree.roots, vec!["R20".to_string(), "Syllbus".to_string()]);
        assert!(config.tree.location.is_none());
        assert_eq!(config.output.file, "structure.json");
        assert_eq!(config.scan_defaults.extension, ".pdf");
        assert!(!config.scan_defaults.follow_symlinks);
        assert!(config.scan_defaults.excludes.is_empty());
    }

    #[test]
    fn test_valid_config_does_not_error() {
        let _guard = env_guard();
        let result = config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_from_env() {
        let _guard = env_guard();

        env::set_var("STRUKTURWALD__TREE__BASE_DIR", "docs");
        env::set_var("STRUKTURWALD__OUTPUT__FILE", "tree.json");
        env::set_var("STRUKTURWALD__SCAN_DEFAULTS__EXTENSION", ".md");
        env::set_var("STRUKTURWALD__SCAN_DEFAULTS__FOLLOW_SYMLINKS", "true");

        let config = config::load().unwrap();

        assert_eq!(config.tree.base_dir, "docs");
        assert_eq!(config.output.file, "tree.json");
        assert_eq!(config.scan_defaults.extension, ".md");
        assert!(config.scan_defaults.follow_symlinks);

        // Clean up
        env::remove_var("STRUKTURWALD__TREE__BASE_DIR");
        env::remove_var("STRUKTURWALD__OUTPUT__FILE");
        env::remove_var("STRUKTURWALD__SCAN_DEFAULTS__EXTENSION");
        env::remove_var("STRUKTURWALD__SCAN_DEFAULTS__FOLLOW_SYMLINKS");
    }

    #[test]
    fn test_invalid_extension_rejected() {
        let _guard = env_guard();

        env::set_var("STRUKTURWALD__SCAN_DEFAULTS__EXTENSION", "pdf");
        let result = config::load();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scan_defaults.extension"));
        env::remove_var("STRUKTURWALD__SCAN_DEFAULTS__EXTENSION");
    }

    #[test]
    fn test_base_dir_with_separator_rejected() {
        let _guard = env_guard();

        env::set_var("STRUKTURWALD__TREE__BASE_DIR", "pdfs/extra");
        let result = config::load();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("tree.base_dir"));
        env::remove_var("STRUKTURWALD__TREE__BASE_DIR");
    }

    #[test]
    fn test_config_from_file() {
        let _guard = env_guard();

        let config_content = r#"
[tree]
base_dir = "material"
roots = ["A", "B"]
"#;
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        fs::write(&config_path, config_content).unwrap();

        env::set_var("STRUKTURWALD_CONFIG", config_path.to_str().unwrap());
        let config = config::load().unwrap();

        assert_eq!(config.tree.base_dir, "material");
        assert_eq!(config.tree.roots, vec!["A".to_string(), "B".to_string()]);
        // Untouched sections keep their embedded defaults
        assert_eq!(config.output.file, "structure.json");
        assert_eq!(config.scan_defaults.extension, ".pdf");

        env::remove_var("STRUKTURWALD_CONFIG");
    }

    #[test]
    fn test_empty_roots_rejected() {
        let _guard = env_guard();

        let config_content = r#"
[tree]
base_dir = "pdfs"
roots = []
"#;
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty_roots.toml");
        fs::write(&config_path, config_content).unwrap();

        env::set_var("STRUKTURWALD_CONFIG", config_path.to_str().unwrap());
        let result = config::load();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("tree.roots"));
        env::remove_var("STRUKTURWALD_CONFIG");
    }
}
