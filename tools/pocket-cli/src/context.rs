//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pocket_commerce::{Storefront, StorefrontConfig};

use crate::config::{self, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    ///
    /// With `validate` off an invalid config still loads, so the `config`
    /// commands can inspect and repair it.
    pub fn load(config_path: Option<&str>, output: Output, validate: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let (config, config_path) = load_config(&cwd, config_path, validate)?;

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// A fresh storefront over the built-in menu.
    pub fn storefront(&self) -> Result<Storefront> {
        Storefront::with_builtin_menu(self.config.clone()).context("Failed to open storefront")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn load_config(
    cwd: &Path,
    config_path: Option<&str>,
    validate: bool,
) -> Result<(StorefrontConfig, Option<PathBuf>)> {
    let (config, config_path) = if let Some(path) = config_path {
        let path = resolve_path(cwd, path);
        (config::load(&path)?, Some(path))
    } else {
        match find_config_file(cwd) {
            Some(path) => (config::load(&path)?, Some(path)),
            None => (StorefrontConfig::default(), None),
        }
    };

    if validate {
        config
            .validate()
            .context("Configuration rejected by the storefront")?;
    }

    Ok((config, config_path))
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find a config file in `start` or any parent directory.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("pocket-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".pocket.toml"), "").unwrap();

        let found = find_config_file(&nested);
        std::fs::remove_dir_all(&root).ok();

        assert_eq!(found, Some(root.join(".pocket.toml")));
    }

    #[test]
    fn test_invalid_config_loads_only_without_validation() {
        let root = std::env::temp_dir().join(format!("pocket-bad-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("pocket.toml"), "[menu]\npage_size = 0\n").unwrap();

        let strict = load_config(&root, None, true);
        let lenient = load_config(&root, None, false);
        std::fs::remove_dir_all(&root).ok();

        assert!(strict.is_err());
        let (config, path) = lenient.unwrap();
        assert_eq!(config.menu.page_size, 0);
        assert_eq!(path, Some(root.join("pocket.toml")));
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/srv/diner");
        assert_eq!(resolve_path(cwd, "form.toml"), cwd.join("form.toml"));
        assert_eq!(resolve_path(cwd, "/tmp/form.toml"), PathBuf::from("/tmp/form.toml"));
    }
}
