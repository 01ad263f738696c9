use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Saved files, most recently added last.
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Hide saved entries that no longer exist on disk.
    #[serde(default = "default_skip_missing")]
    pub skip_missing: bool,

    /// How many entries to keep; the oldest are dropped on `add`.
    #[serde(default = "default_max_files")]
    pub max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Show the home directory as `~` before shortening.
    #[serde(default = "default_tilde")]
    pub tilde: bool,

    /// Emit JSON unless a command says otherwise.
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when neither `PATHLABEL_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_skip_missing() -> bool {
    true
}

fn default_max_files() -> usize {
    50
}

fn default_tilde() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            skip_missing: default_skip_missing(),
            max: default_max_files(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tilde: default_tilde(),
            json: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub fn resolve_config_path(arg: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = arg {
        return Ok(p.to_path_buf());
    }
    let home = dirs::home_dir().context("failed to resolve home dir")?;
    Ok(home.join(".pathlabel").join("config.toml"))
}

impl Config {
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let cfg: Config =
                toml::from_str(&s).with_context(|| format!("invalid TOML: {}", path.display()))?;
            debug!(path = %path.display(), files = cfg.files.paths.len(), "loaded config");
            return Ok(cfg);
        }

        let cfg = Config::default();
        cfg.save(path)?;
        debug!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, s).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Appends a file, moving it to the end if it is already saved.
    pub fn add_path(&mut self, path: PathBuf) -> Result<()> {
        let p = normalize(path);
        if !p.exists() {
            anyhow::bail!("path does not exist: {}", p.display());
        }
        self.files.paths.retain(|existing| existing != &p);
        self.files.paths.push(p);

        let max = self.files.max.max(1);
        if self.files.paths.len() > max {
            let excess = self.files.paths.len() - max;
            self.files.paths.drain(..excess);
        }
        Ok(())
    }

    pub fn remove_path(&mut self, path: PathBuf) -> Result<()> {
        let p = normalize(path);
        let before = self.files.paths.len();
        self.files.paths.retain(|existing| existing != &p);
        if before == self.files.paths.len() {
            anyhow::bail!("not found in config: {}", p.display());
        }
        Ok(())
    }
}

/// Expands a leading `~` to the home directory.
pub fn normalize(p: PathBuf) -> PathBuf {
    if let Some(s) = p.to_str()
        && let Some(rest) = s.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        home.join(rest)
    } else if p.as_os_str() == "~" {
        dirs::home_dir().unwrap_or(p)
    } else {
        p
    }
}
