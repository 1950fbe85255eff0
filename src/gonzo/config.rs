//! Configuration resolution.
//!
//! The core never looks at the process environment. The CLI takes one
//! [`Environment`] snapshot at startup, reads the optional `config.json`
//! from the storage root, and hands the resolved [`GonzoConfig`] to the
//! collaborators that need it (the note source resolver and the pager).
//!
//! Precedence per setting: environment variable, then config file, then the
//! built-in default.

use crate::error::{GonzoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const STORAGE_DIRNAME: &str = ".gonzo";
pub const DEFAULT_EDITOR: &str = "vi";

/// The bits of the process environment gonzo cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub home: Option<PathBuf>,
    /// `GONZO_HOME`: storage root override
    pub gonzo_home: Option<PathBuf>,
    pub editor: Option<String>,
    pub pager: Option<String>,
}

impl Environment {
    /// Snapshot of the real environment. Only the CLI calls this.
    pub fn capture() -> Self {
        Self {
            home: directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()),
            gonzo_home: std::env::var_os("GONZO_HOME")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            editor: std::env::var("EDITOR").ok(),
            pager: std::env::var("PAGER").ok(),
        }
    }

    /// Where notes live for this environment.
    pub fn storage_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.gonzo_home {
            return Ok(root.clone());
        }
        self.home
            .as_ref()
            .map(|home| home.join(STORAGE_DIRNAME))
            .ok_or_else(|| GonzoError::Config("could not determine home directory".to_string()))
    }
}

/// Optional settings stored in `<root>/config.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: Option<String>,

    #[serde(default)]
    pub pager: Option<String>,
}

impl ConfigFile {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GonzoError::Io)?;
        let config: ConfigFile =
            serde_json::from_str(&content).map_err(GonzoError::Serialization)?;
        Ok(config)
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GonzoConfig {
    pub root: PathBuf,
    pub editor: String,
    pub pager: Option<String>,
}

impl GonzoConfig {
    pub fn resolve(root: PathBuf, env: &Environment, file: &ConfigFile) -> Self {
        let editor = non_blank(env.editor.as_deref())
            .or_else(|| non_blank(file.editor.as_deref()))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        let pager =
            non_blank(env.pager.as_deref()).or_else(|| non_blank(file.pager.as_deref()));

        Self {
            root,
            editor,
            pager,
        }
    }

    /// Resolves the storage root from `env`, then reads `config.json` there.
    pub fn load(env: &Environment) -> Result<Self> {
        let root = env.storage_root()?;
        let file = ConfigFile::load(&root)?;
        Ok(Self::resolve(root, env, &file))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
