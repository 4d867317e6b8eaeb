use std::{
    env,
    path::{Path, PathBuf},
};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PANEL_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

pub const CSV_FILE: &str = "projects_raw.csv";
pub const JSON_FILE: &str = "projects.json";
pub const JS_FILE: &str = "projects.js";

/// Where the export is read from and the two outputs are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub js: PathBuf,
}

impl PanelPaths {
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            csv: dir.join(CSV_FILE),
            json: dir.join(JSON_FILE),
            js: dir.join(JS_FILE),
        }
    }

    /// `$PANEL_DATA_DIR`, or `./data` when unset or empty.
    pub fn from_env() -> Self {
        let dir = env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::from_data_dir(dir)
    }
}
