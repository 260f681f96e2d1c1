use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where platforms install the PSU descriptor.
pub const DEFAULT_PSU_JSON_PATH: &str = "/usr/share/phosphor-power/psu.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionConfig {
    pub psu_json_path: PathBuf,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            psu_json_path: PathBuf::from(DEFAULT_PSU_JSON_PATH),
        }
    }
}

impl VersionConfig {
    pub fn new(psu_json_path: impl AsRef<Path>) -> Self {
        Self {
            psu_json_path: psu_json_path.as_ref().to_path_buf(),
        }
    }
}
