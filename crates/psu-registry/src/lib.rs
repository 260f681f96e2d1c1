//! psu-registry: JSON-driven lookup of PSU devices and their firmware versions

mod types;
pub use types::*;

mod config;
pub use config::{VersionConfig, DEFAULT_PSU_JSON_PATH};

mod loader;
pub use loader::{load_descriptor_file, load_json_from_file};

mod access;
pub use access::resolve_access_type;

mod resolve;
pub use resolve::{get_version_info, resolve_version_info, ResolveError};

mod version;
pub use version::{get_latest, get_version, get_version_with, version_from_info, DefaultDevice};
