use crate::{
    file_for_property, load_json_from_file, resolve_access_type, VersionConfig, VersionInfo,
    PSU_DEVICES_KEY, VERSION_PROPERTY,
};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Why a descriptor could not produce a [`VersionInfo`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unable to find psuDevices")]
    MissingDevices,
    #[error("unable to find path for PSU {0}")]
    UnknownInventoryPath(String),
    #[error("device path for PSU {0} is not a string")]
    InvalidDevicePath(String),
    #[error("unable to find Version file")]
    MissingVersionFile,
}

/// Look up where and how to read the version of the PSU at `inventory_path`.
///
/// Only the entries this PSU needs are inspected, so malformed entries belonging to other
/// PSUs or other properties do not affect the result.
pub fn resolve_version_info(
    desc: &Value,
    inventory_path: &str,
) -> Result<VersionInfo, ResolveError> {
    let devices = desc.get(PSU_DEVICES_KEY).ok_or(ResolveError::MissingDevices)?;
    let device_path = devices
        .get(inventory_path)
        .ok_or_else(|| ResolveError::UnknownInventoryPath(inventory_path.to_string()))?
        .as_str()
        .ok_or_else(|| ResolveError::InvalidDevicePath(inventory_path.to_string()))?;
    let access_type = resolve_access_type(desc);
    let version_file = file_for_property(desc, VERSION_PROPERTY)
        .filter(|f| !f.is_empty())
        .ok_or(ResolveError::MissingVersionFile)?;
    Ok(VersionInfo {
        device_path: device_path.to_string(),
        access_type,
        version_file: version_file.to_string(),
    })
}

/// Load the configured descriptor and resolve `inventory_path` in it.
///
/// Every miss is logged at WARNING and yields `None`; a descriptor that cannot be loaded
/// at all yields `None` after the loader's own log line.
pub fn get_version_info(config: &VersionConfig, inventory_path: &str) -> Option<VersionInfo> {
    let desc = load_json_from_file(&config.psu_json_path)?;
    match resolve_version_info(&desc, inventory_path) {
        Ok(info) => Some(info),
        Err(
            e @ (ResolveError::UnknownInventoryPath(_) | ResolveError::InvalidDevicePath(_)),
        ) => {
            warn!(path = inventory_path, "{e}");
            None
        }
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}
