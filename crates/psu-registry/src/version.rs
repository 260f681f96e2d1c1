use crate::{get_version_info, VersionConfig, VersionInfo};
use pmbus_transport::PmbusDevice;
use std::path::Path;
use tracing::error;

/// Backend used by [`get_version`].
#[cfg(feature = "sysfs")]
pub type DefaultDevice = pmbus_transport::SysfsDevice;
#[cfg(not(feature = "sysfs"))]
pub type DefaultDevice = pmbus_transport::MockDevice;

/// Firmware version of the PSU at `inventory_path`, or an empty string if it cannot be
/// determined. Callers must treat empty as "unknown".
pub fn get_version(config: &VersionConfig, inventory_path: &str) -> String {
    get_version_with::<DefaultDevice>(config, inventory_path)
}

/// [`get_version`] over an explicit transport backend.
pub fn get_version_with<D: PmbusDevice>(config: &VersionConfig, inventory_path: &str) -> String {
    match get_version_info(config, inventory_path) {
        Some(info) => version_from_info::<D>(&info, inventory_path),
        None => String::new(),
    }
}

/// Read the version described by an already resolved `info`.
///
/// `inventory_path` only labels the log line written when the transport fails.
pub fn version_from_info<D: PmbusDevice>(info: &VersionInfo, inventory_path: &str) -> String {
    if info.device_path.is_empty() || info.version_file.is_empty() {
        return String::new();
    }
    match read_version::<D>(info) {
        Ok(version) => version,
        Err(e) => {
            error!(path = inventory_path, device = %info.device_path, "{e}");
            String::new()
        }
    }
}

// The session lives only for this call; it is dropped on both exits.
fn read_version<D: PmbusDevice>(info: &VersionInfo) -> pmbus_transport::Result<String> {
    let dev = D::open(Path::new(&info.device_path))?;
    dev.read_string(&info.version_file, info.access_type)
}

/// The newest of `versions` in plain string order, or empty when there are none.
///
/// Ties keep the earliest entry.
pub fn get_latest<S: AsRef<str>>(versions: &[S]) -> String {
    let mut latest: Option<&str> = None;
    for version in versions {
        let version = version.as_ref();
        if latest.map_or(true, |best| version > best) {
            latest = Some(version);
        }
    }
    latest.map(str::to_string).unwrap_or_default()
}
