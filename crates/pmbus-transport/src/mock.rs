use crate::{AccessType, PmbusDevice, Result, TransportError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

#[derive(Default)]
struct MockEntry {
    files: HashMap<(AccessType, String), String>,
    fail_reads: bool,
}

type Table = HashMap<PathBuf, MockEntry>;

fn table() -> MutexGuard<'static, Table> {
    static TABLE: OnceLock<Mutex<Table>> = OnceLock::new();
    TABLE
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// An in-process mock device. Devices exist once something is installed at their path.
///
/// The table is shared by the whole process, so tests should use distinct device paths.
pub struct MockDevice {
    path: PathBuf,
}

impl MockDevice {
    /// Register `value` as the content of file `name` under `access` for `device`.
    pub fn install(device: impl Into<PathBuf>, access: AccessType, name: &str, value: &str) {
        table()
            .entry(device.into())
            .or_default()
            .files
            .insert((access, name.to_string()), value.to_string());
    }

    /// Forget a device and everything installed for it.
    pub fn remove(device: &Path) {
        table().remove(device);
    }

    /// Make every read on `device` fail (or succeed again).
    pub fn fail_reads(device: impl Into<PathBuf>, fail: bool) {
        table().entry(device.into()).or_default().fail_reads = fail;
    }
}

impl PmbusDevice for MockDevice {
    fn open(path: &Path) -> Result<Self> {
        if !table().contains_key(path) {
            return Err(TransportError::DeviceNotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn device_path(&self) -> &Path {
        &self.path
    }

    fn read_string(&self, name: &str, access: AccessType) -> Result<String> {
        let table = table();
        let entry = table
            .get(&self.path)
            .ok_or_else(|| TransportError::DeviceNotFound(self.path.display().to_string()))?;
        if entry.fail_reads {
            return Err(TransportError::Io(format!(
                "{}: injected read failure",
                self.path.display()
            )));
        }
        entry
            .files
            .get(&(access, name.to_string()))
            .cloned()
            .ok_or_else(|| {
                TransportError::Io(format!(
                    "{}/{name} ({access}): no such file",
                    self.path.display()
                ))
            })
    }
}
