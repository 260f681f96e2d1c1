use crate::{AccessType, Result};
use std::path::Path;

/// A minimal blocking PMBus device interface.
///
/// A value of this type is one session bound to a single device directory. Dropping it
/// releases whatever the backend holds.
pub trait PmbusDevice {
    /// Open a device by its sysfs path (e.g., "/sys/bus/i2c/devices/3-0068").
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// The device path this session is bound to.
    fn device_path(&self) -> &Path;

    /// Read the named string file from the directory selected by `access`.
    fn read_string(&self, name: &str, access: AccessType) -> Result<String>;
}
