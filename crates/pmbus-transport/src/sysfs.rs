use crate::{AccessType, PmbusDevice, Result, TransportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where debugfs is normally mounted.
pub const DEFAULT_DEBUG_ROOT: &str = "/sys/kernel/debug";

/// Tunables for resolving the debugfs side of a device.
#[derive(Clone, Debug)]
pub struct SysfsOptions {
    /// debugfs mount point.
    pub debug_root: PathBuf,
    /// Instance number used by [`AccessType::DeviceDebug`] (`<driver>.<instance>`).
    pub instance: usize,
}

impl Default for SysfsOptions {
    fn default() -> Self {
        Self {
            debug_root: PathBuf::from(DEFAULT_DEBUG_ROOT),
            instance: 0,
        }
    }
}

/// Reads files the Linux pmbus drivers expose under sysfs and debugfs.
pub struct SysfsDevice {
    base: PathBuf,
    opts: SysfsOptions,
}

impl SysfsDevice {
    pub fn open_with(path: &Path, opts: SysfsOptions) -> Result<Self> {
        if !path.is_dir() {
            return Err(TransportError::DeviceNotFound(path.display().to_string()));
        }
        Ok(Self {
            base: path.to_path_buf(),
            opts,
        })
    }

    /// Directory that files of the given access type live in.
    pub fn dir_for(&self, access: AccessType) -> Result<PathBuf> {
        let dir = match access {
            AccessType::Base => self.base.clone(),
            AccessType::Hwmon => self.base.join("hwmon").join(self.hwmon_dir()?),
            AccessType::Debug => self.opts.debug_root.join(self.driver_name()?),
            AccessType::DeviceDebug => self.opts.debug_root.join(format!(
                "{}.{}",
                self.driver_name()?,
                self.opts.instance
            )),
            AccessType::HwmonDeviceDebug => self
                .opts
                .debug_root
                .join(self.driver_name()?)
                .join(self.hwmon_dir()?),
        };
        Ok(dir)
    }

    // First `hwmon*` entry under `<base>/hwmon`, sorted so the choice is stable.
    fn hwmon_dir(&self) -> Result<String> {
        let parent = self.base.join("hwmon");
        let not_found = || TransportError::HwmonNotFound(self.base.display().to_string());
        let entries = fs::read_dir(&parent).map_err(|_| not_found())?;
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|n| n.starts_with("hwmon"))
            .collect();
        names.sort();
        names.into_iter().next().ok_or_else(not_found)
    }

    fn driver_name(&self) -> Result<String> {
        let link = self.base.join("driver");
        fs::read_link(&link)
            .ok()
            .and_then(|target| target.file_name().map(|n| n.to_string_lossy().into_owned()))
            .filter(|n| !n.is_empty())
            .ok_or_else(|| TransportError::DriverNotFound(self.base.display().to_string()))
    }
}

impl PmbusDevice for SysfsDevice {
    fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, SysfsOptions::default())
    }

    fn device_path(&self) -> &Path {
        &self.base
    }

    fn read_string(&self, name: &str, access: AccessType) -> Result<String> {
        let path = self.dir_for(access)?.join(name);
        debug!(path = %path.display(), %access, "reading pmbus string");
        let raw = fs::read_to_string(&path)
            .map_err(|e| TransportError::Io(format!("{}: {e}", path.display())))?;
        // First whitespace-separated token; leading blanks and newlines are skipped.
        Ok(raw.split_whitespace().next().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    struct FakeTree {
        _root: TempDir,
        dev: PathBuf,
        debug: PathBuf,
    }

    fn fake_tree() -> Result<FakeTree> {
        let root = tempfile::tempdir()?;
        let dev = root.path().join("devices/3-0068");
        let debug = root.path().join("debug");
        let drivers = root.path().join("drivers/ibm-cffps");
        fs::create_dir_all(dev.join("hwmon/hwmon7"))?;
        fs::create_dir_all(dev.join("hwmon/hwmon12"))?;
        fs::create_dir_all(&drivers)?;
        symlink(&drivers, dev.join("driver"))?;
        fs::write(dev.join("fw_version"), "base-01\n")?;
        fs::write(dev.join("hwmon/hwmon12/fw_version"), "hwmon-02\n")?;
        fs::create_dir_all(debug.join("ibm-cffps/hwmon12"))?;
        fs::create_dir_all(debug.join("ibm-cffps.2"))?;
        fs::write(debug.join("ibm-cffps/fw_version"), "debug-03\n")?;
        fs::write(debug.join("ibm-cffps.2/fw_version"), "devdebug-04\nsecond line\n")?;
        fs::write(debug.join("ibm-cffps/hwmon12/fw_version"), "hwdebug-05  \n")?;
        Ok(FakeTree {
            _root: root,
            dev,
            debug,
        })
    }

    fn open(tree: &FakeTree) -> Result<SysfsDevice> {
        let opts = SysfsOptions {
            debug_root: tree.debug.clone(),
            instance: 2,
        };
        Ok(SysfsDevice::open_with(&tree.dev, opts)?)
    }

    #[test]
    fn reads_from_every_access_type() -> Result<()> {
        let tree = fake_tree()?;
        let dev = open(&tree)?;
        let expected = [
            (AccessType::Base, "base-01"),
            (AccessType::Hwmon, "hwmon-02"),
            (AccessType::Debug, "debug-03"),
            (AccessType::DeviceDebug, "devdebug-04"),
            (AccessType::HwmonDeviceDebug, "hwdebug-05"),
        ];
        for (access, want) in expected {
            assert_eq!(dev.read_string("fw_version", access)?, want, "{access}");
        }
        Ok(())
    }

    #[test]
    fn hwmon_dir_is_first_sorted_entry() -> Result<()> {
        let tree = fake_tree()?;
        let dev = open(&tree)?;
        // "hwmon12" sorts before "hwmon7"
        assert_eq!(
            dev.dir_for(AccessType::Hwmon)?,
            tree.dev.join("hwmon/hwmon12")
        );
        Ok(())
    }

    #[test]
    fn missing_pieces_are_errors() -> Result<()> {
        let root = tempfile::tempdir()?;
        let dev = SysfsDevice::open(root.path())?;
        assert!(matches!(
            dev.read_string("fw_version", AccessType::Hwmon),
            Err(TransportError::HwmonNotFound(_))
        ));
        assert!(matches!(
            dev.read_string("fw_version", AccessType::Debug),
            Err(TransportError::DriverNotFound(_))
        ));
        assert!(matches!(
            dev.read_string("fw_version", AccessType::Base),
            Err(TransportError::Io(_))
        ));
        Ok(())
    }

    #[test]
    fn reads_first_token_only() -> Result<()> {
        let tree = fake_tree()?;
        fs::write(tree.dev.join("fw_padded"), "  0102 x\n")?;
        fs::write(tree.dev.join("fw_blank"), "\n\n 0304\n")?;
        fs::write(tree.dev.join("fw_empty"), "")?;
        let dev = open(&tree)?;
        assert_eq!(dev.read_string("fw_padded", AccessType::Base)?, "0102");
        assert_eq!(dev.read_string("fw_blank", AccessType::Base)?, "0304");
        assert_eq!(dev.read_string("fw_empty", AccessType::Base)?, "");
        Ok(())
    }

    #[test]
    fn device_debug_uses_instance_zero_by_default() -> Result<()> {
        let tree = fake_tree()?;
        fs::create_dir_all(tree.debug.join("ibm-cffps.0"))?;
        fs::write(tree.debug.join("ibm-cffps.0/fw_version"), "instance0-06\n")?;

        let defaults = SysfsOptions::default();
        assert_eq!(defaults.instance, 0);
        assert_eq!(defaults.debug_root, PathBuf::from(DEFAULT_DEBUG_ROOT));

        let opts = SysfsOptions {
            debug_root: tree.debug.clone(),
            ..SysfsOptions::default()
        };
        let dev = SysfsDevice::open_with(&tree.dev, opts)?;
        assert_eq!(
            dev.dir_for(AccessType::DeviceDebug)?,
            tree.debug.join("ibm-cffps.0")
        );
        assert_eq!(
            dev.read_string("fw_version", AccessType::DeviceDebug)?,
            "instance0-06"
        );
        Ok(())
    }

    #[test]
    fn open_rejects_missing_directory() {
        let err = SysfsDevice::open(Path::new("/nonexistent/pmbus/device"))
            .err()
            .unwrap();
        assert!(matches!(err, TransportError::DeviceNotFound(_)));
    }
}
