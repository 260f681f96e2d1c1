use crate::TransportError;
use core::fmt;
use core::str::FromStr;

/// Selects which directory a PMBus file is read from.
///
/// The names match the spelling used in platform descriptors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum AccessType {
    /// The device directory itself.
    Base,
    /// `<device>/hwmon/hwmonN`
    #[default]
    Hwmon,
    /// `<debugfs>/<driver>`
    Debug,
    /// `<debugfs>/<driver>.<instance>`
    DeviceDebug,
    /// `<debugfs>/<driver>/hwmonN`
    HwmonDeviceDebug,
}

impl AccessType {
    pub const ALL: [AccessType; 5] = [
        AccessType::Base,
        AccessType::Hwmon,
        AccessType::Debug,
        AccessType::DeviceDebug,
        AccessType::HwmonDeviceDebug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccessType::Base => "Base",
            AccessType::Hwmon => "Hwmon",
            AccessType::Debug => "Debug",
            AccessType::DeviceDebug => "DeviceDebug",
            AccessType::HwmonDeviceDebug => "HwmonDeviceDebug",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| TransportError::UnknownAccessType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_descriptor_spelling() {
        for t in AccessType::ALL {
            assert_eq!(t.to_string().parse::<AccessType>().unwrap(), t);
        }
        assert_eq!(" Base ".parse::<AccessType>().unwrap(), AccessType::Base);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "hwmon".parse::<AccessType>().unwrap_err();
        assert!(matches!(err, TransportError::UnknownAccessType(ref s) if s == "hwmon"));
    }

    #[test]
    fn defaults_to_hwmon() {
        assert_eq!(AccessType::default(), AccessType::Hwmon);
    }
}
