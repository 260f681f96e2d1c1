use thiserror::Error;

pub type Result<T, E = TransportError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),
    #[error("no hwmon directory under {0}")]
    HwmonNotFound(String),
    #[error("unable to determine driver name for {0}")]
    DriverNotFound(String),
    #[error("unknown access type: {0}")]
    UnknownAccessType(String),
    #[error("I/O error: {0}")]
    Io(String),
}
