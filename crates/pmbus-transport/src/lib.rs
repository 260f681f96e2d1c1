//! pmbus-transport: PMBus device access abstractions
//!
//! This crate provides a trait and types for reading string registers exposed by the
//! Linux pmbus drivers, with feature-gated backends. The default build enables a `mock`
//! backend so that binaries and tests can run on any host without real hardware.

mod types;
pub use types::AccessType;

mod error;
pub use error::{Result, TransportError};

mod traits;
pub use traits::PmbusDevice;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockDevice;

#[cfg(feature = "sysfs")]
mod sysfs;

#[cfg(feature = "sysfs")]
pub use sysfs::{SysfsDevice, SysfsOptions, DEFAULT_DEBUG_ROOT};
