use crate::ACCESS_TYPE_KEY;
use pmbus_transport::AccessType;
use serde_json::Value;
use tracing::warn;

/// Access type declared by the descriptor, or [`AccessType::Hwmon`] when it declares none
/// or one this build does not know.
pub fn resolve_access_type(desc: &Value) -> AccessType {
    let fallback = AccessType::default();
    let Some(raw) = desc.get(ACCESS_TYPE_KEY) else {
        return fallback;
    };
    let Some(name) = raw.as_str() else {
        warn!(value = %raw, %fallback, "access type is not a string");
        return fallback;
    };
    name.parse().unwrap_or_else(|e| {
        warn!(value = name, %fallback, "{e}");
        fallback
    })
}
