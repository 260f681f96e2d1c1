use pmbus_transport::AccessType;
use serde_json::Value;

/// Inventory path -> device path.
pub const PSU_DEVICES_KEY: &str = "psuDevices";
/// Field records mapping inventory properties onto PMBus files.
pub const FRU_CONFIGS_KEY: &str = "fruConfigs";
pub const ACCESS_TYPE_KEY: &str = "inventoryPMBusAccessType";

/// Property name of the field record that names the version file.
pub const VERSION_PROPERTY: &str = "Version";

/// File name of the first `fruConfigs` record whose `propertyName` is `property`.
///
/// Records after the first match are never looked at, and a first match without a string
/// `fileName` hides any later record with the same property name.
pub fn file_for_property<'a>(desc: &'a Value, property: &str) -> Option<&'a str> {
    desc.get(FRU_CONFIGS_KEY)
        .and_then(Value::as_array)?
        .iter()
        .find(|fru| fru.get("propertyName").and_then(Value::as_str) == Some(property))?
        .get("fileName")
        .and_then(Value::as_str)
}

/// Everything needed to read one PSU's version: where, how, and which file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub device_path: String,
    pub access_type: AccessType,
    pub version_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_file_in_platform_shape() {
        let d = json!({
            "psuDevices": { "/psu0": "/sys/bus/i2c/devices/3-0068" },
            "fruConfigs": [
                { "propertyName": "PartNumber", "fileName": "part_number", "interface": "xyz.openbmc_project.Inventory.Decorator.Asset" },
                { "propertyName": "Version", "fileName": "fw_version", "interface": "xyz.openbmc_project.Software.Version" }
            ],
            "inventoryPMBusAccessType": "Debug",
            "unrelated": 42
        });
        assert_eq!(file_for_property(&d, VERSION_PROPERTY), Some("fw_version"));
        assert_eq!(file_for_property(&d, "PartNumber"), Some("part_number"));
    }

    #[test]
    fn first_matching_record_wins() {
        let d = json!({
            "fruConfigs": [
                { "propertyName": "Version", "fileName": "first" },
                { "propertyName": "Version", "fileName": "second" }
            ]
        });
        assert_eq!(file_for_property(&d, "Version"), Some("first"));

        let d = json!({
            "fruConfigs": [
                { "propertyName": "Version" },
                { "propertyName": "Version", "fileName": "second" }
            ]
        });
        assert_eq!(file_for_property(&d, "Version"), None);
    }

    #[test]
    fn records_after_the_match_are_not_inspected() {
        let d = json!({
            "fruConfigs": [
                { "propertyName": "Version", "fileName": "fw_version" },
                { "propertyName": "Present", "fileName": 1 },
                null
            ]
        });
        assert_eq!(file_for_property(&d, "Version"), Some("fw_version"));
    }

    #[test]
    fn missing_or_mistyped_sections() {
        assert_eq!(file_for_property(&json!({}), "Version"), None);
        assert_eq!(
            file_for_property(&json!({ "fruConfigs": { "Version": "x" } }), "Version"),
            None
        );
    }
}
