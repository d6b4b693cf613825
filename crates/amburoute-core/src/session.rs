use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Local identity tag for the driver at the wheel.
///
/// Not a credential: there is no password and nothing is checked server-side.
/// Stored as `{"name", "phone", "ambulanceNo"}` under the `driver` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverSession {
    pub name: String,
    pub phone: String,
    #[serde(rename = "ambulanceNo")]
    pub ambulance_no: String,
}

impl DriverSession {
    /// Storage key of the session record.
    pub const STORAGE_KEY: &'static str = "driver";

    /// Builds a session after presence-only validation of each field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] naming the first blank field.
    pub fn new(name: &str, phone: &str, ambulance_no: &str) -> Result<Self, CoreError> {
        let required = |field: &'static str, value: &str| -> Result<String, CoreError> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(CoreError::MissingField(field))
            } else {
                Ok(trimmed.to_string())
            }
        };

        Ok(Self {
            name: required("name", name)?,
            phone: required("phone", phone)?,
            ambulance_no: required("ambulance number", ambulance_no)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_fields() {
        let session = DriverSession::new(" Ravi ", "98400 12345", " TN-01-AB-1234").unwrap();
        assert_eq!(session.name, "Ravi");
        assert_eq!(session.ambulance_no, "TN-01-AB-1234");
    }

    #[test]
    fn new_rejects_blank_field() {
        let err = DriverSession::new("Ravi", "  ", "TN-01").unwrap_err();
        assert!(matches!(err, CoreError::MissingField("phone")));
        assert!(err.to_string().starts_with("Please fill all fields"));
    }

    #[test]
    fn serializes_with_camel_case_ambulance_no() {
        let session = DriverSession::new("Ravi", "98400", "TN-01").unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["ambulanceNo"], "TN-01");
        assert!(json.get("ambulance_no").is_none());
    }
}
