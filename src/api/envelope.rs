use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Outcome of a control endpoint.
///
/// Serialized as `{"success":true,"data":{..}}` or
/// `{"success":false,"error":".."}`. Recorder-state violations ride in the
/// error shape while the HTTP status stays 200; clients branch on the
/// `success` field, not the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Value),
    Error(String),
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Envelope::Success(data)
    }

    /// Success with an empty data object, for commands that report nothing.
    pub fn success_empty() -> Self {
        Envelope::Success(Value::Object(serde_json::Map::new()))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Envelope::Success(data) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            Envelope::Error(message) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", message)?;
            }
        }
        map.end()
    }
}
