//! SensorId - cheap-to-clone sensor identifier backed by `Arc<str>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Sensor identifier with O(1) clone.
///
/// Created once when the descriptor is loaded and cloned freely afterwards
/// (log fields, metric labels, sink paths).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SensorId(Arc<str>);

impl SensorId {
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SensorId {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl Deref for SensorId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SensorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SensorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SensorId {
    fn from(s: String) -> Self {
        Self(Arc::from(s.as_str()))
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SensorId({})", &self.0)
    }
}

impl Serialize for SensorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SensorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_same_allocation() {
        let id = SensorId::new("pad_a1");
        let id2 = id.clone();
        assert_eq!(id, id2);
        assert!(Arc::ptr_eq(&id.0, &id2.0));
    }

    #[test]
    fn test_serde_round_trip() {
        let id: SensorId = "pad_a1".into();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"pad_a1\"");
        let back: SensorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
