use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an embedded frame, matching the element id the frame
/// carries in the hosting document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(String);

impl FrameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FrameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FrameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_id_display() {
        let id = FrameId::new("DemoIframe");
        assert_eq!(id.to_string(), "DemoIframe");
        assert_eq!(id.as_str(), "DemoIframe");
    }

    #[test]
    fn frame_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(FrameId::new("a"));
        set.insert(FrameId::new("b"));
        set.insert(FrameId::new("a"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn frame_id_serializes_transparently() {
        let id = FrameId::new("frameA");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"frameA\"");

        let parsed: FrameId = serde_json::from_str("\"frameA\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn frame_id_from_str_and_string() {
        let a: FrameId = "x".into();
        let b: FrameId = String::from("x").into();
        assert_eq!(a, b);
    }

    #[test]
    fn frame_id_empty() {
        assert!(FrameId::new("").is_empty());
        assert!(!FrameId::new("f").is_empty());
    }
}
