use internment::Intern;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

/// A [`NodeId`] names a node of a [`crate::graph::Graph`]. The name is
/// interned, so copying and comparing ids is cheap, but ordering still
/// follows the text of the name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    inner: Intern<String>,
}

impl NodeId {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Intern::new(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self {
            inner: Intern::new(name),
        }
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(NodeId::from)
    }
}
