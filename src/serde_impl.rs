//! `serde` support: a container is (de)serialized as the sequence of its
//! live elements. The capacity is not part of the representation.

use crate::Container;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<TEntry> Serialize for Container<TEntry>
where
    TEntry: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// The deserialized container has a capacity equal to its length.
impl<'de, TEntry> Deserialize<'de> for Container<TEntry>
where
    TEntry: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<TEntry>::deserialize(deserializer).map(Container::from)
    }
}
