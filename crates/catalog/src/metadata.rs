//! Frozen keyed metadata.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable `String -> String` map owned by an aggregate.
///
/// Built once from caller data, then never mutated: the API is read-only and the
/// storage is shared (`Arc`) so clones and reads never copy entries. Keys are
/// unique; when the source yields a key twice the later value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Arc<BTreeMap<String, String>>,
}

impl Metadata {
    /// Take a snapshot of `entries`.
    ///
    /// Every key and value is copied into fresh storage, so later changes to the
    /// source collection cannot reach the snapshot.
    pub fn freeze<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut frozen = BTreeMap::new();
        for (key, value) in entries {
            frozen.insert(key.into(), value.into());
        }
        Self {
            entries: Arc::new(frozen),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// An owned, mutable copy detached from this snapshot.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.entries).clone()
    }

    /// Whether both handles read the same frozen storage.
    pub fn shares_storage_with(&self, other: &Metadata) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::freeze(iter)
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Self {
            entries: Arc::new(entries),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("City".to_string(), "Vallentuna".to_string());
        map.insert("Company".to_string(), "Truesec".to_string());
        map
    }

    #[test]
    fn freeze_copies_source_entries() {
        let mut map = source();
        let frozen = Metadata::freeze(&map);

        map.insert("City".to_string(), "Stockholm".to_string());
        map.remove("Company");

        assert_eq!(frozen.get("City"), Some("Vallentuna"));
        assert_eq!(frozen.get("Company"), Some("Truesec"));
        assert_eq!(frozen.len(), 2);
    }

    #[test]
    fn duplicate_keys_keep_the_last_value() {
        let frozen: Metadata = [("City", "Vallentuna"), ("City", "Stockholm")]
            .into_iter()
            .collect();
        assert_eq!(frozen.len(), 1);
        assert_eq!(frozen.get("City"), Some("Stockholm"));
    }

    #[test]
    fn detached_copy_does_not_write_back() {
        let frozen = Metadata::freeze(&source());
        let mut copy = frozen.to_map();
        copy.remove("Company");
        copy.insert("City".to_string(), "Stockholm".to_string());

        assert!(frozen.contains_key("Company"));
        assert_eq!(frozen.get("City"), Some("Vallentuna"));
    }

    #[test]
    fn clones_share_storage() {
        let frozen = Metadata::freeze(&source());
        let handle = frozen.clone();
        assert!(handle.shares_storage_with(&frozen));
        assert!(!Metadata::freeze(&source()).shares_storage_with(&frozen));
    }

    #[test]
    fn iteration_is_key_ordered() {
        let frozen = Metadata::freeze([("b", "2"), ("a", "1"), ("c", "3")]);
        let keys: Vec<&str> = frozen.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        let values: Vec<&str> = frozen.values().collect();
        assert_eq!(values, ["1", "2", "3"]);
        assert_eq!(frozen.iter().count(), (&frozen).into_iter().count());
    }

    #[test]
    fn empty_metadata() {
        let frozen = Metadata::default();
        assert!(frozen.is_empty());
        assert_eq!(frozen.get("City"), None);
    }

    #[test]
    fn serializes_as_plain_map() {
        let frozen = Metadata::freeze(&source());
        let json = serde_json::to_string(&frozen).unwrap();
        assert_eq!(json, r#"{"City":"Vallentuna","Company":"Truesec"}"#);

        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frozen);
        assert!(!back.shares_storage_with(&frozen));
    }
}
