use std::collections::BTreeMap;

use serde::Serialize;

/// Field key to user-facing message for one wizard step.
///
/// Keys are field keys (`activityName`, `contactNumber`, …) or the
/// cross-field key [`MEMBERS_KEY`](crate::validation::MEMBERS_KEY).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: BTreeMap<&'static str, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message, replacing any earlier one under the same key.
    pub fn insert(&mut self, key: &'static str, message: impl Into<String>) {
        self.entries.insert(key, message.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, message)| (*key, message.as_str()))
    }
}

impl<const N: usize> From<[(&'static str, &str); N]> for ErrorMap {
    fn from(pairs: [(&'static str, &str); N]) -> Self {
        let mut map = ErrorMap::new();
        for (key, message) in pairs {
            map.insert(key, message);
        }
        map
    }
}
