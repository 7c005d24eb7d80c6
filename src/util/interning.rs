//! Interned module-name storage.
//!
//! Merge deduplication compares module names pairwise, so name equality
//! must not cost a string walk. Every distinct name is stored once for
//! the life of the process and handles compare by pointer.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{LazyLock, Mutex};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The process-wide pool of interned names.
///
/// Entries are leaked on first sight; the pool only ever grows. A plain
/// mutex is enough: interning happens while parsing the manifest and
/// scanning the tree, never on a hot path.
static POOL: LazyLock<Mutex<HashSet<&'static str>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

fn intern(name: &str) -> &'static str {
    let mut pool = POOL.lock().unwrap();
    match pool.get(name) {
        Some(&stored) => stored,
        None => {
            let stored: &'static str = Box::leak(name.to_owned().into_boxed_str());
            pool.insert(stored);
            stored
        }
    }
}

/// A handle to a pooled string.
///
/// Two handles are equal exactly when they point at the same pool
/// entry, so equality is a pointer comparison. Ordering and hashing go
/// through the content, which keeps `Borrow<str>` map lookups sound.
#[derive(Clone, Copy)]
pub struct InternedString(&'static str);

impl InternedString {
    pub fn new(s: impl AsRef<str>) -> Self {
        InternedString(intern(s.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl PartialEq for InternedString {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for InternedString {}

impl PartialOrd for InternedString {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InternedString {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(other.0)
    }
}

impl Hash for InternedString {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Deref for InternedString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for InternedString {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Borrow<str> for InternedString {
    #[inline]
    fn borrow(&self) -> &str {
        self.0
    }
}

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl From<&str> for InternedString {
    fn from(s: &str) -> Self {
        InternedString::new(s)
    }
}

impl From<String> for InternedString {
    fn from(s: String) -> Self {
        InternedString::new(s)
    }
}

impl Serialize for InternedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for InternedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(InternedString::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_shares_storage() {
        let a = InternedString::new("quantor.core");
        let b = InternedString::new(String::from("quantor.core"));
        let c = InternedString::new("quantor.settings");

        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
        assert_ne!(a, c);
    }

    #[test]
    fn test_handles_work_as_map_keys() {
        use std::collections::HashMap;

        let mut index = HashMap::new();
        index.insert(InternedString::new("quantor.time.date"), 42);

        assert_eq!(
            index.get(&InternedString::new("quantor.time.date")),
            Some(&42)
        );
        assert_eq!(index.get(&InternedString::new("quantor.time")), None);
    }

    #[test]
    fn test_str_lookup_through_borrow() {
        let pool: HashSet<InternedString> = [
            InternedString::new("quantor.core"),
            InternedString::new("quantor.cashflow"),
        ]
        .into_iter()
        .collect();

        assert!(pool.contains("quantor.core"));
        assert!(!pool.contains("quantor.settings"));
    }

    #[test]
    fn test_ordering_follows_content() {
        let names = [
            InternedString::new("quantor.zeta"),
            InternedString::new("quantor.alpha"),
        ];
        let mut sorted = names;
        sorted.sort();

        assert_eq!(sorted[0].as_str(), "quantor.alpha");
        assert!(sorted[0] < sorted[1]);
    }
}
