/// Ordered chart parameters.
///
/// Entries keep the order in which their keys were first set; setting an
/// existing key replaces its value in place. The query string and therefore
/// the request signature depend on this order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterStore {
    entries: Vec<(String, String)>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = ParameterStore::new();
        assert!(store.is_empty());
        assert_eq!(store.entries().count(), 0);
        assert!(!store.has("cht"));
        assert_eq!(store.get("cht"), None);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut store = ParameterStore::new();
        store.set("cht", "p").set("chd", "t:1,2,3").set("chs", "100x100");

        let keys: Vec<&str> = store.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["cht", "chd", "chs"]);
        assert_eq!(store.get("chd"), Some("t:1,2,3"));
        assert!(store.has("chs"));
    }

    #[test]
    fn test_set_existing_key_overwrites_in_place() {
        let mut store = ParameterStore::new();
        store.set("cht", "p").set("chd", "t:1,2,3").set("cht", "lc");

        let entries: Vec<(&str, &str)> = store.entries().collect();
        assert_eq!(entries, vec![("cht", "lc"), ("chd", "t:1,2,3")]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let mut store = ParameterStore::new();
        store.set("chtt", "");
        assert!(store.has("chtt"));
        assert_eq!(store.get("chtt"), Some(""));
    }
}
