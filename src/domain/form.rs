use std::collections::{BTreeMap, BTreeSet};

/// Accumulated field values across all visited steps.
///
/// Plain fields live in `values` and are overwritten on every save; the
/// distinguished `services` set holds selected service identifiers, with
/// duplicates impossible by construction. Fields never captured are simply
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<String, String>,
    services: BTreeSet<String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the value for `key`, regardless of any previous value.
    /// Empty strings are stored as-is, matching capture from blank controls.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value only when present and non-empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Adds a service identifier to the selected set. Idempotent.
    pub fn add_service(&mut self, id: impl Into<String>) {
        self.services.insert(id.into());
    }

    /// Removes a service identifier. No-op when absent.
    pub fn remove_service(&mut self, id: &str) {
        self.services.remove(id);
    }

    pub fn has_service(&self, id: &str) -> bool {
        self.services.contains(id)
    }

    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(String::as_str)
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.services.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.services.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_saves_overwrite_earlier_ones() {
        let mut form = FormData::new();
        form.set("venue", "Old Hall");
        form.set("venue", "New Hall");
        assert_eq!(form.get("venue"), Some("New Hall"));
    }

    #[test]
    fn empty_values_are_stored_but_filtered_by_get_non_empty() {
        let mut form = FormData::new();
        form.set("notes", "");
        assert_eq!(form.get("notes"), Some(""));
        assert_eq!(form.get_non_empty("notes"), None);
    }

    #[test]
    fn service_set_is_idempotent() {
        let mut form = FormData::new();
        form.add_service("candid");
        form.add_service("candid");
        assert_eq!(form.service_count(), 1);

        form.remove_service("candid");
        assert_eq!(form.service_count(), 0);

        // Removing an absent value is a no-op.
        form.remove_service("candid");
        assert_eq!(form.service_count(), 0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut form = FormData::new();
        form.set("contactName", "Asha");
        form.add_service("film");
        form.clear();
        assert!(form.is_empty());
    }
}
