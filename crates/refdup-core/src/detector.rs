use std::collections::HashMap;

use serde::Serialize;

use crate::{DuplicateGroup, Entry};

/// Duplicate groups keyed by normalized title, in first-encounter order.
///
/// Every group holds at least two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DuplicateMap {
    groups: Vec<DuplicateGroup>,
}

impl DuplicateMap {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up the group for a normalized title.
    pub fn get(&self, normalized_title: &str) -> Option<&DuplicateGroup> {
        self.groups
            .iter()
            .find(|g| g.normalized_title == normalized_title)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.normalized_title.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DuplicateGroup> {
        self.groups.iter()
    }

    pub fn groups(&self) -> &[DuplicateGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<DuplicateGroup> {
        self.groups
    }
}

impl IntoIterator for DuplicateMap {
    type Item = DuplicateGroup;
    type IntoIter = std::vec::IntoIter<DuplicateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a DuplicateMap {
    type Item = &'a DuplicateGroup;
    type IntoIter = std::slice::Iter<'a, DuplicateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group entries by normalized title and keep only the groups with two or
/// more members.
///
/// Entries keep their input order inside a group; groups are ordered by the
/// first entry that introduced their key. Keys are compared exactly, which is
/// case-insensitive in practice because normalized titles are lowercased.
pub fn find_duplicates(entries: &[Entry]) -> DuplicateMap {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.normalized_title.as_str()) {
            Some(&i) => groups[i].entries.push(entry.clone()),
            None => {
                index.insert(entry.normalized_title.as_str(), groups.len());
                groups.push(DuplicateGroup {
                    normalized_title: entry.normalized_title.clone(),
                    entries: vec![entry.clone()],
                });
            }
        }
    }

    let unique_titles = groups.len();
    groups.retain(|g| g.entries.len() > 1);
    tracing::debug!(
        entries = entries.len(),
        unique_titles,
        duplicate_groups = groups.len(),
        "duplicate detection complete"
    );

    DuplicateMap { groups }
}
